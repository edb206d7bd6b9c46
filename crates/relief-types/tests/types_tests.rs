//! Integration tests for relief-types.

use relief_types::constants::{LUMA_B, LUMA_G, LUMA_R};
use relief_types::ReliefError;

#[test]
fn luma_weights_sum_to_one() {
    let sum = LUMA_R + LUMA_G + LUMA_B;
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn config_error_names_setting() {
    let err = ReliefError::config("resolution", "must be at least 2");
    let msg = format!("{err}");
    assert!(msg.contains("resolution"));
    assert!(msg.contains("at least 2"));
}

#[test]
fn processing_error_names_stage() {
    let err = ReliefError::processing("bilateral", "weight sum vanished");
    assert!(format!("{err}").contains("bilateral"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ReliefError = io.into();
    assert!(matches!(err, ReliefError::Io(_)));
}
