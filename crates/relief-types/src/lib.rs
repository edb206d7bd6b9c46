//! # relief-types
//!
//! Shared error types, numeric constants, and the scalar alias
//! for the Relief image-to-mesh pipeline.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Relief crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{ReliefError, ReliefResult};
pub use scalar::Scalar;
