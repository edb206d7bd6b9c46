//! # relief-io
//!
//! The pipeline's configuration boundary: the [`Settings`] record the UI
//! layer fills in, and its validation.
//!
//! Settings are serializable (camelCase keys, every field optional) so
//! they can travel as TOML files or JSON payloads.

pub mod contract;
pub mod validator;

pub use contract::{Projection, Settings};
pub use validator::validate_settings;
