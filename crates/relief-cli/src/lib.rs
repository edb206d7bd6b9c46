//! # relief-cli
//!
//! Command implementations behind the `relief` binary.

pub mod commands;
