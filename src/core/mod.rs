//! Core record types, code tables, formatting, and errors.
//!
//! This module provides the normalized invoice model produced by the
//! Facturae extractor, the fixed Spanish code tables, and the
//! sentinel-on-missing formatting rules.

mod codes;
mod error;
pub mod format;
mod types;

pub use codes::*;
pub use error::*;
pub use types::*;
