//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod error;
pub mod format;

pub use error::{ConversionError, Result};
pub use format::StorageFormat;
