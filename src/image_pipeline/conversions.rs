//! Pipeline conversions module
//!
//! This module contains orchestration logic for loading HDR/SDR images into
//! the display bitmap and exporting it back out.

mod viewer;

pub use viewer::ViewerPipeline;
