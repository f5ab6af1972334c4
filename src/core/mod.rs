//! Core conversion types.
//!
//! - [`ConvertSettings`]: root directory, format allow-list and quality for a run
//! - [`ConversionTask`]: one source image and its `.webp` destination
//! - [`ConversionResult`]: outcome of converting one file

mod types;
mod task;

pub use types::{ConvertSettings, ConversionResult, DEFAULT_QUALITY, DEFAULT_ROOT_DIR};
pub use task::ConversionTask;
