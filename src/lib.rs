// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{ConvertSettings, ConversionTask, ConversionResult};
pub use crate::utils::{ConverterError, ConverterResult, SourceFormat};
pub use crate::processing::{BatchProcessor, BatchReport, NativeCodec, WebpCodec, convert_tree, convert_tree_with};

// This library file is the public API; the binary entry point is in main.rs.
