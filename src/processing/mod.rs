pub mod batch;
pub mod codec;
pub mod scan;

pub use batch::{BatchProcessor, BatchReport};
pub use codec::{NativeCodec, WebpCodec, default_codec};
#[cfg(feature = "libvips")]
pub use codec::VipsCodec;
pub use scan::{scan_iter, scan_tree};

use tracing::debug;

use crate::core::ConvertSettings;
use crate::utils::ConverterResult;

/// Converts every accepted image under `settings.root` with the build's default codec.
pub fn convert_tree(settings: &ConvertSettings) -> ConverterResult<BatchReport> {
    let codec = default_codec()?;
    convert_tree_with(settings, codec.as_ref())
}

/// Converts every accepted image under `settings.root` with `codec`.
///
/// Files are converted while the tree is walked. Per-file failures are part of
/// the report; a missing root or a traversal error is returned as `Err`.
pub fn convert_tree_with(
    settings: &ConvertSettings,
    codec: &dyn WebpCodec,
) -> ConverterResult<BatchReport> {
    debug!("Converting {} with the {} codec", settings.root.display(), codec.name());
    let processor = BatchProcessor::new(codec, settings.quality);
    processor.process_stream(scan_iter(settings)?)
}
