//! WebP codec backends.
//!
//! - [`NativeCodec`]: `image` + `psd` decoders feeding libwebp through the `webp` crate.
//! - [`VipsCodec`]: libvips load and `webpsave`, behind the `libvips` feature.
//!
//! The batch processor only sees the [`WebpCodec`] trait, so the backend is
//! picked once at startup by [`default_codec`].

mod native;
#[cfg(feature = "libvips")]
mod vips;

pub use native::NativeCodec;
#[cfg(feature = "libvips")]
pub use vips::VipsCodec;

use crate::core::ConversionTask;
use crate::utils::ConverterResult;

/// Converts one source image into a WebP file.
pub trait WebpCodec {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Decodes `task.input_path` and writes lossy WebP at `quality` to
    /// `task.output_path`, overwriting any existing file.
    ///
    /// Everything decoded is released before this returns, on success or error.
    fn convert(&self, task: &ConversionTask, quality: u8) -> ConverterResult<()>;
}

/// Returns the codec compiled into this build.
#[cfg(not(feature = "libvips"))]
pub fn default_codec() -> ConverterResult<Box<dyn WebpCodec>> {
    Ok(Box::new(NativeCodec::new()))
}

/// Returns the codec compiled into this build.
#[cfg(feature = "libvips")]
pub fn default_codec() -> ConverterResult<Box<dyn WebpCodec>> {
    Ok(Box::new(VipsCodec::new()?))
}
