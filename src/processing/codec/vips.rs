//! libvips backend: `new_from_file` load, `webpsave` encode.
//!
//! Only built with the `libvips` feature. PSD support depends on the libvips
//! build having a loader for it (usually through ImageMagick).

use std::path::Path;

use libvips::ops::{self, ForeignKeep};
use libvips::{VipsApp, VipsImage};
use tracing::debug;

use crate::core::ConversionTask;
use crate::utils::{ConverterError, ConverterResult, extract_filename};

use super::WebpCodec;

type Result<T> = ConverterResult<T>;

const WEBP_EFFORT: i32 = 4;

/// Keeps libvips initialised for as long as the codec lives.
///
/// `VipsApp` sets up libvips global state on creation and shuts it down on
/// drop, so exactly one should exist per process.
pub struct VipsCodec {
    _app: VipsApp,
}

impl VipsCodec {
    pub fn new() -> Result<Self> {
        let app = VipsApp::default("webp-converter")
            .map_err(|e| ConverterError::processing(format!("Failed to initialize libvips: {e}")))?;
        // Files are converted one at a time; keep libvips on a single worker too.
        app.concurrency_set(1);
        debug!("libvips initialized (concurrency: {})", app.concurency_get());

        Ok(Self { _app: app })
    }
}

impl WebpCodec for VipsCodec {
    fn name(&self) -> &'static str {
        "libvips"
    }

    fn convert(&self, task: &ConversionTask, quality: u8) -> Result<()> {
        let input_path = utf8_path(&task.input_path)?;
        let output_path = utf8_path(&task.output_path)?;

        let image = VipsImage::new_from_file(input_path)
            .map_err(|e| ConverterError::decode(format!("Failed to load '{input_path}': {e}")))?;

        debug!(
            "Loaded '{}': {}×{}",
            extract_filename(&task.input_path),
            image.get_width(),
            image.get_height()
        );

        let q = i32::from(quality.min(100));
        let opts = ops::WebpsaveOptions {
            q,
            alpha_q: q,
            effort: WEBP_EFFORT,
            keep: ForeignKeep::None,
            ..ops::WebpsaveOptions::default()
        };

        ops::webpsave_with_opts(&image, output_path, &opts)
            .map_err(|e| ConverterError::encode(format!("WebP save failed: {e}")))
    }
}

/// libvips takes paths as `&str`.
fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        ConverterError::processing(format!("Path is not valid UTF-8: {}", path.display()))
    })
}
