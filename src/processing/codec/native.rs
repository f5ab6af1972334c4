//! Pure Rust decode path with libwebp for encoding.

use std::io::Cursor;

use image::{DynamicImage, ImageReader, RgbaImage};
use tracing::debug;

use crate::core::ConversionTask;
use crate::utils::{ConverterError, ConverterResult, extract_filename};

use super::WebpCodec;

type Result<T> = ConverterResult<T>;

/// Largest width or height a WebP bitstream can carry.
const WEBP_MAX_DIMENSION: u32 = 16383;

/// Photoshop files start with this signature.
const PSD_SIGNATURE: &[u8] = b"8BPS";

/// Decodes with `image` (JPEG, PNG, GIF) or `psd`, encodes with libwebp.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCodec;

impl NativeCodec {
    pub fn new() -> Self {
        Self
    }
}

impl WebpCodec for NativeCodec {
    fn name(&self) -> &'static str {
        "native"
    }

    fn convert(&self, task: &ConversionTask, quality: u8) -> Result<()> {
        let image = decode(task)?;

        debug!(
            "Loaded '{}': {}×{}",
            extract_filename(&task.input_path),
            image.width(),
            image.height()
        );

        let encoded = encode_webp(&image, quality)?;
        drop(image);

        std::fs::write(&task.output_path, encoded)?;
        Ok(())
    }
}

/// Reads and decodes the source image.
///
/// The format is sniffed from the file contents first and falls back to the
/// extension, so a mislabelled PNG saved as `.jpg` still converts.
fn decode(task: &ConversionTask) -> Result<DynamicImage> {
    let bytes = std::fs::read(&task.input_path)?;

    if bytes.starts_with(PSD_SIGNATURE) {
        return decode_psd(&bytes);
    }

    let mut reader = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| ConverterError::decode(e.to_string()))?;

    if reader.format().is_none() {
        match task.format.image_format() {
            Some(format) => reader.set_format(format),
            None => return decode_psd(&bytes),
        }
    }

    reader
        .decode()
        .map_err(|e| ConverterError::decode(e.to_string()))
}

/// Decodes the flattened composite of a Photoshop document.
fn decode_psd(bytes: &[u8]) -> Result<DynamicImage> {
    if !bytes.starts_with(PSD_SIGNATURE) {
        return Err(ConverterError::decode("Not a Photoshop document"));
    }

    let psd = psd::Psd::from_bytes(bytes)
        .map_err(|e| ConverterError::decode(format!("Invalid PSD: {e}")))?;

    let (width, height) = (psd.width(), psd.height());
    RgbaImage::from_raw(width, height, psd.rgba())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| ConverterError::decode(format!(
            "PSD composite does not match its {width}×{height} header"
        )))
}

/// Encodes `image` as lossy WebP.
///
/// Images with an alpha channel keep it; everything else is encoded as RGB.
fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 || width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(ConverterError::encode(format!(
            "{width}×{height} is outside the WebP limit of {WEBP_MAX_DIMENSION}×{WEBP_MAX_DIMENSION}"
        )));
    }

    let quality = f32::from(quality.min(100));

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = image.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };

    encoded
        .map(|memory| memory.to_vec())
        .map_err(|e| ConverterError::encode(format!("WebP encode failed: {e:?}")))
}
