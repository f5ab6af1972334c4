use std::path::Path;
use std::str::FromStr;
use crate::utils::{ConverterError, ConverterResult};

/// Source formats picked up by the scan. Anything else is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    JPEG,
    PNG,
    GIF,
    PSD,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 4] = [Self::JPEG, Self::PNG, Self::GIF, Self::PSD];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::GIF => &["gif"],
            Self::PSD => &["psd"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// The `image` crate format used to decode this source, if it handles it.
    ///
    /// PSD is decoded separately since `image` has no Photoshop reader.
    pub fn image_format(&self) -> Option<image::ImageFormat> {
        match self {
            Self::JPEG => Some(image::ImageFormat::Jpeg),
            Self::PNG => Some(image::ImageFormat::Png),
            Self::GIF => Some(image::ImageFormat::Gif),
            Self::PSD => None,
        }
    }

    /// Looks up the format for a bare extension, with or without the dot.
    pub fn from_extension(ext: &str) -> ConverterResult<Self> {
        Self::from_str(ext)
    }

    /// Looks up the format for a path's extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> ConverterResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConverterError::format(
                format!("File has no extension: {}", path.display())
            ))?;

        Self::from_extension(ext)
    }
}

impl FromStr for SourceFormat {
    type Err = ConverterError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.matches_extension(ext))
            .ok_or_else(|| ConverterError::format(format!(
                "Unsupported image format: {}", ext.to_lowercase()
            )))
    }
}
