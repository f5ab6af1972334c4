//! Core types for conversion settings and results.

use std::fmt;
use std::path::{Path, PathBuf};
use crate::utils::SourceFormat;

/// Directory scanned by default, resolved next to the executable.
pub const DEFAULT_ROOT_DIR: &str = "public";

/// Lossy WebP quality used for every conversion.
pub const DEFAULT_QUALITY: u8 = 85;

/// Settings for one conversion run.
///
/// The binary only ever uses [`ConvertSettings::default`]; other roots exist
/// for library callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    /// Directory scanned recursively for source images
    pub root: PathBuf,
    /// Formats converted; everything else is skipped
    pub formats: Vec<SourceFormat>,
    /// WebP quality (0-100)
    pub quality: u8,
}

impl ConvertSettings {
    /// Default settings scanning `root` instead of `public`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Whether `path` has an extension this run converts.
    pub fn accepts(&self, path: &Path) -> bool {
        SourceFormat::from_path(path)
            .map(|format| self.formats.contains(&format))
            .unwrap_or(false)
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT_DIR),
            formats: SourceFormat::ALL.to_vec(),
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Result of converting a single file.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Path to the source image
    pub source_path: PathBuf,
    /// Path of the `.webp` written (or that would have been written)
    pub webp_path: PathBuf,
    /// Source file size in bytes
    pub original_size: u64,
    /// Output file size in bytes, 0 on failure
    pub webp_size: u64,
    /// Whether the conversion succeeded
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
}

/// Console line for the outcome, one per processed file.
impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(
                f,
                "Convertito: {} -> {}",
                self.source_path.display(),
                self.webp_path.display()
            ),
            Some(error) => write!(f, "Errore su {}: {}", self.source_path.display(), error),
        }
    }
}
