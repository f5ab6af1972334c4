//! Conversion task definition and creation.

use std::path::{Path, PathBuf};
use crate::utils::{ConverterResult, SourceFormat, webp_destination};

/// A single file to convert: the source image and its sibling `.webp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the WebP output will be written
    pub output_path: PathBuf,
    /// Format detected from the source extension
    pub format: SourceFormat,
}

impl ConversionTask {
    /// Creates a task for `source`, deriving the output path from it.
    ///
    /// Fails when the extension is not on the allow-list.
    pub fn from_source(source: impl AsRef<Path>) -> ConverterResult<Self> {
        let source = source.as_ref();
        let format = SourceFormat::from_path(source)?;

        Ok(Self {
            input_path: source.to_path_buf(),
            output_path: webp_destination(source),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_points_at_sibling_webp() {
        let task = ConversionTask::from_source("public/sub/Photo.JPG").unwrap();
        assert_eq!(task.output_path, PathBuf::from("public/sub/Photo.webp"));
        assert_eq!(task.format, SourceFormat::JPEG);
    }

    #[test]
    fn unsupported_source_is_rejected() {
        assert!(ConversionTask::from_source("public/sub/b.txt").is_err());
        assert!(ConversionTask::from_source("public/a.webp").is_err());
    }
}
