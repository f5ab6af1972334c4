use std::path::{Path, PathBuf};
use crate::utils::{ConverterError, ConverterResult};

/// Extension given to every converted file.
pub const WEBP_EXTENSION: &str = "webp";

/// Returns the sibling `.webp` path for `source`: same directory, same stem.
pub fn webp_destination(source: impl AsRef<Path>) -> PathBuf {
    source.as_ref().with_extension(WEBP_EXTENSION)
}

/// Get file size in bytes, or 0 when the file cannot be read
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    std::fs::metadata(path.as_ref())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Checks that the scan root exists and is a directory.
pub fn ensure_root_dir(root: impl AsRef<Path>) -> ConverterResult<()> {
    let root = root.as_ref();
    if root.is_dir() {
        Ok(())
    } else {
        Err(ConverterError::RootNotFound(root.to_path_buf()))
    }
}

/// Returns just the file name of `path` for log messages.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_replaces_only_the_last_extension() {
        assert_eq!(webp_destination("public/a.png"), PathBuf::from("public/a.webp"));
        assert_eq!(webp_destination("public/img/Hero.JPEG"), PathBuf::from("public/img/Hero.webp"));
        assert_eq!(webp_destination("public/v1.2.final.gif"), PathBuf::from("public/v1.2.final.webp"));
    }

    #[test]
    fn root_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_root_dir(dir.path()).is_ok());

        let file = dir.path().join("file.png");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(ensure_root_dir(&file), Err(ConverterError::RootNotFound(_))));
        assert!(matches!(
            ensure_root_dir(dir.path().join("missing")),
            Err(ConverterError::RootNotFound(_))
        ));
    }

    #[test]
    fn file_size_of_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, [0u8; 42]).unwrap();
        assert_eq!(file_size(&file), 42);
        assert_eq!(file_size(dir.path().join("nope.png")), 0);
    }
}
