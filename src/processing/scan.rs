//! Recursive discovery of convertible images under the root directory.

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::{ConversionTask, ConvertSettings};
use crate::utils::{ConverterResult, ensure_root_dir};

/// Walks `settings.root` top-down and yields one task per accepted file.
///
/// Files come out in the order the filesystem lists them; nothing is sorted.
/// Traversal errors are yielded as `Err` and are fatal to the run.
pub fn scan_iter(
    settings: &ConvertSettings,
) -> ConverterResult<impl Iterator<Item = ConverterResult<ConversionTask>> + '_> {
    ensure_root_dir(&settings.root)?;
    debug!("Scanning {}", settings.root.display());

    let tasks = WalkDir::new(&settings.root)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if is_candidate_file(&entry) && settings.accepts(entry.path()) => {
                Some(ConversionTask::from_source(entry.path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e.into())),
        });

    Ok(tasks)
}

/// Collects every task under `settings.root`, failing on the first traversal error.
pub fn scan_tree(settings: &ConvertSettings) -> ConverterResult<Vec<ConversionTask>> {
    let tasks = scan_iter(settings)?.collect::<ConverterResult<Vec<_>>>()?;
    debug!("Found {} convertible files under {}", tasks.len(), settings.root.display());
    Ok(tasks)
}

fn is_candidate_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }

    // Links to directories are listed but never descended into.
    !(entry.path_is_symlink() && entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use crate::utils::ConverterError;

    fn touch(path: PathBuf) -> PathBuf {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    #[test]
    fn finds_allow_listed_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let a = touch(root.join("a.png"));
        let b = touch(root.join("sub/deep/B.JPEG"));
        let c = touch(root.join("sub/c.psd"));
        touch(root.join("sub/notes.txt"));
        touch(root.join("sub/already.webp"));
        touch(root.join("noext"));

        let settings = ConvertSettings::with_root(root);
        let mut found: Vec<_> = scan_tree(&settings)
            .unwrap()
            .into_iter()
            .map(|task| task.input_path)
            .collect();
        found.sort();

        let mut expected = vec![a, b, c];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn directories_named_like_images_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("gallery.png")).unwrap();

        let tasks = scan_tree(&ConvertSettings::with_root(dir.path())).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConvertSettings::with_root(dir.path().join("public"));

        match scan_tree(&settings) {
            Err(err @ ConverterError::RootNotFound(_)) => assert!(err.is_fatal()),
            other => panic!("expected RootNotFound, got {other:?}"),
        }
    }
}
