use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::core::{ConversionResult, ConversionTask};
use crate::processing::codec::WebpCodec;
use crate::utils::{ConverterError, ConverterResult, file_size};

use super::BatchReport;

/// Converts tasks one after another, logging a line per file.
///
/// A failing file is logged and recorded, then the next one is processed.
/// Only errors coming out of the task source itself (traversal) stop a batch.
pub struct BatchProcessor<'a> {
    codec: &'a dyn WebpCodec,
    quality: u8,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(codec: &'a dyn WebpCodec, quality: u8) -> Self {
        debug!("Creating BatchProcessor ({} codec, quality {})", codec.name(), quality);
        Self { codec, quality }
    }

    /// Converts a single task. Never fails; errors end up in the result.
    pub fn process_task(&self, task: &ConversionTask) -> ConversionResult {
        let original_size = file_size(&task.input_path);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.codec.convert(task, self.quality)))
            .unwrap_or_else(|payload| Err(ConverterError::processing(format!(
                "Task panicked: {}",
                panic_message(payload.as_ref())
            ))));

        let result = match outcome {
            Ok(()) => ConversionResult {
                source_path: task.input_path.clone(),
                webp_path: task.output_path.clone(),
                original_size,
                webp_size: file_size(&task.output_path),
                success: true,
                error: None,
            },
            Err(e) => ConversionResult {
                source_path: task.input_path.clone(),
                webp_path: task.output_path.clone(),
                original_size,
                webp_size: 0,
                success: false,
                error: Some(e.to_string()),
            },
        };

        if result.success {
            info!("{result}");
        } else {
            warn!("{result}");
        }

        result
    }

    /// Converts every task in order.
    pub fn process_batch(&self, tasks: &[ConversionTask]) -> BatchReport {
        let mut report = BatchReport::new();
        for task in tasks {
            report.record(self.process_task(task));
        }
        report
    }

    /// Converts tasks as they are discovered.
    ///
    /// Files already converted stay converted if the source later yields an
    /// error; the error is returned and the rest of the batch is abandoned.
    pub fn process_stream<I>(&self, tasks: I) -> ConverterResult<BatchReport>
    where
        I: IntoIterator<Item = ConverterResult<ConversionTask>>,
    {
        let mut report = BatchReport::new();
        for task in tasks {
            report.record(self.process_task(&task?));
        }

        debug!(
            "Batch finished: {} converted, {} failed ({} bytes in, {} bytes of WebP out)",
            report.converted().count(),
            report.failed().count(),
            report.total_original_bytes(),
            report.total_webp_bytes()
        );
        Ok(report)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Fails on any file whose stem starts with "bad", panics on "boom".
    #[derive(Default)]
    struct ScriptedCodec {
        seen: RefCell<Vec<PathBuf>>,
    }

    impl WebpCodec for ScriptedCodec {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn convert(&self, task: &ConversionTask, quality: u8) -> ConverterResult<()> {
            assert_eq!(quality, 85);
            self.seen.borrow_mut().push(task.input_path.clone());
            let stem = task.input_path.file_stem().unwrap().to_string_lossy();
            if stem.starts_with("bad") {
                return Err(ConverterError::decode("cannot identify image file"));
            }
            if stem.starts_with("boom") {
                panic!("decoder exploded");
            }
            std::fs::write(&task.output_path, b"RIFF")?;
            Ok(())
        }
    }

    fn tasks(dir: &std::path::Path, names: &[&str]) -> Vec<ConversionTask> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                std::fs::write(&path, b"src").unwrap();
                ConversionTask::from_source(path).unwrap()
            })
            .collect()
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let codec = ScriptedCodec::default();
        let processor = BatchProcessor::new(&codec, 85);
        let tasks = tasks(dir.path(), &["bad.jpg", "boom.png", "good.gif"]);

        let report = processor.process_batch(&tasks);

        assert_eq!(codec.seen.borrow().len(), 3);
        assert_eq!(report.converted().count(), 1);
        assert_eq!(report.failed().count(), 2);

        let bad = report.find(dir.path().join("bad.jpg")).unwrap();
        assert!(bad.to_string().starts_with("Errore su "));
        assert!(bad.to_string().contains("bad.jpg"));

        let boom = report.find(dir.path().join("boom.png")).unwrap();
        assert!(boom.error.as_deref().unwrap().contains("decoder exploded"));

        let good = report.find(dir.path().join("good.gif")).unwrap();
        assert_eq!(good.webp_size, 4);
        assert_eq!(good.original_size, 3);
    }

    #[test]
    fn stream_stops_on_traversal_error() {
        let dir = tempfile::tempdir().unwrap();
        let codec = ScriptedCodec::default();
        let processor = BatchProcessor::new(&codec, 85);
        let mut stream: Vec<ConverterResult<ConversionTask>> =
            tasks(dir.path(), &["first.png"]).into_iter().map(Ok).collect();
        stream.push(Err(ConverterError::walk("permission denied")));
        stream.extend(tasks(dir.path(), &["never.png"]).into_iter().map(Ok));

        let err = processor.process_stream(stream).unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(*codec.seen.borrow(), vec![dir.path().join("first.png")]);
        assert!(dir.path().join("first.webp").exists());
    }
}
