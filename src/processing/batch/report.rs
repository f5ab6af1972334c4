use std::path::Path;

use crate::core::ConversionResult;

/// Per-file outcomes of one run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<ConversionResult>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: ConversionResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results whose `.webp` was written.
    pub fn converted(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|result| result.success)
    }

    /// Results that were logged as errors and skipped.
    pub fn failed(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|result| !result.success)
    }

    /// Outcome for a given source path, if it was processed.
    pub fn find(&self, source: impl AsRef<Path>) -> Option<&ConversionResult> {
        let source = source.as_ref();
        self.results.iter().find(|result| result.source_path == source)
    }

    /// Total bytes of source files that converted successfully.
    pub fn total_original_bytes(&self) -> u64 {
        self.converted().map(|result| result.original_size).sum()
    }

    /// Total bytes of WebP written.
    pub fn total_webp_bytes(&self) -> u64 {
        self.converted().map(|result| result.webp_size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(name: &str, success: bool) -> ConversionResult {
        ConversionResult {
            source_path: PathBuf::from(name),
            webp_path: PathBuf::from(name).with_extension("webp"),
            original_size: 100,
            webp_size: if success { 40 } else { 0 },
            success,
            error: (!success).then(|| "Decode error: nope".to_string()),
        }
    }

    #[test]
    fn splits_converted_and_failed() {
        let mut report = BatchReport::new();
        report.record(result("a.png", true));
        report.record(result("broken.jpg", false));
        report.record(result("c.gif", true));

        assert_eq!(report.len(), 3);
        assert_eq!(report.converted().count(), 2);
        assert_eq!(report.failed().count(), 1);
        assert!(!report.find("broken.jpg").unwrap().success);
        assert!(report.find("missing.png").is_none());
        assert_eq!(report.total_original_bytes(), 200);
        assert_eq!(report.total_webp_bytes(), 80);
    }
}
