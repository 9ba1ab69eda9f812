// crates/engine/src/stats.rs
use crate::error::EngineError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Per-line tallies, accumulated across every input of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCounts {
    /// Lines read from inputs.
    pub read: u64,
    /// Lines that contained an email-like token.
    pub matched: u64,
    /// Lines without an email-like token. Not written anywhere.
    pub dropped: u64,
    /// Matched lines whose dedicated output could not be opened.
    pub unrouted: u64,
    /// Lines written, keyed by output file name.
    pub per_output: BTreeMap<String, u64>,
}

impl LineCounts {
    /// Total lines written across all outputs.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.per_output.values().sum()
    }

    pub fn record_written(&mut self, output: &str) {
        match self.per_output.get_mut(output) {
            Some(n) => *n += 1,
            None => {
                self.per_output.insert(output.to_owned(), 1);
            }
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub files_total: usize,
    pub files_processed: usize,
    /// Inputs that could not be opened or read, with the reason.
    pub skipped: Vec<(PathBuf, EngineError)>,
    pub lines: LineCounts,
}

impl RunReport {
    #[must_use]
    pub fn new(files_total: usize) -> Self {
        Self {
            files_total,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_sums_outputs() {
        let mut counts = LineCounts::default();
        counts.record_written("gmail.txt");
        counts.record_written("gmail.txt");
        counts.record_written("other.txt");
        assert_eq!(counts.per_output["gmail.txt"], 2);
        assert_eq!(counts.per_output["other.txt"], 1);
        assert_eq!(counts.written(), 3);
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = RunReport::new(3);
        assert_eq!(report.files_total, 3);
        assert_eq!(report.files_processed, 0);
        assert!(!report.has_skipped());
        assert_eq!(report.lines, LineCounts::default());
    }
}
