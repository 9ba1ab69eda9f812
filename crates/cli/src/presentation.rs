// crates/cli/src/presentation.rs
use mailsort_engine::progress::{ProgressSink, format_percent};
use mailsort_engine::stats::RunReport;
use std::fmt::Write;
use std::path::Path;

/// Prints per-file progress to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress {
    quiet: bool,
}

impl ConsoleProgress {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_file_start(&mut self, index: usize, total: usize, path: &Path) {
        if !self.quiet {
            println!("{}", processing_line(index, total, path));
        }
    }

    fn on_file_done(&mut self, index: usize, total: usize, _path: &Path) {
        if !self.quiet {
            println!("{}", progress_line(index, total));
        }
    }
}

#[must_use]
pub fn processing_line(index: usize, total: usize, path: &Path) -> String {
    format!("Processing {} ({index} of {total})...", path.display())
}

#[must_use]
pub fn progress_line(index: usize, total: usize) -> String {
    format!("Progress: {}", format_percent(index, total))
}

/// Human readable end-of-run summary.
#[must_use]
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();
    let lines = &report.lines;

    let _ = writeln!(out, "Processing complete.");
    let _ = writeln!(
        out,
        "  files: {} processed, {} skipped (of {})",
        report.files_processed,
        report.skipped.len(),
        report.files_total
    );
    let _ = writeln!(
        out,
        "  lines: {} read, {} written, {} without email, {} unwritable",
        lines.read,
        lines.written(),
        lines.dropped,
        lines.unrouted
    );

    let mut outputs: Vec<_> = lines.per_output.iter().collect();
    outputs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (name, count) in outputs {
        let _ = writeln!(out, "{count:>10}  {name}");
    }
    out
}

/// Stderr notice listing inputs that were skipped, if any.
#[must_use]
pub fn render_skipped(report: &RunReport) -> Option<String> {
    if !report.has_skipped() {
        return None;
    }
    let mut out = format!(
        "{} of {} input file(s) could not be processed:",
        report.skipped.len(),
        report.files_total
    );
    for (path, _) in &report.skipped {
        let _ = write!(out, "\n  {}", path.display());
    }
    Some(out)
}

pub fn print_summary(report: &RunReport) {
    print!("{}", render_summary(report));
}
