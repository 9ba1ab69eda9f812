// crates/engine/src/lib.rs
//! Routes lines of text files into per-provider output files by the email
//! domain each line contains.

pub mod allow_list;
pub mod classifier;
pub mod config;
pub mod error;
pub mod formatter;
pub mod output;
pub mod processor;
pub mod progress;
pub mod router;
pub mod stats;

use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::Result;
use crate::output::{DirOpener, OutputOpener};
use crate::progress::ProgressSink;
use crate::router::OutputRegistry;
use crate::stats::RunReport;

/// Run the router over every input in `config`, writing into
/// `config.output_dir`.
///
/// # Errors
///
/// Fails before touching any input when there are no inputs, the
/// configuration is invalid, or the overflow output cannot be opened. Fails
/// mid-run only when an already-open output rejects a write. Inputs that
/// cannot be opened or read are skipped and listed in
/// [`RunReport::skipped`].
pub fn run<P: ProgressSink + ?Sized>(config: &Config, progress: &mut P) -> Result<RunReport> {
    run_with(config, DirOpener::new(&config.output_dir), progress)
}

/// [`run`] with a caller-supplied output opener.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<O, P>(config: &Config, opener: O, progress: &mut P) -> Result<RunReport>
where
    O: OutputOpener,
    P: ProgressSink + ?Sized,
{
    config.validate()?;

    log::debug!("initializing with {} allow-listed domains", config.allow_list.len());
    let classifier = Classifier::new()?;
    let mut registry = OutputRegistry::with_overflow_name(
        opener,
        config.allow_list.clone(),
        config.overflow_name.as_str(),
    )?;

    let total = config.inputs.len();
    let mut report = RunReport::new(total);

    for (i, path) in config.inputs.iter().enumerate() {
        let index = i + 1;
        progress.on_file_start(index, total, path);

        match processor::process_file(path, &classifier, &mut registry, &mut report.lines) {
            Ok(()) => report.files_processed += 1,
            Err(e) if e.is_file_scoped() => {
                log::warn!("{e}");
                progress.on_file_skipped(path, &e);
                report.skipped.push((path.clone(), e));
            }
            Err(e) => return Err(e),
        }

        progress.on_file_done(index, total, path);
    }

    log::debug!("finalizing {} domain outputs", registry.open_domains());
    registry.finish()?;
    Ok(report)
}
