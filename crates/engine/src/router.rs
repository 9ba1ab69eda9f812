// crates/engine/src/router.rs
use crate::allow_list::AllowList;
use crate::error::{EngineError, Result};
use crate::output::OutputOpener;
use hashbrown::{HashMap, HashSet};
use std::io::Write;
use std::path::PathBuf;

/// Name of the shared file for domains outside the allow-list.
pub const OVERFLOW_FILE: &str = "other.txt";

/// Where a domain label's lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Dedicated `<label>.txt` output.
    Domain(&'a str),
    /// The shared overflow output.
    Overflow,
}

/// Owns every output handle for one run.
///
/// The overflow handle is opened eagerly; per-domain handles are opened on
/// first use and then kept until [`OutputRegistry::finish`]. A label whose
/// file could not be opened is remembered and never retried.
pub struct OutputRegistry<O: OutputOpener> {
    opener: O,
    allow_list: AllowList,
    overflow_name: String,
    overflow: O::Writer,
    domains: HashMap<String, O::Writer>,
    unavailable: HashSet<String>,
}

impl<O: OutputOpener> std::fmt::Debug for OutputRegistry<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputRegistry")
            .field("overflow_name", &self.overflow_name)
            .field("domains", &self.domains.keys().collect::<Vec<_>>())
            .field("unavailable", &self.unavailable)
            .finish_non_exhaustive()
    }
}

impl<O: OutputOpener> OutputRegistry<O> {
    /// Open the registry with the default overflow file name.
    ///
    /// # Errors
    /// Returns [`EngineError::OutputOpen`] if the overflow output cannot be
    /// opened. Nothing can be written in that case.
    pub fn open(opener: O, allow_list: AllowList) -> Result<Self> {
        Self::with_overflow_name(opener, allow_list, OVERFLOW_FILE)
    }

    /// # Errors
    /// Returns [`EngineError::OutputOpen`] if the overflow output cannot be
    /// opened.
    pub fn with_overflow_name(
        opener: O,
        allow_list: AllowList,
        overflow_name: impl Into<String>,
    ) -> Result<Self> {
        let overflow_name = overflow_name.into();
        let overflow = opener
            .open(&overflow_name)
            .map_err(|source| EngineError::OutputOpen {
                path: opener.locate(&overflow_name),
                source,
            })?;
        log::debug!("opened overflow output {}", opener.locate(&overflow_name).display());

        Ok(Self {
            opener,
            allow_list,
            overflow_name,
            overflow,
            domains: HashMap::new(),
            unavailable: HashSet::new(),
        })
    }

    #[must_use]
    pub fn destination_for<'d>(&self, domain: &'d str) -> Destination<'d> {
        if self.allow_list.contains(domain) {
            Destination::Domain(domain)
        } else {
            Destination::Overflow
        }
    }

    /// File name backing `destination`.
    #[must_use]
    pub fn file_name(&self, destination: Destination<'_>) -> String {
        match destination {
            Destination::Domain(label) => format!("{label}.txt"),
            Destination::Overflow => self.overflow_name.clone(),
        }
    }

    #[must_use]
    pub fn path_of(&self, destination: Destination<'_>) -> PathBuf {
        self.opener.locate(&self.file_name(destination))
    }

    /// Handle to append `domain`'s lines to, opening it on first use.
    ///
    /// Returns `None` when the label is allow-listed but its file cannot be
    /// opened; the failure is logged once and the caller drops the line.
    pub fn route(&mut self, domain: &str) -> Option<&mut O::Writer> {
        if !self.allow_list.contains(domain) {
            return Some(&mut self.overflow);
        }
        if self.unavailable.contains(domain) {
            log::trace!("dropping line for unavailable output {domain}.txt");
            return None;
        }
        if !self.domains.contains_key(domain) {
            let name = format!("{domain}.txt");
            match self.opener.open(&name) {
                Ok(writer) => {
                    log::debug!("opened output {}", self.opener.locate(&name).display());
                    self.domains.insert(domain.to_owned(), writer);
                }
                Err(source) => {
                    log::warn!(
                        "Failed to open output file '{}' for writing: {source}",
                        self.opener.locate(&name).display()
                    );
                    self.unavailable.insert(domain.to_owned());
                    return None;
                }
            }
        }
        self.domains.get_mut(domain)
    }

    /// Number of per-domain handles currently open.
    #[must_use]
    pub fn open_domains(&self) -> usize {
        self.domains.len()
    }

    /// Flush and close every handle.
    ///
    /// All handles are flushed even if one fails; the first failure is
    /// returned.
    ///
    /// # Errors
    /// Returns [`EngineError::OutputWrite`] for the first handle that fails to
    /// flush.
    pub fn finish(self) -> Result<()> {
        let Self {
            opener,
            overflow_name,
            mut overflow,
            domains,
            ..
        } = self;

        let mut labels: Vec<_> = domains.into_iter().collect();
        labels.sort_by(|a, b| a.0.cmp(&b.0));

        let mut first_err = None;
        for (label, mut writer) in labels {
            if let Err(source) = writer.flush() {
                let path = opener.locate(&format!("{label}.txt"));
                log::error!("Failed to flush output file '{}': {source}", path.display());
                if first_err.is_none() {
                    first_err = Some(EngineError::OutputWrite { path, source });
                }
            }
        }
        if let Err(source) = overflow.flush() {
            let path = opener.locate(&overflow_name);
            log::error!("Failed to flush output file '{}': {source}", path.display());
            if first_err.is_none() {
                first_err = Some(EngineError::OutputWrite { path, source });
            }
        }

        first_err.map_or(Ok(()), Err)
    }
}
