// crates/engine/src/config.rs
use crate::allow_list::AllowList;
use crate::error::{EngineError, Result};
use crate::router::OVERFLOW_FILE;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Input files, processed in order.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    /// Directory the output files are appended to.
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub allow_list: AllowList,
    /// File name for lines whose domain is not allow-listed.
    #[builder(default = "OVERFLOW_FILE.to_string()")]
    pub overflow_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("."),
            allow_list: AllowList::builtin(),
            overflow_name: OVERFLOW_FILE.to_string(),
        }
    }
}

impl Config {
    /// Check the configuration before anything is opened.
    ///
    /// # Errors
    /// [`EngineError::NoInputs`] when there is nothing to process, and
    /// [`EngineError::Config`] when the overflow name is not a plain file name
    /// or collides with an allow-listed domain's output.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(EngineError::NoInputs);
        }

        let name = self.overflow_name.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(EngineError::Config(format!(
                "overflow file name must be a plain file name, got '{name}'"
            )));
        }
        if let Some(label) = name.strip_suffix(".txt")
            && self.allow_list.contains(label)
        {
            return Err(EngineError::Config(format!(
                "overflow file '{name}' would share a file with the '{label}' output"
            )));
        }
        Ok(())
    }
}
