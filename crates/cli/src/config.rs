// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use mailsort_engine::config::{Config, ConfigBuilder};
use mailsort_engine::allow_list::AllowList;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .inputs(args.files.clone())
            .output_dir(args.output_dir.clone())
            .allow_list(AllowList::builtin())
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_to_config() {
        let args = Args::try_parse_from(["mailsort", "-o", "out", "a.txt", "b.txt"]).unwrap();
        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.inputs, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.overflow_name, "other.txt");
        assert!(config.allow_list.contains("yandex"));
    }
}
