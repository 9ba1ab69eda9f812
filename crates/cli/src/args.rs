// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "mailsort",
    version = crate::VERSION,
    about = "Split text files into per-provider files by the email domain on each line",
    long_about = "Reads each FILE line by line. Lines containing an email address are \
                  appended to <domain>.txt for well-known providers (gmail.txt, yahoo.txt, ...) \
                  or to other.txt for everything else. The first ':' on a line is turned \
                  into a tab. Lines without an address are skipped."
)]
pub struct Args {
    /// Input files, processed in the given order
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Directory that receives the output files
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: PathBuf,

    /// Do not print progress or the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
