use clap::Parser;
use std::path::PathBuf;

use crate::commands::state::GenerateConfig;

#[derive(Parser, Debug)]
#[command(name = "mktest")]
#[command(
    about = "Generate table-driven test skeletons for the public functions of a Rust source file",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Rust source file to generate tests for (must end in .rs, not _test.rs)
    pub file: PathBuf,

    /// Print the skeleton to stdout instead of creating <file>_test.rs
    #[arg(long, env = "MKTEST_STDOUT")]
    pub stdout: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn into_config(self) -> GenerateConfig {
        GenerateConfig::new(self.file, self.stdout)
    }
}
