use crate::config::RepomeConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate a README.md for the project in the current directory
#[derive(Parser, Debug)]
#[command(
    name = "repome",
    about = "Generate a README.md for the project in the current directory",
    version,
    disable_version_flag = true,
    long_about = "repome inspects the current directory to work out what kind of project it is \
                  (Node.js, Python, Rust, Go, Java, PHP or C#), asks a few questions, and writes \
                  a Markdown README from the answers.\n\n\
                  Examples:\n  \
                  repome\n  \
                  repome --output docs/README.md\n  \
                  repome --verbose"
)]
pub struct CliArgs {
    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    #[arg(long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        help = "Output file path [default: README.md]"
    )]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Command-line flags take precedence over environment configuration.
    pub fn apply(&self, config: RepomeConfig) -> RepomeConfig {
        let mut config = match &self.output {
            Some(output) => config.with_output(output.clone()),
            None => config,
        };
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        config
    }
}
