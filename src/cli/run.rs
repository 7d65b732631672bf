use super::commands::CliArgs;
use super::output::Reporter;
use super::prompts::{ask_questions, LinePrompter, Prompter, TerminalPrompter};
use crate::config::RepomeConfig;
use crate::detection::ProjectAnalyzer;
use crate::fs::{FileSystem, RealFileSystem};
use crate::render::render;
use anyhow::{Context, Result};
use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Detect, ask, render and write. Returns the path that was written.
///
/// A failed write is the only fatal error; detection never fails.
pub fn run<W: Write>(
    fs: &dyn FileSystem,
    prompter: &mut dyn Prompter,
    reporter: &mut Reporter<W>,
    root: &Path,
    config: &RepomeConfig,
) -> Result<PathBuf> {
    reporter.welcome()?;
    reporter.step("Analyzing project structure...")?;

    let info = ProjectAnalyzer::new(fs, root).analyze();
    debug!(
        "Project info: {}",
        serde_json::to_string(&info).unwrap_or_default()
    );
    reporter.summary(&info)?;

    let answers =
        ask_questions(prompter, &info, config).context("Failed to collect answers")?;
    let content = render(&info, &answers);

    let output = root.join(&config.output);
    fs.write(&output, &content)
        .with_context(|| format!("Failed to write README to {}", output.display()))?;
    debug!(bytes = content.len(), path = %output.display(), "README written");

    reporter.success(&output)?;
    Ok(output)
}

/// Entry point used by the binary: resolves configuration, picks a prompter
/// for the attached stdin and runs against the current directory.
pub fn execute(args: &CliArgs, config: RepomeConfig) -> Result<PathBuf> {
    let config = args.apply(config);
    config.validate()?;

    let root = env::current_dir().context("Failed to determine current directory")?;
    let fs = RealFileSystem::new();
    let mut reporter = Reporter::stdout();

    if io::stdin().is_terminal() {
        let mut prompter = TerminalPrompter::new();
        run(&fs, &mut prompter, &mut reporter, &root, &config)
    } else {
        debug!("stdin is not a terminal, reading answers line by line");
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        run(&fs, &mut prompter, &mut reporter, &root, &config)
    }
}
