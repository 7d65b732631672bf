//! Interactive questions
//!
//! Answers are read through the [`Prompter`] trait: a dialoguer-backed
//! prompter for terminals and a line-based one for piped input and tests.

use crate::config::RepomeConfig;
use crate::detection::manifest::{author_email, github_owner};
use crate::detection::ProjectInfo;
use crate::render::Answers;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Line that ends a multi-line answer.
pub const END_SENTINEL: &str = "END";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error while reading input: {0}")]
    Io(#[from] io::Error),

    #[error("Interactive prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Input ended")]
    Eof,
}

pub trait Prompter {
    /// Asks one question and returns the entered line, or `default` when
    /// the line is empty.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}

/// Reads one answer per line from `reader`, echoing prompts to `writer`.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        match default {
            Some(default) if !default.is_empty() => {
                write!(self.writer, "? {} ({}) ", message, default)?
            }
            _ => write!(self.writer, "? {} ", message)?,
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(line.to_string())
        }
    }
}

/// Collects lines until one reads [`END_SENTINEL`] (or input ends) and
/// joins them with newlines.
pub fn read_multi_line(prompter: &mut dyn Prompter, message: &str) -> Result<String, PromptError> {
    let prompt = format!("{} (Type '{}' to finish)", message, END_SENTINEL);
    let mut lines = Vec::new();

    loop {
        match prompter.input(&prompt, None) {
            Ok(line) if line.trim() == END_SENTINEL => break,
            Ok(line) => lines.push(line),
            Err(PromptError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(lines.join("\n"))
}

/// Pre-filled values for each question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDefaults {
    pub project_name: String,
    pub description: String,
    pub github_username: String,
    pub email: String,
    pub contributing: String,
    pub license: Option<String>,
}

impl QuestionDefaults {
    pub fn new(info: &ProjectInfo, config: &RepomeConfig) -> Self {
        Self {
            project_name: info
                .name
                .clone()
                .unwrap_or_else(|| config.project_name.clone()),
            description: info
                .description
                .clone()
                .unwrap_or_else(|| config.description.clone()),
            github_username: info
                .repository
                .as_deref()
                .and_then(github_owner)
                .unwrap_or_else(|| config.github_username.clone()),
            email: info
                .author
                .as_deref()
                .and_then(author_email)
                .unwrap_or_else(|| config.email.clone()),
            contributing: config.contributing.clone(),
            license: info.license.clone(),
        }
    }
}

fn ask(prompter: &mut dyn Prompter, message: &str, default: &str) -> Result<String, PromptError> {
    match prompter.input(message, Some(default)) {
        Err(PromptError::Eof) => Ok(default.to_string()),
        other => other,
    }
}

/// Runs the full question sequence. End of input accepts the remaining
/// defaults.
pub fn ask_questions(
    prompter: &mut dyn Prompter,
    info: &ProjectInfo,
    config: &RepomeConfig,
) -> Result<Answers, PromptError> {
    let defaults = QuestionDefaults::new(info, config);

    let project_name = ask(prompter, "Project name:", &defaults.project_name)?;
    let description = ask(prompter, "Project description:", &defaults.description)?;
    let github_username = ask(prompter, "GitHub username:", &defaults.github_username)?;
    let email = ask(prompter, "Email:", &defaults.email)?;
    let contributing = ask(prompter, "Contributing guidelines:", &defaults.contributing)?;
    let license = ask(
        prompter,
        "License:",
        defaults.license.as_deref().unwrap_or_default(),
    )?;

    let installation = read_multi_line(prompter, "Enter an installation step")?;
    let usage = read_multi_line(prompter, "Enter a usage step")?;

    Ok(Answers {
        project_name,
        description,
        github_username,
        email,
        contributing,
        license: Some(license).filter(|l| !l.trim().is_empty()),
        installation: Some(installation).filter(|s| !s.trim().is_empty()),
        usage: Some(usage).filter(|s| !s.trim().is_empty()),
    })
}
