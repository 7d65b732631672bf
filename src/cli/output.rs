//! User-facing status lines
//!
//! Tracing output goes to stderr and is filtered by log level; these lines
//! are always shown so the user can follow the run.

use crate::detection::ProjectInfo;
use console::style;
use std::io::{self, Write};
use std::path::Path;

pub struct Reporter<W> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Reporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            style("🚀 Welcome to repome - README Generator").cyan().bold()
        )?;
        writeln!(self.out, "{}", style("=".repeat(37)).dim())?;
        writeln!(self.out)
    }

    pub fn step(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("🔍").cyan(), message)
    }

    pub fn summary(&mut self, info: &ProjectInfo) -> io::Result<()> {
        writeln!(self.out, "{}", format_summary(info))
    }

    pub fn success(&mut self, output: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} README created successfully at {}",
            style("✅").green(),
            output.display()
        )?;
        writeln!(
            self.out,
            "{} You can now customize it further if needed.",
            style("ℹ").blue()
        )
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("❌").red(), message)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Detection summary shown before the questions.
pub fn format_summary(info: &ProjectInfo) -> String {
    let project_type = if info.project_type.is_known() {
        info.project_type.as_str()
    } else {
        "Unknown"
    };

    format!(
        "📁 Project type detected: {}\n\
         📦 Dependencies found: {}\n\
         🧪 Tests detected: {}\n\
         📄 License detected: {}\n",
        project_type,
        info.dependencies.len(),
        yes_no(info.has_tests),
        yes_no(info.has_license),
    )
}
