pub mod commands;
pub mod output;
pub mod prompts;
pub mod run;

pub use commands::CliArgs;
pub use output::Reporter;
pub use prompts::{LinePrompter, PromptError, Prompter, TerminalPrompter};
pub use run::{execute, run};
