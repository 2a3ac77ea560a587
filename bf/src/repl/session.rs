//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, error, info};

use crate::dispatch::Dispatcher;
use crate::profile::ProfileRecord;

pub const PROMPT: &str = "Ask me something: ";

/// Words that end the session (case-insensitive, whole line)
pub const EXIT_TOKENS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

const FAREWELL: &str = "👋 Thanks for chatting! Don't forget to star this repo! ⭐";
const INTERRUPTED_FAREWELL: &str = "👋 Goodbye! Thanks for using the Botfolio Assistant!";

/// What to do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Blank line, prompt again
    Skip,
    /// An exit token
    Exit,
    /// Send the trimmed line to the dispatcher
    Ask(String),
}

pub fn is_exit_token(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_TOKENS.contains(&line.as_str())
}

pub fn classify_line(line: &str) -> LineAction {
    let input = line.trim();
    if is_exit_token(input) {
        LineAction::Exit
    } else if input.is_empty() {
        LineAction::Skip
    } else {
        LineAction::Ask(input.to_string())
    }
}

/// Welcome text shown before the first prompt
pub fn banner(profile: &ProfileRecord) -> String {
    let rule = "=".repeat(60);
    let heading = format!(
        "{}\n🤖 Welcome to {} Botfolio Assistant!\n{}",
        rule,
        profile.name().unwrap_or("My"),
        rule
    );

    format!(
        "\n{}\n\n{}\n\n{}\n",
        heading.cyan(),
        "Ask me anything about my background, projects, or just chat!\nType 'help' for available commands or 'exit' to quit."
            .green(),
        "💡 Pro tip: Try 'resume', 'projects', 'skills', or 'joke'!".yellow(),
    )
}

/// Interactive REPL session
pub struct ReplSession {
    dispatcher: Dispatcher,
}

impl ReplSession {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run the REPL main loop
    ///
    /// Returns once the user exits. A readline failure is reported on screen
    /// and ends the loop without an error.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", banner(self.dispatcher.profile()));

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            println!();
            match rl.readline(PROMPT) {
                Ok(line) => match classify_line(&line) {
                    LineAction::Exit => {
                        println!("{}", FAREWELL.green());
                        break;
                    }
                    LineAction::Skip => continue,
                    LineAction::Ask(input) => {
                        let _ = rl.add_history_entry(input.as_str());
                        let response = self.dispatcher.respond(&input).await;
                        println!("\n{}", response);
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("ReplSession::run: interrupted");
                    println!("\n\n{}", INTERRUPTED_FAREWELL.green());
                    break;
                }
                Err(err) => {
                    error!(error = %err, "Readline failed");
                    println!("\n{}", format!("❌ An error occurred: {}", err).red());
                    break;
                }
            }
        }

        info!("REPL session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_tokens() {
        for token in ["exit", "QUIT", "  bye  ", "GoodBye"] {
            assert!(is_exit_token(token), "{} should exit", token);
        }
        assert!(!is_exit_token("exit now"));
        assert!(!is_exit_token("byebye"));
        assert!(!is_exit_token(""));
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("   "), LineAction::Skip);
        assert_eq!(classify_line(" Quit "), LineAction::Exit);
        assert_eq!(classify_line("  skills "), LineAction::Ask("skills".to_string()));
    }

    #[test]
    fn test_banner_uses_name() {
        assert!(banner(&ProfileRecord::sample()).contains("Welcome to Your Name Botfolio Assistant!"));
        assert!(banner(&ProfileRecord::default()).contains("Welcome to My Botfolio Assistant!"));
    }
}
