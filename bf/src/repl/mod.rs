//! Interactive chat loop
//!
//! Reads a line, hands it to the [`Dispatcher`](crate::dispatch::Dispatcher),
//! prints the answer, and repeats until an exit token, Ctrl+C or Ctrl+D.

mod session;

pub use session::{EXIT_TOKENS, LineAction, PROMPT, ReplSession, banner, classify_line, is_exit_token};

use eyre::Result;

use crate::dispatch::Dispatcher;

/// Run the interactive REPL
///
/// This is the main entry point for `botfolio chat`.
pub async fn run_interactive(dispatcher: Dispatcher) -> Result<()> {
    let mut session = ReplSession::new(dispatcher);
    session.run().await
}
