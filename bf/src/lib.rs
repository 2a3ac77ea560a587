//! Botfolio - a portfolio assistant for the terminal
//!
//! Answers keyword-triggered questions about a professional profile loaded
//! from a JSON file, with an optional generative fallback for questions
//! prefixed with `ai:`.
//!
//! # Modules
//!
//! - [`profile`] - Profile record and JSON storage
//! - [`dispatch`] - Keyword routing and canned answers
//! - [`generative`] - Free-form answers through a text-completion backend
//! - [`llm`] - HTTP clients for hosted models
//! - [`prompts`] - Prompt templates for the generative fallback
//! - [`repl`] - Interactive chat loop
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod generative;
pub mod llm;
pub mod profile;
pub mod prompts;
pub mod repl;

// Re-export commonly used types
pub use config::{Config, JokesConfig, LinksConfig, LlmConfig, ProfileConfig};
pub use dispatch::{Dispatcher, FileJokes, JokeSource, TRIGGERS, Topic, route};
pub use generative::{
    GenerativeFallback, LlmBackend, NullBackend, QueryFamily, TextCompletionBackend, clean_response, select_backend,
};
pub use llm::{AnthropicClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, create_client};
pub use profile::{Contact, ExperienceEntry, LoadOutcome, ProfileError, ProfileRecord, ProfileStore, ProjectEntry};
pub use prompts::PromptLoader;
pub use repl::{ReplSession, run_interactive};
