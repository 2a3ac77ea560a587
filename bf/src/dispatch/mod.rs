//! Response dispatch
//!
//! Maps one line of user input to an answer. Matching is a case-insensitive
//! substring search over an ordered trigger table, so the first row whose
//! keyword appears anywhere in the input wins.

pub mod jokes;
pub mod responses;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::config::LinksConfig;
use crate::generative::{GenerativeFallback, UNAVAILABLE_MESSAGE};
use crate::profile::ProfileRecord;

pub use jokes::{BUILTIN_JOKES, FileJokes, JokeSource};

/// Prefix that sends the rest of the line to the generative fallback
pub const AI_PREFIX: &str = "ai:";

/// Canned answer families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Resume,
    Education,
    Projects,
    Skills,
    Contact,
    Certifications,
    Experience,
    Joke,
    Help,
    About,
}

/// Trigger keywords in priority order
pub const TRIGGERS: &[(&[&str], Topic)] = &[
    (&["resume", "cv"], Topic::Resume),
    (&["school", "education", "university"], Topic::Education),
    (&["projects", "work"], Topic::Projects),
    (&["skills", "tech"], Topic::Skills),
    (&["contact", "email", "social"], Topic::Contact),
    (&["certifications", "certificates"], Topic::Certifications),
    (&["experience", "job"], Topic::Experience),
    (&["joke", "funny"], Topic::Joke),
    (&["help", "commands"], Topic::Help),
    (&["about", "info"], Topic::About),
];

/// First topic with a keyword contained in `normalized`
pub fn route(normalized: &str) -> Option<Topic> {
    TRIGGERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, topic)| *topic)
}

/// Replies for input nothing matched; `{}` is the user's input
const UNMATCHED: [&str; 4] = [
    "🤔 I'm not sure about '{}'. Try 'help' to see what I can do!",
    "❓ Hmm, '{}' isn't something I recognize. Type 'help' for available commands!",
    "🔍 I didn't understand '{}'. Try 'help', or ask about 'resume', 'projects', or 'skills'!",
    "💭 '{}' is not in my vocabulary yet. Use 'help' to see what I can help with!",
];

/// Turns raw input lines into answers about one profile
pub struct Dispatcher {
    profile: ProfileRecord,
    links: LinksConfig,
    fallback: GenerativeFallback,
    jokes: Option<Box<dyn JokeSource>>,
    rng: StdRng,
}

impl Dispatcher {
    pub fn new(profile: ProfileRecord, links: LinksConfig, fallback: GenerativeFallback) -> Self {
        Self {
            profile,
            links,
            fallback,
            jokes: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Prefer jokes from `source` over the built-in list
    pub fn with_jokes(mut self, source: Box<dyn JokeSource>) -> Self {
        self.jokes = Some(source);
        self
    }

    /// Make random choices reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Answer one line of input
    pub async fn respond(&mut self, raw: &str) -> String {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase();
        let wants_ai = normalized.starts_with(AI_PREFIX);
        debug!(%normalized, %wants_ai, "Dispatcher::respond: called");

        if wants_ai && self.fallback.is_available() {
            let question = trimmed
                .get(AI_PREFIX.len()..)
                .unwrap_or(&normalized[AI_PREFIX.len()..])
                .trim();
            let answer = self.fallback.generate(question, &self.profile).await;
            return format!("{} {}", "🧠 AI Response:".magenta(), answer);
        }

        match route(&normalized) {
            Some(topic) => {
                debug!(?topic, "Dispatcher::respond: matched");
                self.answer(topic)
            }
            None if wants_ai => UNAVAILABLE_MESSAGE.red().to_string(),
            None => self.unmatched(trimmed),
        }
    }

    fn answer(&mut self, topic: Topic) -> String {
        match topic {
            Topic::Resume => responses::resume(&self.profile, &self.links),
            Topic::Education => responses::education(&self.profile),
            Topic::Projects => responses::projects(&self.profile),
            Topic::Skills => responses::skills(&self.profile),
            Topic::Contact => responses::contact(&self.profile),
            Topic::Certifications => responses::certifications(&self.profile, &self.links),
            Topic::Experience => responses::experience(&self.profile),
            Topic::Joke => self.joke(),
            Topic::Help => responses::help(),
            Topic::About => responses::about(&self.profile),
        }
    }

    fn joke(&mut self) -> String {
        if let Some(source) = &self.jokes
            && let Some(joke) = source.joke(&mut self.rng)
        {
            return format!("😄 Here's a joke for you:\n\n{}", joke).yellow().to_string();
        }
        format!("😄 {}", jokes::builtin_joke(&mut self.rng)).yellow().to_string()
    }

    fn unmatched(&mut self, input: &str) -> String {
        let template = UNMATCHED.choose(&mut self.rng).copied().unwrap_or(UNMATCHED[0]);
        template.replacen("{}", input, 1).yellow().to_string()
    }
}
