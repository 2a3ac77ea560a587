//! Programming jokes

use std::path::Path;

use eyre::{Context, Result};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Jokes used when no external source is configured or it comes up empty
pub const BUILTIN_JOKES: [&str; 5] = [
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why don't programmers like nature? It has too many bugs! 🌿🐛",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "Why do Java developers wear glasses? Because they can't C#! 👓",
];

/// Somewhere jokes come from besides the built-in list
pub trait JokeSource: Send {
    /// A joke, or `None` when the source has nothing to offer
    fn joke(&self, rng: &mut dyn RngCore) -> Option<String>;
}

/// Jokes read from a text file, one per non-blank line
#[derive(Debug, Clone)]
pub struct FileJokes {
    jokes: Vec<String>,
}

impl FileJokes {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read jokes from {}", path.display()))?;

        let jokes: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        debug!(?path, count = jokes.len(), "FileJokes::load: loaded");

        Ok(Self { jokes })
    }
}

impl JokeSource for FileJokes {
    fn joke(&self, rng: &mut dyn RngCore) -> Option<String> {
        self.jokes.choose(rng).cloned()
    }
}

/// Pick one of [`BUILTIN_JOKES`] uniformly
pub fn builtin_joke(rng: &mut dyn RngCore) -> &'static str {
    BUILTIN_JOKES.choose(rng).copied().unwrap_or(BUILTIN_JOKES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_joke_is_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(BUILTIN_JOKES.contains(&builtin_joke(&mut rng)));
        }
    }

    #[test]
    fn test_file_jokes_skip_blank_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jokes.txt");
        std::fs::write(&path, "First joke\n\n   \nSecond joke\n").unwrap();

        let source = FileJokes::load(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let joke = source.joke(&mut rng).unwrap();
            assert!(joke == "First joke" || joke == "Second joke");
        }
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jokes.txt");
        std::fs::write(&path, "\n").unwrap();

        let source = FileJokes::load(&path).unwrap();
        assert!(source.joke(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(FileJokes::load("/nonexistent/jokes.txt").is_err());
    }
}
