//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Botfolio - portfolio assistant for the terminal
#[derive(Parser)]
#[command(
    name = "botfolio",
    about = "Chat with a portfolio assistant about a professional profile",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Profile JSON file, overriding `profile.path` from config
    #[arg(short, long, global = true, help = "Path to the profile JSON file")]
    pub profile: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat (default)
    Chat,

    /// Answer a single question and exit
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Write the sample profile to the profile path
    Init {
        /// Overwrite an existing profile
        #[arg(short, long)]
        force: bool,
    },

    /// Print the loaded profile
    Profile {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("botfolio")
        .join("logs")
        .join("botfolio.log")
}

/// Generate the after_help text
pub fn generate_after_help() -> String {
    let mut help = String::new();
    help.push_str("Chat keywords:\n");
    help.push_str("  resume, education, projects, skills, contact, certifications,\n");
    help.push_str("  experience, joke, help, about; prefix a question with 'ai:' for free-form answers\n");
    help.push('\n');
    help.push_str(&format!("Logs are written to: {}\n", get_log_path().display()));
    help
}

/// Output format for the profile command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {}. Use: text, json, or yaml", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["botfolio"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parse_ask_joins_words() {
        let cli = Cli::parse_from(["botfolio", "ask", "what", "are", "your", "skills"]);
        match cli.command {
            Some(Command::Ask { text }) => assert_eq!(text.join(" "), "what are your skills"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_ask_requires_text() {
        assert!(Cli::try_parse_from(["botfolio", "ask"]).is_err());
    }

    #[test]
    fn test_cli_parse_init_force() {
        let cli = Cli::parse_from(["botfolio", "init", "--force"]);
        assert!(matches!(cli.command, Some(Command::Init { force: true })));
    }

    #[test]
    fn test_cli_parse_profile_format() {
        let cli = Cli::parse_from(["botfolio", "profile", "--format", "yaml"]);
        assert!(matches!(
            cli.command,
            Some(Command::Profile {
                format: OutputFormat::Yaml
            })
        ));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "botfolio",
            "chat",
            "--no-color",
            "-p",
            "/tmp/me.json",
            "-l",
            "debug",
            "-c",
            "/tmp/bf.yml",
        ]);
        assert!(matches!(cli.command, Some(Command::Chat)));
        assert!(cli.no_color);
        assert_eq!(cli.profile, Some(PathBuf::from("/tmp/me.json")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bf.yml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_after_help_mentions_log_path() {
        assert!(generate_after_help().contains("botfolio.log"));
    }
}
