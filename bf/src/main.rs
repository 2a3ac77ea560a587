//! Botfolio CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use botfolio::cli::{Cli, Command, OutputFormat, generate_after_help};
use botfolio::config::Config;
use botfolio::dispatch::{Dispatcher, FileJokes, responses};
use botfolio::generative::{GenerativeFallback, NullBackend, TextCompletionBackend, select_backend};
use botfolio::profile::{LoadOutcome, ProfileRecord, ProfileStore};
use botfolio::prompts::PromptLoader;
use botfolio::repl;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Logging isn't initialized yet, so problems go to stderr
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("botfolio")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("botfolio.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cmd = Cli::command().after_help(generate_after_help());
    let cli = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli).await {
        eprintln!("{}", format!("❌ Failed to start assistant: {:#}", e).red());
        eprintln!(
            "{}",
            "💡 Check the profile JSON and config file, or run `botfolio init --force` to start over.".yellow()
        );
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let profile_path = cli.profile.clone().unwrap_or_else(|| config.profile.expanded_path());
    let store = ProfileStore::new(profile_path);
    info!(path = %store.path().display(), "Botfolio loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Init { force }) => cmd_init(&store, force),
        Some(Command::Profile { format }) => {
            let profile = load_profile(&store)?;
            cmd_profile(&profile, &config, format)
        }
        Some(Command::Ask { text }) => {
            let question = text.join(" ");
            if question.trim().is_empty() {
                debug!("main: empty question, nothing to answer");
                return Ok(());
            }
            let profile = load_profile(&store)?;
            let mut dispatcher = build_dispatcher(profile, &config);
            let answer = dispatcher.respond(&question).await;
            println!("{}", answer);
            Ok(())
        }
        Some(Command::Chat) | None => {
            let profile = load_profile(&store)?;
            let dispatcher = build_dispatcher(profile, &config);
            repl::run_interactive(dispatcher).await
        }
    }
}

/// Load the profile, writing the sample first if the file is missing
fn load_profile(store: &ProfileStore) -> Result<ProfileRecord> {
    if !store.exists() {
        println!("{}", "❌ data.json not found! Creating a sample file...".red());
    }
    let (profile, outcome) = store
        .load_or_init()
        .with_context(|| format!("Failed to load profile from {}", store.path().display()))?;
    if outcome == LoadOutcome::Created {
        println!("{}", format!("📝 Sample profile written to {}", store.path().display()).dimmed());
    }
    Ok(profile)
}

/// Wire the generative fallback and joke source around a profile
fn build_dispatcher(profile: ProfileRecord, config: &Config) -> Dispatcher {
    let backend: Box<dyn TextCompletionBackend> = match select_backend(&config.llm) {
        Ok(backend) => backend,
        Err(e) => {
            warn!(error = %e, "AI setup failed");
            let hint = if e.is_configuration() {
                " (check the llm section of the config)"
            } else {
                ""
            };
            println!("{}", format!("⚠️  AI setup failed: {}{}", e, hint).yellow());
            Box::new(NullBackend)
        }
    };

    let prompt_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let fallback = GenerativeFallback::new(backend, PromptLoader::new(prompt_root), config.llm.temperature);
    if fallback.is_available() {
        println!(
            "{}",
            format!(
                "🧠 AI mode available ({})! Use 'ai: your question' for smart responses",
                fallback.describe()
            )
            .green()
        );
    }

    let mut dispatcher = Dispatcher::new(profile, config.links.clone(), fallback);

    if let Some(path) = config.jokes.expanded_path() {
        match FileJokes::load(&path) {
            Ok(source) => dispatcher = dispatcher.with_jokes(Box::new(source)),
            Err(e) => warn!(error = %e, "Joke file unavailable, using built-in jokes"),
        }
    }

    dispatcher
}

fn cmd_init(store: &ProfileStore, force: bool) -> Result<()> {
    debug!(force, "cmd_init: called");
    store
        .init_sample(force)
        .with_context(|| format!("Failed to write sample profile to {}", store.path().display()))?;
    println!("{}", format!("✅ Sample profile written to {}", store.path().display()).green());
    Ok(())
}

fn cmd_profile(profile: &ProfileRecord, config: &Config, format: OutputFormat) -> Result<()> {
    debug!(%format, "cmd_profile: called");
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(profile).context("Failed to serialize profile")?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(profile).context("Failed to serialize profile")?);
        }
        OutputFormat::Text => {
            let sections = [
                responses::resume(profile, &config.links),
                responses::education(profile),
                responses::projects(profile),
                responses::skills(profile),
                responses::experience(profile),
                responses::certifications(profile, &config.links),
                responses::contact(profile),
            ];
            println!("{}", sections.join("\n\n"));
        }
    }
    Ok(())
}
