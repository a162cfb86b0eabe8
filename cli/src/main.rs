//! CLI entrypoint for LeetBud
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use leetbud_application::{ConversationSession, ResolveProblemUseCase};
use leetbud_infrastructure::{
    ConfigLoader, FileConfig, LeetCodeCatalog, OpenAiGateway, OpenAiSettings,
};
use leetbud_presentation::{Cli, ConsoleFormatter, OutputConfig, ReplConfig, TutorRepl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting LeetBud");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let mut has_errors = false;
    for issue in config.validate() {
        if issue.is_error() {
            eprintln!("Config error: {}", issue.message);
            has_errors = true;
        } else {
            warn!("{}", issue.message);
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    let openai = &config.providers.openai;
    let Some(api_key) = openai.resolve_api_key() else {
        bail!(
            "No API key found. Set the {} environment variable or providers.openai.api_key.",
            openai.api_key_env
        );
    };

    // === Dependency Injection ===
    let catalog = Arc::new(
        LeetCodeCatalog::new(&config.catalog).context("Failed to create problem catalog")?,
    );
    let gateway = Arc::new(
        OpenAiGateway::new(OpenAiSettings::from_config(openai, api_key))
            .context("Failed to create chat-completion client")?,
    );

    let resolver = ResolveProblemUseCase::new(catalog);
    let session = ConversationSession::new(gateway, config.session.to_session_config());
    let formatter = ConsoleFormatter::new(&OutputConfig {
        color: config.output.color,
        width: config.effective_width(),
    });
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone(),
    };

    let mut repl = TutorRepl::new(resolver, session, formatter).with_config(repl_config);

    repl.run(cli.query.clone()).await?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.providers.openai.model = model.clone();
    }
    if let Some(max_history) = cli.max_history {
        config.session.max_history = max_history;
    }
    if let Some(width) = cli.width {
        config.output.width = width;
    }
    if cli.no_color {
        config.output.color = false;
    }
}
