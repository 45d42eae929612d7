//! CLI entrypoint for crew-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crew_chat_application::RunGroupChatUseCase;
use crew_chat_domain::HUMAN_SOURCE;
use crew_chat_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiChatOracle, PersonaLoader,
};
use crew_chat_presentation::{
    Cli, ConsoleFormatter, ConsolePrinter, OutputFormat, StdinHumanInput,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Initialize logging based on verbosity level; stdout belongs to the chat
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting crew-chat");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    ConsoleFormatter::set_color(config.output.color && !cli.no_color);

    let settings = config.chat.to_settings();
    let registry = PersonaLoader::load(
        &config.chat.personas,
        &[settings.topic.as_str(), HUMAN_SOURCE],
    )?;

    for persona in &registry {
        info!(
            trait_summary = persona.trait_summary(),
            "Persona {}: {}",
            persona.identity(),
            persona.description()
        );
    }

    // === Dependency Injection ===
    let endpoint = config.oracle.to_endpoint();
    if endpoint.api_key.is_none() {
        warn!(
            "No API key found (set {} or oracle.api_key); sending unauthenticated requests",
            config.oracle.api_key_env
        );
    }
    let oracle = Arc::new(OpenAiChatOracle::new(endpoint)?);
    info!("Using model {} at {}", oracle.model(), oracle.url());

    let mut use_case = RunGroupChatUseCase::new(oracle, Arc::new(StdinHumanInput::new()));

    if !cli.quiet {
        let human = settings
            .include_human
            .then_some(settings.human_description.as_str());
        print!("{}", ConsoleFormatter::format_roster(&registry, human));
        use_case = use_case.with_observer(Arc::new(ConsolePrinter::new()));
    }

    if let Some(path) = &config.output.log_file {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        info!("Logging run events to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    let outcome = use_case.execute(&registry, &settings).await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_summary(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    Ok(())
}

/// CLI flags win over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(seed) = &cli.seed {
        config.chat.seed_message = seed.clone();
    }
    if let Some(path) = &cli.personas {
        config.chat.personas = path.clone();
    }
    if let Some(model) = &cli.model {
        config.oracle.model = model.clone();
    }
    if let Some(max_turns) = cli.max_turns {
        config.chat.max_turns = usize::try_from(max_turns).ok();
    }
    if cli.no_human {
        config.chat.include_human = false;
    }
    if let Some(keyword) = &cli.keyword {
        config.chat.termination_keyword = keyword.clone();
    }
    if let Some(path) = &cli.log_file {
        config.output.log_file = Some(path.clone());
    }
}
