//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the end-of-run summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Short human-readable summary
    Text,
    /// The full run outcome as JSON
    Json,
}

/// CLI arguments for crew-chat
#[derive(Parser, Debug)]
#[command(name = "crew-chat")]
#[command(author, version, about = "Multi-persona group chat with an LLM picking who speaks next")]
#[command(long_about = r#"
crew-chat puts a crew of personas, and you, in one group chat.

After every message a manager asks the LLM who should speak next. The
chosen persona answers in character; when the floor passes to you, type a
line at the prompt. Type the termination keyword (APPROVE by default) or
press Ctrl-D to end the conversation.

Personas are read from a JSON array of {"name", "summary", "trait"} records.

Configuration files are loaded from (in priority order):
1. CREW_CHAT_<SECTION>__<KEY>          Environment
2. --config <path>                     Explicit config file
3. ./crew-chat.toml                    Project-level config
4. ~/.config/crew-chat/config.toml     Global config

Example:
  crew-chat --personas strawhats.json
  crew-chat -p strawhats.json --no-human --max-turns 6 "Zoro is lost again"
"#)]
pub struct Cli {
    /// Opening message (overrides chat.seed_message)
    pub seed: Option<String>,

    /// Persona file (overrides chat.personas)
    #[arg(short, long, value_name = "PATH")]
    pub personas: Option<PathBuf>,

    /// Model used for speech and speaker selection (overrides oracle.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Stop after this many turns
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_turns: Option<u64>,

    /// Leave the human out of the speaker roster
    #[arg(long)]
    pub no_human: bool,

    /// Word that ends the conversation when typed by the human ("" disables)
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Append a JSONL event log of the run to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Summary format printed when the conversation ends
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not echo the transcript, only print the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
