//! Configuration file loading for crew-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CREW_CHAT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./crew-chat.toml` or `./.crew-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/crew-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileOracleConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
