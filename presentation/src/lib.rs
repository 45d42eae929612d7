//! Presentation layer for crew-chat
//!
//! This crate contains the CLI definition, the console adapter the human
//! participant types into, and the colored transcript output.

pub mod cli;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::stdin::StdinHumanInput;
pub use output::console::ConsoleFormatter;
pub use output::printer::ConsolePrinter;
