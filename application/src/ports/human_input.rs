//! Human input port
//!
//! The human participant speaks by typing one line at an interactive
//! console. The console adapter lives in the presentation layer.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumanInputError {
    /// End of input; the human has nothing more to say
    #[error("Input closed")]
    Closed,

    #[error("I/O error: {0}")]
    IoError(String),
}

impl HumanInputError {
    pub fn is_closed(&self) -> bool {
        matches!(self, HumanInputError::Closed)
    }
}

impl From<std::io::Error> for HumanInputError {
    fn from(e: std::io::Error) -> Self {
        HumanInputError::IoError(e.to_string())
    }
}

/// Port for reading one line typed by the human participant
#[async_trait]
pub trait HumanInput: Send + Sync {
    /// Show `prompt` and wait for one line. Blocks the whole conversation.
    async fn read_line(&self, prompt: &str) -> Result<String, HumanInputError>;
}
