//! Human input read from the process's standard input

use async_trait::async_trait;
use crew_chat_application::{HumanInput, HumanInputError};
use std::io::{BufRead, Write};

/// [`HumanInput`] adapter over stdin
///
/// The prompt goes to stdout. Reading happens on the blocking pool; the
/// conversation waits for it either way.
#[derive(Debug, Default)]
pub struct StdinHumanInput;

impl StdinHumanInput {
    pub fn new() -> Self {
        Self
    }
}

/// One line from `reader`, without its line ending; `Closed` at EOF
fn read_one_line(reader: &mut impl BufRead) -> Result<String, HumanInputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(HumanInputError::Closed);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

#[async_trait]
impl HumanInput for StdinHumanInput {
    async fn read_line(&self, prompt: &str) -> Result<String, HumanInputError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        tokio::task::spawn_blocking(|| read_one_line(&mut std::io::stdin().lock()))
            .await
            .map_err(|e| HumanInputError::IoError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_line_ending() {
        let mut input = Cursor::new("I'm the captain!\r\nsecond line\n");
        assert_eq!(read_one_line(&mut input).unwrap(), "I'm the captain!");
        assert_eq!(read_one_line(&mut input).unwrap(), "second line");
    }

    #[test]
    fn test_eof_is_closed() {
        let mut input = Cursor::new("");
        assert!(read_one_line(&mut input).unwrap_err().is_closed());
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_one_line(&mut input).unwrap(), "");
    }
}
