//! Stdin adapter for the console prompt port

use std::io::{self, BufRead, Write};

use karma_engine::{EngineError, PromptPort};

/// Reads player answers from standard input.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptPort for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String, EngineError> {
        let mut stdout = io::stdout();
        stdout
            .write_all(prompt.as_bytes())
            .map_err(|e| EngineError::prompt(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| EngineError::prompt(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| EngineError::prompt(e.to_string()))?;

        // Strip the line terminator; the engine matches phrases exactly.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
