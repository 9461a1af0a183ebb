use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum PromptError {
    Closed,
    Io(String),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Closed => f.write_str("Input closed before an answer was given"),
            Self::Io(msg) => f.write_fmt(std::format_args!("Input error: {}", msg)),
        };
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

/// Blocking yes/no prompt. Re-prompts until the reader yields one of
/// y/yes/n/no, case-insensitive and trimmed. End of input is an error,
/// not an answer.
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool, PromptError> {
    let mut line = String::new();

    loop {
        print!("{} (y/n): ", prompt);
        std::io::stdout().flush()?;

        line.clear();
        let count = input.read_line(&mut line)?;
        if count == 0 {
            return Err(PromptError::Closed);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}
