use std::path::Path;

const DELIMITER: &str = "--------------------------------------------------";

/// Accumulates one formatted block per generated password. The whole
/// buffer is flushed to disk in a single overwriting write at the end
/// of a run.
pub struct Report {
    buffer: String,
    blocks: usize,
}

impl Report {
    pub fn new() -> Report {
        Report {
            buffer: String::new(),
            blocks: 0,
        }
    }

    pub fn append(&mut self, length: usize, password: &str) {
        self.buffer.push_str(DELIMITER);
        self.buffer.push('\n');
        self.buffer.push_str(&format!("Password of length {}:\n", length));
        self.buffer.push_str(password);
        self.buffer.push('\n');
        self.buffer.push_str(DELIMITER);
        self.buffer.push('\n');

        self.blocks += 1;
    }

    pub fn block_count(&self) -> usize {
        self.blocks
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Truncate-then-write semantics: any previous file content is
    /// replaced entirely.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        std::fs::write(path, self.buffer.as_bytes())
    }
}
