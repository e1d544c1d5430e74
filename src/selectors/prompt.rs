use crate::selector::DirectorySelector;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::path::PathBuf;

/// Asks for each directory on a line-oriented terminal.
pub struct PromptSelector<R, W> {
    reader: R,
    writer: W,
}

impl PromptSelector<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, label: &str) -> Option<PathBuf> {
        if let Err(e) = write!(self.writer, "{label} › ").and_then(|_| self.writer.flush()) {
            log::warn!("Could not write prompt: {}", e);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim();
                (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
            }
            Err(e) => {
                log::warn!("Could not read input: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> DirectorySelector for PromptSelector<R, W> {
    fn select_input_dir(&mut self) -> Option<PathBuf> {
        self.ask("Image folder")
    }

    fn select_output_dir(&mut self) -> Option<PathBuf> {
        self.ask("Output folder")
    }
}
