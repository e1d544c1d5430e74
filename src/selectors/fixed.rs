use crate::selector::DirectorySelector;
use std::path::PathBuf;

/// Paths known up front (command line, tests). A missing path is asked of
/// the fallback selector, if there is one.
pub struct FixedSelector {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    fallback: Option<Box<dyn DirectorySelector>>,
}

impl FixedSelector {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input,
            output,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn DirectorySelector>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl DirectorySelector for FixedSelector {
    fn select_input_dir(&mut self) -> Option<PathBuf> {
        match self.input.take() {
            Some(path) => Some(path),
            None => self.fallback.as_mut()?.select_input_dir(),
        }
    }

    fn select_output_dir(&mut self) -> Option<PathBuf> {
        match self.output.take() {
            Some(path) => Some(path),
            None => self.fallback.as_mut()?.select_output_dir(),
        }
    }
}
