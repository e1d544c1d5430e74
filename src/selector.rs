use std::path::PathBuf;

/// Source of the two directories a run needs. `None` means the user gave
/// nothing or cancelled.
pub trait DirectorySelector {
    fn select_input_dir(&mut self) -> Option<PathBuf>;
    fn select_output_dir(&mut self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Ready { source_dir: PathBuf, output_dir: PathBuf },
    Cancelled(&'static str),
}

/// Asks for the source first and only then for the destination.
pub fn select_directories(selector: &mut dyn DirectorySelector) -> Selection {
    let Some(source_dir) = selector.select_input_dir().filter(|p| !p.as_os_str().is_empty()) else {
        return Selection::Cancelled("No source folder selected.");
    };
    log::debug!("Selected source folder: {}", source_dir.display());

    let Some(output_dir) = selector.select_output_dir().filter(|p| !p.as_os_str().is_empty()) else {
        return Selection::Cancelled("No output folder selected.");
    };
    log::debug!("Selected output folder: {}", output_dir.display());

    Selection::Ready {
        source_dir,
        output_dir,
    }
}
