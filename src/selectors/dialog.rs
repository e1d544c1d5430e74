use crate::selector::DirectorySelector;
use rfd::FileDialog;
use std::path::PathBuf;

/// Native folder pickers.
pub struct DialogSelector;

impl DirectorySelector for DialogSelector {
    fn select_input_dir(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_title("Select image folder").pick_folder()
    }

    fn select_output_dir(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_title("Select output folder").pick_folder()
    }
}
