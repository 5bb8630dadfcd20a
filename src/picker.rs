// Native file-picker collaborator built on `rfd`.

use crate::validator::SUPPORTED_EXTENSIONS;
use rfd::FileDialog;
use std::path::PathBuf;

/// Source of absolute file paths chosen by the user.
pub trait FilePicker {
    /// Returns the chosen paths; empty when the user cancels.
    fn pick_files(&mut self) -> Vec<String>;
}

/// Multi-select native open dialog.
#[derive(Debug, Clone)]
pub struct DialogPicker {
    title: String,
    images_label: String,
    all_label: String,
    start_dir: Option<PathBuf>,
}

impl DialogPicker {
    pub fn new(title: impl Into<String>) -> Self {
        DialogPicker {
            title: title.into(),
            images_label: "Images".into(),
            all_label: "All files".into(),
            start_dir: None,
        }
    }

    /// Labels shown for the image and all-files filters.
    pub fn with_filter_labels(mut self, images: impl Into<String>, all: impl Into<String>) -> Self {
        self.images_label = images.into();
        self.all_label = all.into();
        self
    }

    pub fn with_start_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.start_dir = dir;
        self
    }
}

impl FilePicker for DialogPicker {
    fn pick_files(&mut self) -> Vec<String> {
        let mut dialog = FileDialog::new()
            .set_title(&self.title)
            .add_filter(&self.images_label, &SUPPORTED_EXTENSIONS)
            .add_filter(&self.all_label, &["*"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        match dialog.pick_files() {
            Some(paths) => {
                log::info!("dialog returned {} path(s)", paths.len());
                paths
                    .into_iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect()
            }
            None => {
                log::info!("dialog cancelled");
                Vec::new()
            }
        }
    }
}
