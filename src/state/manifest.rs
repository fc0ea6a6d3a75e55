//! Manifest registry and the derived file selector.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use crate::error::ManifestUnavailable;
use crate::net::types::{Category, Manifest};

pub const NO_FILES_PLACEHOLDER: &str = "No files found";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ManifestStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

/// Selectable `(category, file)` pairs for the page lifetime.
#[derive(Clone, Debug, Default)]
pub struct ManifestRegistry {
    manifest: Manifest,
    pub status: ManifestStatus,
}

/// One `<option>` of the file selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOption {
    pub value: String,
    pub label: String,
}

/// Rendered state of the file selector and load control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSelect {
    pub options: Vec<FileOption>,
    pub disabled: bool,
    pub load_enabled: bool,
}

impl ManifestRegistry {
    /// Store a fetch outcome. A failure falls back to the empty manifest and
    /// returns the status line to show.
    pub fn apply(&mut self, result: Result<Manifest, ManifestUnavailable>) -> Option<String> {
        match result {
            Ok(manifest) => {
                self.manifest = manifest;
                self.status = ManifestStatus::Loaded;
                None
            }
            Err(e) => {
                self.manifest = Manifest::default();
                let message = format!("Error loading manifest: {e}");
                self.status = ManifestStatus::Failed(message.clone());
                Some(message)
            }
        }
    }

    /// Files for `category`, empty until the manifest has loaded.
    pub fn files_for(&self, category: Category) -> &[String] {
        if self.status == ManifestStatus::Loaded { self.manifest.files(category) } else { &[] }
    }

    pub fn file_select(&self, category: Category) -> FileSelect {
        let files = self.files_for(category);
        if files.is_empty() {
            return FileSelect {
                options: vec![FileOption { value: String::new(), label: NO_FILES_PLACEHOLDER.to_owned() }],
                disabled: true,
                load_enabled: false,
            };
        }
        FileSelect {
            options: files.iter().map(|f| FileOption { value: f.clone(), label: f.clone() }).collect(),
            disabled: false,
            load_enabled: true,
        }
    }
}
