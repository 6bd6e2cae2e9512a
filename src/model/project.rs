use std::path::PathBuf;

use super::config::DrillConfig;

/// A practice repository: the directory holding the template, the progress
/// document and one subdirectory per category
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project
    pub root: PathBuf,
    /// Parsed drill.toml, or defaults when there is none
    pub config: DrillConfig,
}

impl Project {
    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.config.files.template)
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(&self.config.files.readme)
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }
}
