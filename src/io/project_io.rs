use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::io::config_io;
use crate::model::project::Project;
use crate::ops::progress_ops;
use crate::ops::scaffold::ProblemRequest;

/// Error type for project I/O operations
#[derive(Debug, thiserror::Error)]
pub enum DrillError {
    #[error("{} not found", .path.display())]
    TemplateNotFound { path: PathBuf },
    #[error("could not read {}: {source}", .path.display())]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", .path.display())]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse drill.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

/// A generated code file and whether this run created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    pub path: PathBuf,
    pub created: bool,
}

/// Load the project rooted at `root`, reading drill.toml if present.
pub fn load_project(root: &Path) -> Result<Project, DrillError> {
    let config = config_io::read_config(root)?;
    Ok(Project {
        root: root.to_path_buf(),
        config,
    })
}

/// Read the problem template. A missing template is fatal.
pub fn load_template(project: &Project) -> Result<String, DrillError> {
    let path = project.template_path();
    if !path.is_file() {
        return Err(DrillError::TemplateNotFound { path });
    }
    fs::read_to_string(&path).map_err(|e| DrillError::ReadError { path, source: e })
}

/// Read the progress document, creating it with default content first if it
/// doesn't exist.
pub fn ensure_document(project: &Project) -> Result<String, DrillError> {
    let path = project.document_path();
    if !path.exists() {
        debug!("creating default progress document at {}", path.display());
        let content = progress_ops::default_document(&project.config.progress);
        write_file(&path, &content)?;
        return Ok(content);
    }
    fs::read_to_string(&path).map_err(|e| DrillError::ReadError { path, source: e })
}

/// Overwrite the progress document in one step
pub fn save_document(project: &Project, content: &str) -> Result<(), DrillError> {
    write_file(&project.document_path(), content)
}

/// Write the rendered template to `<category>/<slug>.<ext>`.
///
/// The category directory is created as needed. An existing file is left
/// untouched and reported with `created: false`.
pub fn write_code_file(
    project: &Project,
    request: &ProblemRequest,
    content: &str,
) -> Result<CodeFile, DrillError> {
    let dir = project.category_dir(&request.category);
    fs::create_dir_all(&dir).map_err(|e| DrillError::WriteError {
        path: dir.clone(),
        source: e,
    })?;

    let path = dir.join(request.file_name(&project.config.files.extension));
    if path.exists() {
        debug!("{} exists, not overwriting", path.display());
        return Ok(CodeFile {
            path,
            created: false,
        });
    }

    fs::write(&path, content).map_err(|e| DrillError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    Ok(CodeFile {
        path,
        created: true,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), DrillError> {
    atomic_write(path, content.as_bytes()).map_err(|e| DrillError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace the file at `path` with `content` via a sibling temp file.
///
/// The progress document is rewritten in full on every run; going through
/// a rename means an interrupted run leaves the previous document intact.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
