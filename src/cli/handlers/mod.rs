use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cli::commands::Cli;
use crate::cli::output::{NewProblemJson, SummaryJson, code_file_line, document_line};
use crate::io::project_io::{self, DrillError};
use crate::model::project::Project;
use crate::ops::progress_ops;
use crate::ops::scaffold::ProblemRequest;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = project_root(cli.project_dir.as_deref())?;
    let project = project_io::load_project(&root)?;

    if !cli.rest.is_empty() {
        debug!("ignoring extra arguments: {:?}", cli.rest);
    }

    let request = ProblemRequest {
        difficulty: cli
            .difficulty
            .unwrap_or_else(|| project.config.scaffold.difficulty.clone()),
        name: cli.name,
        link: cli.link,
        category: cli.category,
        done: cli.done,
    };

    let report = cmd_new(&project, &request)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", code_file_line(&report));
        println!("{}", document_line(&report));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The -C directory if given, otherwise the current directory
fn project_root(dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

/// Path shown to the user: relative to the project root when possible
fn display_path(project: &Project, path: &Path) -> String {
    path.strip_prefix(&project.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ---------------------------------------------------------------------------
// New problem
// ---------------------------------------------------------------------------

/// Scaffold the code file for `request` and record it in the progress document.
///
/// The template is loaded before anything is written, so a missing template
/// leaves the project untouched.
pub fn cmd_new(project: &Project, request: &ProblemRequest) -> Result<NewProblemJson, DrillError> {
    let config = &project.config;
    let template = project_io::load_template(project)?;

    let code_file = project_io::write_code_file(project, request, &request.render(&template))?;
    debug!(
        "code file {} (created={})",
        code_file.path.display(),
        code_file.created
    );

    let document = project_io::ensure_document(project)?;
    let title = request.category_title();
    let entry = request.entry(&config.files.extension);
    let result = progress_ops::record_entry(&document, &title, &entry, &config.progress);
    info!(
        "{} '{}' under '{}': {} done / {} tracked",
        result.outcome, entry.name, title, result.counts.done, result.counts.total
    );

    if result.document != document {
        project_io::save_document(project, &result.document)?;
    } else {
        debug!("progress document unchanged, not rewriting");
    }

    Ok(NewProblemJson {
        name: request.name.clone(),
        category: title,
        done: request.done,
        code_file: display_path(project, &code_file.path),
        created: code_file.created,
        document: display_path(project, &project.document_path()),
        entry: result.outcome,
        summary: SummaryJson::new(result.counts, config.progress.planned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::progress::UpsertOutcome;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_template(dir: &Path) -> Project {
        fs::write(
            dir.join("template.py"),
            "# PROBLEM_NAME (DIFFICULTY)\n# PROBLEM_LINK\n# CATEGORY\n",
        )
        .unwrap();
        project_io::load_project(dir).unwrap()
    }

    fn request(name: &str, category: &str, done: bool) -> ProblemRequest {
        ProblemRequest {
            name: name.to_string(),
            link: "http://x".to_string(),
            category: category.to_string(),
            difficulty: "TBD".to_string(),
            done,
        }
    }

    #[test]
    fn test_cmd_new_fresh_project() {
        let tmp = TempDir::new().unwrap();
        let project = project_with_template(tmp.path());

        let report = cmd_new(&project, &request("Two Sum", "arrays", false)).unwrap();
        assert!(report.created);
        assert_eq!(report.code_file, "arrays/two_sum.py");
        assert_eq!(report.entry, UpsertOutcome::Inserted);
        assert_eq!(
            fs::read_to_string(tmp.path().join("arrays/two_sum.py")).unwrap(),
            "# Two Sum (TBD)\n# http://x\n# Arrays\n"
        );

        let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(readme.contains("## Arrays\n- [ ] [Two Sum](http://x) — `arrays/two_sum.py`\n\n## Two Pointers"));
        assert!(readme.contains("- Total: 0 done / 150 planned"));
    }

    #[test]
    fn test_cmd_new_missing_template_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let project = project_io::load_project(tmp.path()).unwrap();

        let err = cmd_new(&project, &request("Two Sum", "arrays", false)).unwrap_err();
        assert!(matches!(err, DrillError::TemplateNotFound { .. }));
        assert!(!tmp.path().join("README.md").exists());
        assert!(!tmp.path().join("arrays").exists());
    }

    #[test]
    fn test_cmd_new_mark_done_later() {
        let tmp = TempDir::new().unwrap();
        let project = project_with_template(tmp.path());

        cmd_new(&project, &request("Two Sum", "arrays", false)).unwrap();
        let report = cmd_new(&project, &request("Two Sum", "arrays", true)).unwrap();
        assert!(!report.created);
        assert_eq!(report.entry, UpsertOutcome::Upgraded);
        assert_eq!(report.summary.done, 1);

        let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(readme.contains("- [x] [Two Sum](http://x) — `arrays/two_sum.py`"));
        assert!(readme.contains("- Total: 1 done / 150 planned"));
    }

    #[test]
    fn test_cmd_new_new_category() {
        let tmp = TempDir::new().unwrap();
        let project = project_with_template(tmp.path());

        let report = cmd_new(&project, &request("Clone Graph", "graphs", true)).unwrap();
        assert_eq!(report.category, "Graphs");
        let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(readme.ends_with(
            "## Binary Search\n(none yet)\n\n## Graphs\n- [x] [Clone Graph](http://x) — `graphs/clone_graph.py`\n\n<!-- PROGRESS:END -->\n"
        ));
    }
}
