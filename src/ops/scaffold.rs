use crate::model::progress::Entry;
use crate::util::text::{category_title, slugify};

/// Everything needed to scaffold one problem, derived from the CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRequest {
    pub name: String,
    pub link: String,
    /// Directory name as given on the command line, e.g. `two_pointers`
    pub category: String,
    pub difficulty: String,
    pub done: bool,
}

impl ProblemRequest {
    /// Heading title used in the progress document and the template
    pub fn category_title(&self) -> String {
        category_title(&self.category)
    }

    /// Name of the generated code file, e.g. `two_sum.py`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", slugify(&self.name), extension)
    }

    /// Path label recorded in the checklist, relative to the project root
    pub fn path_label(&self, extension: &str) -> String {
        format!("{}/{}", self.category, self.file_name(extension))
    }

    pub fn entry(&self, extension: &str) -> Entry {
        Entry {
            done: self.done,
            name: self.name.clone(),
            link: self.link.clone(),
            path: self.path_label(extension),
        }
    }

    /// Fill the template tokens
    pub fn render(&self, template: &str) -> String {
        render_template(
            template,
            &self.name,
            &self.link,
            &self.category_title(),
            &self.difficulty,
        )
    }
}

/// Substitute `PROBLEM_NAME`, `PROBLEM_LINK`, `CATEGORY` and `DIFFICULTY`,
/// in that order, by plain string replacement.
pub fn render_template(
    template: &str,
    name: &str,
    link: &str,
    category: &str,
    difficulty: &str,
) -> String {
    template
        .replace("PROBLEM_NAME", name)
        .replace("PROBLEM_LINK", link)
        .replace("CATEGORY", category)
        .replace("DIFFICULTY", difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ProblemRequest {
        ProblemRequest {
            name: "Container With Most Water".to_string(),
            link: "https://leetcode.com/problems/container-with-most-water/".to_string(),
            category: "two_pointers".to_string(),
            difficulty: "TBD".to_string(),
            done: false,
        }
    }

    #[test]
    fn test_paths() {
        let req = request();
        assert_eq!(req.file_name("py"), "container_with_most_water.py");
        assert_eq!(req.path_label("py"), "two_pointers/container_with_most_water.py");
        assert_eq!(req.category_title(), "Two Pointers");
    }

    #[test]
    fn test_entry() {
        let entry = request().entry("rs");
        assert!(!entry.done);
        assert_eq!(entry.name, "Container With Most Water");
        assert_eq!(entry.path, "two_pointers/container_with_most_water.rs");
    }

    #[test]
    fn test_render_template() {
        let template = "\"\"\"\nPROBLEM_NAME\nPROBLEM_LINK\nCategory: CATEGORY\nDifficulty: DIFFICULTY\n\"\"\"\n";
        assert_eq!(
            request().render(template),
            "\"\"\"\nContainer With Most Water\nhttps://leetcode.com/problems/container-with-most-water/\nCategory: Two Pointers\nDifficulty: TBD\n\"\"\"\n"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render_template("PROBLEM_NAME / PROBLEM_NAME", "A", "l", "C", "D");
        assert_eq!(out, "A / A");
    }
}
