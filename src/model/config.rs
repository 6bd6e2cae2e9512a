use serde::{Deserialize, Serialize};

/// Configuration from drill.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

/// Where the template and the progress document live, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_readme")]
    pub readme: String,
    /// Extension given to generated code files (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            template: default_template(),
            readme: default_readme(),
            extension: default_extension(),
        }
    }
}

/// Markers and constants the progress editor works against.
///
/// Every editor operation takes one of these explicitly, so documents with
/// different markers or denominators can be edited side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_start_marker")]
    pub start_marker: String,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
    /// Body of a category with no entries
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Category synthesized when the document has no progress region
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_summary_heading")]
    pub summary_heading: String,
    /// Cosmetic denominator of the summary line
    #[serde(default = "default_planned")]
    pub planned: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            placeholder: default_placeholder(),
            default_category: default_category(),
            summary_heading: default_summary_heading(),
            planned: default_planned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Substituted for `DIFFICULTY` when no --difficulty is given
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            difficulty: default_difficulty(),
        }
    }
}

fn default_template() -> String {
    "template.py".to_string()
}

fn default_readme() -> String {
    "README.md".to_string()
}

fn default_extension() -> String {
    "py".to_string()
}

fn default_start_marker() -> String {
    "<!-- PROGRESS:START -->".to_string()
}

fn default_end_marker() -> String {
    "<!-- PROGRESS:END -->".to_string()
}

fn default_placeholder() -> String {
    "(none yet)".to_string()
}

fn default_category() -> String {
    "Arrays".to_string()
}

fn default_summary_heading() -> String {
    "## Progress Summary".to_string()
}

fn default_planned() -> u32 {
    150
}

fn default_difficulty() -> String {
    "TBD".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: DrillConfig = toml::from_str("").unwrap();
        assert_eq!(config.files.template, "template.py");
        assert_eq!(config.files.readme, "README.md");
        assert_eq!(config.files.extension, "py");
        assert_eq!(config.progress, ProgressConfig::default());
        assert_eq!(config.scaffold.difficulty, "TBD");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: DrillConfig = toml::from_str(
            r#"
[files]
extension = "rs"
template = "template.rs"

[progress]
planned = 75
"#,
        )
        .unwrap();
        assert_eq!(config.files.extension, "rs");
        assert_eq!(config.files.template, "template.rs");
        assert_eq!(config.files.readme, "README.md");
        assert_eq!(config.progress.planned, 75);
        assert_eq!(config.progress.start_marker, "<!-- PROGRESS:START -->");
        assert_eq!(config.progress.placeholder, "(none yet)");
    }
}
