use std::fs;
use std::path::Path;

use log::debug;

use crate::io::project_io::DrillError;
use crate::model::config::DrillConfig;

pub const CONFIG_FILE: &str = "drill.toml";

/// Read drill.toml from the project root. A missing file means all defaults.
pub fn read_config(root: &Path) -> Result<DrillConfig, DrillError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(DrillConfig::default());
    }
    debug!("reading {}", config_path.display());
    let config_text = fs::read_to_string(&config_path).map_err(|e| DrillError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: DrillConfig = toml::from_str(&config_text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.files.readme, "README.md");
        assert_eq!(config.progress.planned, 150);
    }

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"[files]
readme = "PROGRESS.md"

[scaffold]
difficulty = "Medium"
"#,
        )
        .unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.files.readme, "PROGRESS.md");
        assert_eq!(config.scaffold.difficulty, "Medium");
    }

    #[test]
    fn test_malformed_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[files\nreadme = 3").unwrap();
        let err = read_config(tmp.path()).unwrap_err();
        assert!(matches!(err, DrillError::ConfigParseError(_)));
    }
}
