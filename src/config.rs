use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite path; `":memory:"` keeps everything in process.
    pub database_path: String,
    /// Dataset loaded once at startup. `null` disables the bulk load.
    pub dataset_path: Option<String>,
    pub csv_delimiter: char,
    pub bind_address: String,
    /// Upper bound on records fed to the interval analyzer.
    pub max_analysis_records: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            dataset_path: Some("data/movielist.csv".to_string()),
            csv_delimiter: ';',
            bind_address: "127.0.0.1:8000".to_string(),
            max_analysis_records: None,
        }
    }
}

impl AppConfig {
    pub fn csv_delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.csv_delimiter.is_ascii() {
            Ok(self.csv_delimiter as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(self.csv_delimiter))
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.csv_delimiter_byte()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"bind_address": "0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.dataset_path.as_deref(), Some("data/movielist.csv"));
        assert_eq!(config.csv_delimiter, ';');
        assert_eq!(config.max_analysis_records, None);
    }

    #[test]
    fn default_dataset_points_at_bundled_file() {
        let dataset = AppConfig::default().dataset_path.unwrap();
        assert!(Path::new(env!("CARGO_MANIFEST_DIR")).join(dataset).exists());
    }

    #[test]
    fn dataset_can_be_disabled() {
        let config: AppConfig =
            serde_json::from_str(r#"{"dataset_path": null, "max_analysis_records": 5000}"#).unwrap();
        assert_eq!(config.dataset_path, None);
        assert_eq!(config.max_analysis_records, Some(5000));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"database_path": "awards.db", "csv_delimiter": ","}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.database_path, "awards.db");
        assert_eq!(config.csv_delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn load_config_rejects_non_ascii_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"csv_delimiter": "§"}}"#).unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn load_config_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Json(_))));
    }
}
