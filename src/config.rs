use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::singleton::ConnectionConfig;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// =============================================================================
// Demo inputs
// =============================================================================

/// Inputs for the demos. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub payment: PaymentSection,
    pub singleton: SingletonSection,
    pub prototype: PrototypeSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSection {
    pub amount: f64,
}

impl Default for PaymentSection {
    fn default() -> Self {
        Self { amount: 99.95 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingletonSection {
    pub connections: Vec<ConnectionConfig>,
}

impl Default for SingletonSection {
    fn default() -> Self {
        Self {
            connections: vec![
                ConnectionConfig::new("localhost", "admin"),
                ConnectionConfig::new("remote", "guest"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrototypeSection {
    pub title: String,
    pub content: String,
    pub edits: BTreeMap<String, String>,
}

impl Default for PrototypeSection {
    fn default() -> Self {
        let mut edits = BTreeMap::new();
        edits.insert("title".to_string(), "Quarterly Report (copy)".to_string());
        Self {
            title: "Quarterly Report".to_string(),
            content: "Revenue summary".to_string(),
            edits,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DemoConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.payment.amount, 99.95);
        assert_eq!(config.singleton.connections.len(), 2);
    }

    #[test]
    fn test_partial_sections() {
        let content = r#"
            [payment]
            amount = 10.0

            [singleton]
            connections = [{ host = "db1", user = "root" }]

            [prototype]
            title = "T"
            edits = { title = "T2", owner = "ops" }
        "#;
        let config = DemoConfig::from_toml(content, Path::new("demo.toml")).unwrap();

        assert_eq!(config.payment.amount, 10.0);
        assert_eq!(config.singleton.connections, vec![ConnectionConfig::new("db1", "root")]);
        assert_eq!(config.prototype.title, "T");
        assert_eq!(config.prototype.content, "Revenue summary");
        assert_eq!(config.prototype.edits.get("owner").map(String::as_str), Some("ops"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[payment]\namount = 42.5").unwrap();

        let config = DemoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.payment.amount, 42.5);
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::load(Some(Path::new("/nonexistent/demo.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = DemoConfig::from_toml("[payment\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(DemoConfig::load(None).unwrap(), DemoConfig::default());
    }
}
