use media_nfo_models::KodiVersion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub nfo: NfoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How NFO files are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NfoConfig {
    /// Kodi generation used when `convert` gets no `--to`
    #[serde(default)]
    pub kodi_version: KodiVersion,
    /// Spaces per nesting level
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_true")]
    pub xml_declaration: bool,
}

impl Default for NfoConfig {
    fn default() -> Self {
        Self {
            kodi_version: KodiVersion::default(),
            indent: default_indent(),
            xml_declaration: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json_logging")]
    pub json: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json_logging(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_indent() -> usize {
    3 // Kodi's own writer indents with three spaces
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json_logging() -> bool {
    use std::io::IsTerminal;
    !std::io::stdout().is_terminal()
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=8).contains(&self.nfo.indent) {
            return Err(anyhow::anyhow!(
                "nfo.indent must be between 1 and 8, got {}",
                self.nfo.indent
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!("Invalid logging.level: {}", self.logging.level));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            nfo: NfoConfig {
                kodi_version: KodiVersion::V16,
                indent: 4,
                xml_declaration: false,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                json: true,
                file: Some(PathBuf::from("/tmp/nfotool.log")),
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("kodi_version = \"v16\""));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[nfo]\nkodi_version = \"v17\"\n").unwrap();
        assert_eq!(config.nfo.kodi_version, KodiVersion::V17);
        assert_eq!(config.nfo.indent, 3);
        assert!(config.nfo.xml_declaration);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.nfo, NfoConfig::default());
        assert_eq!(empty.nfo.kodi_version, KodiVersion::V18);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let config = Config::load_or_default(&missing).unwrap();
        assert_eq!(config.nfo, NfoConfig::default());

        std::fs::write(&missing, "not = [valid").unwrap();
        assert!(Config::load_or_default(&missing).is_err());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.nfo.indent = 0;
        assert!(config.validate().is_err());
        config.nfo.indent = 9;
        assert!(config.validate().is_err());
        config.nfo.indent = 8;
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }
}
