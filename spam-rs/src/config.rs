//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};
use crate::tokenizer::{HeaderSkip, Tokenizer};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Corpus layout
    #[serde(default)]
    pub data: DataConfig,
    /// Tokenizer settings
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Result output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Location of the training and test message directories
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Base directory, always ending with '/'
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Spam training set, relative to `base_dir`
    #[serde(default = "default_spam_dir")]
    pub spam_dir: String,
    /// Ham training set, relative to `base_dir`
    #[serde(default = "default_ham_dir")]
    pub ham_dir: String,
    /// Unlabeled test set, relative to `base_dir`
    #[serde(default = "default_test_dir")]
    pub test_dir: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub header_skip: HeaderSkip,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How predictions are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<filename> <label>` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

fn default_base_dir() -> String {
    "./data/".to_string()
}

fn default_spam_dir() -> String {
    "train/spam".to_string()
}

fn default_ham_dir() -> String {
    "train/ham".to_string()
}

fn default_test_dir() -> String {
    "test".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            spam_dir: default_spam_dir(),
            ham_dir: default_ham_dir(),
            test_dir: default_test_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DataConfig {
    /// Override the base directory, appending a trailing '/' when missing
    pub fn set_base_dir(&mut self, base_dir: &str) -> Result<()> {
        if base_dir.is_empty() {
            return Err(SpamError::Config("Data directory must not be empty".to_string()));
        }

        self.base_dir = if base_dir.ends_with('/') {
            base_dir.to_string()
        } else {
            format!("{}/", base_dir)
        };
        Ok(())
    }

    pub fn spam_path(&self) -> PathBuf {
        Path::new(&self.base_dir).join(&self.spam_dir)
    }

    pub fn ham_path(&self) -> PathBuf {
        Path::new(&self.base_dir).join(&self.ham_dir)
    }

    pub fn test_path(&self) -> PathBuf {
        Path::new(&self.base_dir).join(&self.test_dir)
    }
}

impl TokenizerConfig {
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.header_skip)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpamError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        let base_dir = config.data.base_dir.clone();
        config.data.set_base_dir(&base_dir)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let subdirs = [
            ("spam_dir", &self.data.spam_dir),
            ("ham_dir", &self.data.ham_dir),
            ("test_dir", &self.data.test_dir),
        ];

        for (name, dir) in subdirs {
            if dir.is_empty() {
                return Err(SpamError::Config(format!("data.{} must not be empty", name)));
            }
            if Path::new(dir).is_absolute() {
                return Err(SpamError::Config(format!(
                    "data.{} must be relative to data.base_dir, got {}",
                    name, dir
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data.spam_path(), PathBuf::from("./data/train/spam"));
        assert_eq!(config.data.ham_path(), PathBuf::from("./data/train/ham"));
        assert_eq!(config.data.test_path(), PathBuf::from("./data/test"));
        assert_eq!(
            config.tokenizer.header_skip,
            HeaderSkip::Chars { count: 9 }
        );
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_base_dir_trailing_slash() {
        let mut data = DataConfig::default();

        data.set_base_dir("/srv/corpus").unwrap();
        assert_eq!(data.base_dir, "/srv/corpus/");

        data.set_base_dir("/srv/other/").unwrap();
        assert_eq!(data.base_dir, "/srv/other/");
        assert_eq!(data.test_path(), PathBuf::from("/srv/other/test"));

        assert!(data.set_base_dir("").is_err());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[data]
base_dir = "/var/lib/corpus"
test_dir = "holdout"

[tokenizer]
header_skip = { mode = "first_line" }

[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.data.base_dir, "/var/lib/corpus");
        assert_eq!(config.data.spam_dir, "train/spam");
        assert_eq!(config.data.test_dir, "holdout");
        assert_eq!(config.tokenizer.header_skip, HeaderSkip::FirstLine);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_char_skip() {
        let toml = r#"
[tokenizer]
header_skip = { mode = "chars", count = 4 }
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tokenizer.header_skip, HeaderSkip::Chars { count: 4 });
    }

    #[test]
    fn test_from_file_normalizes_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam-rs.toml");
        std::fs::write(&path, "[data]\nbase_dir = \"corpus\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data.base_dir, "corpus/");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/spam-rs.toml").unwrap_err();
        assert!(matches!(err, SpamError::Config(_)));
    }

    #[test]
    fn test_absolute_subdir_rejected() {
        let mut config = Config::default();
        config.data.ham_dir = "/etc".to_string();
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));
    }
}
