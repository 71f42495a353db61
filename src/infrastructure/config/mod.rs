// ============================================================
// CONFIGURATION
// ============================================================
// Defaults <- optional TOML file <- CSV_DEDUP_* environment variables

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Input read when nothing overrides it.
pub const DEFAULT_INPUT_PATH: &str = "Dinesafe.csv";

/// Output consumed by the serverless lookup function.
pub const DEFAULT_OUTPUT_PATH: &str = "../netlify/functions/name_to_id.json";

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CONFIG_FILE: &str = "csv-dedup.toml";
pub const ENV_PREFIX: &str = "CSV_DEDUP_";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(deserialize_with = "path_from_scalar")]
    pub input_path: PathBuf,
    #[serde(deserialize_with = "path_from_scalar")]
    pub output_path: PathBuf,
    pub delimiter: char,
    pub log_level: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: DEFAULT_DELIMITER,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("input_path cannot be empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("output_path cannot be empty".to_string()));
        }
        self.delimiter_byte()?;
        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::ConfigError(format!(
                "unsupported log level `{}`; expected trace|debug|info|warn|error|off",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(AppError::ConfigError(format!(
                "unsupported delimiter {:?}; expected a single ASCII character other than quote or newline",
                self.delimiter
            )));
        }
        Ok(self.delimiter as u8)
    }
}

/// Environment values are typed by figment, so `CSV_DEDUP_INPUT_PATH=2024`
/// arrives as a number; accept any scalar and keep its text form.
fn path_from_scalar<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Boolean(bool),
    }

    let path = match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Boolean(b) => b.to_string(),
    };
    Ok(PathBuf::from(path))
}

pub struct ConfigService {
    config_file: PathBuf,
    env_prefix: String,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = path.as_ref().to_path_buf();
        self
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(&self.env_prefix))
    }

    pub fn load(&self) -> Result<ConverterConfig> {
        let config: ConverterConfig = self.figment().extract()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_overrides() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config, ConverterConfig::default());
            assert_eq!(config.input_path, PathBuf::from("Dinesafe.csv"));
            assert_eq!(
                config.output_path,
                PathBuf::from("../netlify/functions/name_to_id.json")
            );
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "csv-dedup.toml",
                r#"
                    input_path = "from_file.csv"
                    output_path = "from_file.json"
                    delimiter = ";"
                "#,
            )?;
            jail.set_env("CSV_DEDUP_OUTPUT_PATH", "from_env.json");

            let config = ConfigService::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config.input_path, PathBuf::from("from_file.csv"));
            assert_eq!(config.output_path, PathBuf::from("from_env.json"));
            assert_eq!(config.delimiter, ';');
            assert_eq!(config.delimiter_byte().map_err(|e| e.to_string())?, b';');
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_paths_load_as_text() {
        Jail::expect_with(|jail| {
            jail.set_env("CSV_DEDUP_INPUT_PATH", "2024");
            jail.set_env("CSV_DEDUP_OUTPUT_PATH", "-1");

            let config = ConfigService::new().load().map_err(|e| e.to_string())?;
            assert_eq!(config.input_path, PathBuf::from("2024"));
            assert_eq!(config.output_path, PathBuf::from("-1"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CSV_DEDUP_LOG_LEVEL", "loud");

            let err = ConfigService::new().load().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let quote = ConverterConfig {
            delimiter: '"',
            ..Default::default()
        };
        assert!(quote.validate().is_err());
        assert!(quote.delimiter_byte().is_err());

        let non_ascii = ConverterConfig {
            delimiter: 'é',
            ..Default::default()
        };
        assert!(matches!(
            non_ascii.delimiter_byte(),
            Err(AppError::ConfigError(_))
        ));

        let empty = ConverterConfig {
            input_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let upper = ConverterConfig {
            log_level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(upper.validate().is_ok());
    }
}
