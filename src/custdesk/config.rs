use crate::error::Result;
use config::{Config, Environment, File, Source};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "custdesk";
const ENV_PREFIX: &str = "CUSTDESK";
const DEFAULT_LOG_LEVEL: &str = "WARN";

/// Startup configuration.
///
/// Read once from an optional `custdesk.toml` in the working directory, then
/// from `CUSTDESK_*` environment variables, which win:
///
/// - `CUSTDESK_DATABASE_URI`: connection string (`memory://` or `file://<path>`), required
/// - `CUSTDESK_LOGGER_LEVEL`: `TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`, also
///   accepted lowercase or capitalized
#[derive(Clone, Debug, Deserialize)]
pub struct CrmConfig {
    pub database: Database,
    pub logger: Logger,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Database {
    pub uri: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub enum Level {
    #[serde(alias = "trace", alias = "Trace")]
    TRACE,
    #[serde(alias = "debug", alias = "Debug")]
    DEBUG,
    #[serde(alias = "info", alias = "Info")]
    INFO,
    #[serde(alias = "warn", alias = "Warn")]
    WARN,
    #[serde(alias = "error", alias = "Error")]
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

impl CrmConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(
            File::with_name(CONFIG_FILENAME).required(false),
            Environment::with_prefix(ENV_PREFIX).separator("_"),
        )
    }

    fn load_from<F>(file: F, env: Environment) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .set_default("logger.level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<CrmConfig>()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrmError;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .separator("_")
            .source(Some(map))
    }

    fn missing_file(temp: &TempDir) -> impl Source + Send + Sync + 'static {
        File::from(temp.path().join("custdesk.toml")).required(false)
    }

    #[test]
    fn reads_uri_from_environment() {
        let temp = TempDir::new().unwrap();
        let config = CrmConfig::load_from(
            missing_file(&temp),
            env(&[("CUSTDESK_DATABASE_URI", "memory://")]),
        )
        .unwrap();
        assert_eq!(config.database.uri, "memory://");
        assert_eq!(config.logger.level, Level::WARN);
    }

    #[test]
    fn missing_uri_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = CrmConfig::load_from(missing_file(&temp), env(&[])).unwrap_err();
        assert!(matches!(err, CrmError::Config(_)));
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custdesk.toml");
        fs::write(
            &path,
            "[database]\nuri = \"file://customers.json\"\n\n[logger]\nlevel = \"DEBUG\"\n",
        )
        .unwrap();

        let from_file = CrmConfig::load_from(File::from(path.clone()), env(&[])).unwrap();
        assert_eq!(from_file.database.uri, "file://customers.json");
        assert_eq!(from_file.logger.level, Level::DEBUG);

        let overridden = CrmConfig::load_from(
            File::from(path),
            env(&[("CUSTDESK_DATABASE_URI", "memory://")]),
        )
        .unwrap();
        assert_eq!(overridden.database.uri, "memory://");
    }

    #[test]
    fn log_level_accepts_common_casings() {
        let temp = TempDir::new().unwrap();
        let cases = [
            ("info", Level::INFO),
            ("Debug", Level::DEBUG),
            ("ERROR", Level::ERROR),
        ];
        for (raw, expected) in cases {
            let config = CrmConfig::load_from(
                missing_file(&temp),
                env(&[
                    ("CUSTDESK_DATABASE_URI", "memory://"),
                    ("CUSTDESK_LOGGER_LEVEL", raw),
                ]),
            )
            .unwrap();
            assert_eq!(config.logger.level, expected, "{raw}");
        }
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = CrmConfig::load_from(
            missing_file(&temp),
            env(&[
                ("CUSTDESK_DATABASE_URI", "memory://"),
                ("CUSTDESK_LOGGER_LEVEL", "verbose"),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, CrmError::Config(_)));
    }

    #[test]
    fn maps_levels_to_tracing() {
        assert_eq!(tracing::Level::from(&Level::INFO), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(&Level::ERROR), tracing::Level::ERROR);
    }
}
