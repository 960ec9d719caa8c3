use std::{env, fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Формат вывода логов.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
///
/// Консольный вывод идёт в stderr, чтобы не смешиваться с ответами
/// симулятора в stdout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Уровень логов крейта (trace/debug/info/warn/error)
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_true")]
    pub console_enabled: bool,
    /// ANSI-цвета в консольном выводе
    #[serde(default = "default_true")]
    pub with_ansi: bool,
    #[serde(default)]
    pub with_target: bool,
    /// Дублировать логи в файл с ежедневной ротацией
    #[serde(default)]
    pub file_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            console_enabled: true,
            with_ansi: true,
            with_target: false,
            file_enabled: false,
            log_dir: default_log_dir(),
            file_name: default_file_name(),
        }
    }
}

impl LoggingConfig {
    /// Переменные окружения `DYNHASH_LOG_LEVEL` и `DYNHASH_LOG_FORMAT`
    /// перекрывают значения из конфигурации.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("DYNHASH_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("DYNHASH_LOG_FORMAT") {
            if let Ok(format) = format.parse() {
                self.format = format;
            }
        }
    }

    /// Проверяет, что уровень задан корректной директивой.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(self.build_filter_directive())
            .map(|_| ())
            .map_err(|e| format!("invalid log level '{}': {e}", self.level))?;

        if self.file_enabled && self.file_name.trim().is_empty() {
            return Err("log file name must not be empty".to_string());
        }
        Ok(())
    }

    /// Директива фильтра: зависимости на `warn`, крейт на `level`.
    pub fn build_filter_directive(&self) -> String {
        format!("warn,dynhash={}", self.level.trim())
    }

    pub fn ensure_log_dir(&self) -> std::io::Result<()> {
        if self.file_enabled {
            std::fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_file_name() -> String {
    "dynhash.log".to_string()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "warn");
        assert_eq!(cfg.format, LogFormat::Compact);
        assert!(cfg.console_enabled);
        assert!(!cfg.file_enabled);
        assert_eq!(cfg.build_filter_directive(), "warn,dynhash=warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage_level() {
        let cfg = LoggingConfig {
            level: "loud!!".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    /// Тест проверяет приоритет переменных окружения над конфигурацией.
    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("DYNHASH_LOG_LEVEL", "debug");
        env::set_var("DYNHASH_LOG_FORMAT", "json");

        let mut cfg = LoggingConfig::default();
        cfg.apply_env_overrides();

        env::remove_var("DYNHASH_LOG_LEVEL");
        env::remove_var("DYNHASH_LOG_FORMAT");

        assert_eq!(cfg.level, "debug");
        assert_eq!(cfg.format, LogFormat::Json);
    }

    #[test]
    fn test_format_parse_and_display() {
        for f in [LogFormat::Compact, LogFormat::Pretty, LogFormat::Json] {
            assert_eq!(f.to_string().parse::<LogFormat>().unwrap(), f);
        }
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
