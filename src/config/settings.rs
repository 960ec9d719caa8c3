use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use dynhash_error::TableResult;
use serde::{Deserialize, Serialize};

use crate::{
    logging::LoggingConfig,
    table::{DynamicHashTable, ExpansionPolicy},
};

/// Имя файла конфигурации, который ищется в текущем каталоге.
pub const DEFAULT_CONFIG_NAME: &str = "dynhash";

/// Настройки приложения.
///
/// Источники (в порядке приоритета, последний выигрывает):
/// 1. значения по умолчанию;
/// 2. файл `dynhash.toml` (или явно переданный путь);
/// 3. переменные окружения `DYNHASH_*`, вложенные поля через `__`
///    (`DYNHASH_LOGGING__LEVEL=debug`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Начальное число бакетов для новой таблицы
    pub initial_size: usize,
    /// Число цифр в ключе
    pub key_length: usize,
    pub policy: ExpansionPolicy,
    /// Файл истории REPL; `None` отключает историю
    pub history_file: Option<PathBuf>,
    /// Цветной вывод в терминал
    pub color: bool,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_size: 4,
            key_length: 2,
            policy: ExpansionPolicy::Total,
            history_file: Some(PathBuf::from(".dynhash_history")),
            color: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Загружает настройки.
    ///
    /// Явно переданный файл обязателен; `dynhash.toml` в текущем каталоге
    /// опционален.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("initial_size", defaults.initial_size as u64)?
            .set_default("key_length", defaults.key_length as u64)?
            .set_default("policy", defaults.policy.as_str())?
            .set_default("color", defaults.color)?
            .add_source(file)
            // Переменные окружения с префиксом DYNHASH_
            .add_source(
                Environment::with_prefix("DYNHASH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    /// Новая пустая таблица по этим настройкам.
    pub fn build_table(&self) -> TableResult<DynamicHashTable> {
        DynamicHashTable::new(self.initial_size, self.key_length, self.policy)
    }
}
