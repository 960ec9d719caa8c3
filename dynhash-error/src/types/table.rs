use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки динамической хеш-таблицы.
///
/// Все ошибки локальны для операции, которая их вернула: таблица остаётся в
/// том же состоянии, что и до вызова.
#[derive(Debug, Error)]
pub enum TableError {
    /// Неверные параметры конструктора (размер, длина ключа).
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// Ключ не соответствует объявленной длине или содержит не-цифры.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Ключ уже присутствует в таблице.
    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String },

    /// Снимок таблицы нарушает инварианты и не может быть восстановлен.
    #[error("corrupted snapshot: {reason}")]
    CorruptedSnapshot { reason: String },

    /// Ошибка сериализации снимка.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Файл снимка не разбирается как JSON.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl TableError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn invalid_key(
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn corrupted(reason: impl Into<String>) -> Self {
        Self::CorruptedSnapshot {
            reason: reason.into(),
        }
    }

    /// Возвращает `true`, если после ошибки можно повторить операцию с
    /// исправленными данными (ключ неверен или уже существует).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidKey { .. } | Self::DuplicateKey { .. })
    }
}

impl ErrorExt for TableError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration { .. } => StatusCode::InvalidArgs,
            Self::InvalidKey { .. } => StatusCode::InvalidKey,
            Self::DuplicateKey { .. } => StatusCode::AlreadyExists,
            Self::CorruptedSnapshot { .. } => StatusCode::CorruptedData,
            Self::Serialization(_) => StatusCode::SerializationFailed,
            Self::Deserialization(_) => StatusCode::DeserializationFailed,
            Self::Io(_) => StatusCode::Io,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
