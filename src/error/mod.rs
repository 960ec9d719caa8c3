use std::any::Any;

use dynhash_error::{ErrorExt, StatusCode, TableError};
use thiserror::Error;

pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Ошибки уровня симулятора: разбор команд и работа без таблицы.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("table is not initialized, run 'init <size> <key_len> <total|partial>' first")]
    NotInitialized,

    #[error(transparent)]
    Table(#[from] TableError),
}

impl ErrorExt for SimulatorError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Parse(_) => StatusCode::ParseError,
            Self::UnknownCommand(_) => StatusCode::InvalidCommand,
            Self::NotInitialized => StatusCode::InvalidOperation,
            Self::Table(e) => e.status_code(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
