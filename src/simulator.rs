//! Управляющая поверхность симулятора.
//!
//! [`Simulator`] владеет единственным экземпляром таблицы. Команда `init`
//! (или `import`) полностью заменяет предыдущий экземпляр.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    command::{Command, CommandExecute},
    error::{SimulatorError, SimulatorResult},
    snapshot::{SnapshotFormat, TableSnapshot},
    table::{DynamicHashTable, ExpansionEvent, ExpansionPolicy, TableStats},
};

/// Результат одной вставки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub key: String,
    /// Бакет ключа после всех вызванных вставкой расширений.
    pub bucket: usize,
    /// Расширения, вызванные этой вставкой.
    pub expansions: Vec<ExpansionEvent>,
}

/// Ответ на команду, готовый к отображению.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reply", content = "data", rename_all = "snake_case")]
pub enum Reply {
    Initialized {
        initial_size: usize,
        key_length: usize,
        policy: ExpansionPolicy,
    },
    Inserted(Vec<Insertion>),
    Found {
        key: String,
        bucket: Option<usize>,
    },
    Removed {
        key: String,
        removed: bool,
    },
    Expanded(ExpansionEvent),
    Reset,
    Table(TableSnapshot),
    History(Vec<ExpansionEvent>),
    Stats(TableStats),
    Exported {
        path: PathBuf,
        format: SnapshotFormat,
    },
    Imported {
        path: PathBuf,
        elements: usize,
        level: u32,
    },
    Help,
}

#[derive(Debug, Default)]
pub struct Simulator {
    table: Option<DynamicHashTable>,
}

impl Simulator {
    /// Симулятор без таблицы: первой командой должна быть `init` или
    /// `import`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: DynamicHashTable) -> Self {
        Self { table: Some(table) }
    }

    pub fn table(&self) -> Option<&DynamicHashTable> {
        self.table.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.table.is_some()
    }

    /// Таблица или [`SimulatorError::NotInitialized`].
    pub fn table_ref(&self) -> SimulatorResult<&DynamicHashTable> {
        self.table.as_ref().ok_or(SimulatorError::NotInitialized)
    }

    pub fn table_mut(&mut self) -> SimulatorResult<&mut DynamicHashTable> {
        self.table.as_mut().ok_or(SimulatorError::NotInitialized)
    }

    /// Заменяет текущую таблицу новой.
    pub fn replace(
        &mut self,
        table: DynamicHashTable,
    ) {
        info!(
            initial_size = table.initial_size(),
            key_length = table.key_length(),
            policy = %table.policy(),
            "table replaced"
        );
        self.table = Some(table);
    }

    /// Разбирает и выполняет одну строку.
    ///
    /// Пустые строки и комментарии (`#`) дают `Ok(None)`.
    pub fn execute_line(
        &mut self,
        line: &str,
    ) -> SimulatorResult<Option<Reply>> {
        let Some(command) = Command::parse(line)? else {
            return Ok(None);
        };
        debug!(command = command.command_name(), "execute");
        command.execute(self).map(Some)
    }

    /// Текущее состояние как снимок (для отображения).
    pub fn snapshot(&self) -> SimulatorResult<TableSnapshot> {
        Ok(TableSnapshot::capture(self.table_ref()?))
    }
}
