use std::{fmt, str::FromStr};

use dynhash_error::TableError;
use serde::{Deserialize, Serialize};

/// Источник расширения таблицы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionTrigger {
    /// Коэффициент заполнения превысил порог после вставки.
    Automatic,
    /// Расширение запрошено пользователем.
    Forced,
}

/// Запись об одном переходе между уровнями.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionEvent {
    /// Уровень после расширения.
    pub level: u32,
    pub old_size: usize,
    pub new_size: usize,
    pub trigger: ExpansionTrigger,
}

impl ExpansionTrigger {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic (load factor)",
            Self::Forced => "forced by user",
        }
    }
}

impl ExpansionEvent {
    /// `true`, если расширение не увеличило таблицу (размер следующего
    /// уровня непредставим).
    pub fn is_noop(&self) -> bool {
        self.new_size == self.old_size
    }
}

impl fmt::Display for ExpansionTrigger {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpansionTrigger {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "automatic (load factor)" | "automatic" => Ok(Self::Automatic),
            "forced by user" | "forced" => Ok(Self::Forced),
            other => Err(TableError::corrupted(format!(
                "unknown expansion trigger '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ExpansionEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "level {}: {} -> {} buckets ({})",
            self.level, self.old_size, self.new_size, self.trigger
        )
    }
}
