use std::{fmt, str::FromStr};

use dynhash_error::TableError;
use serde::{Deserialize, Serialize};

/// Стратегия роста таблицы.
///
/// Размер таблицы на уровне `i` вычисляется только из начального размера
/// `N` и уровня, без учёта промежуточных округлений:
///
/// - `Total`: `N * 2^i`
/// - `Partial`: `floor(N * 1.5^i)`, считается как `N * 3^i / 2^i`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionPolicy {
    /// Полное расширение: удвоение на каждом уровне.
    #[default]
    #[serde(alias = "total_expansion")]
    Total,
    /// Частичное расширение: рост в 1.5 раза на каждом уровне.
    #[serde(alias = "partial_expansion")]
    Partial,
}

impl ExpansionPolicy {
    /// Размер таблицы для уровня `level`.
    ///
    /// Возвращает `None`, если размер не помещается в `usize`.
    pub fn size_for(
        self,
        initial_size: usize,
        level: u32,
    ) -> Option<usize> {
        let initial = initial_size as u128;
        let size = match self {
            Self::Total => initial.checked_mul(2u128.checked_pow(level)?)?,
            Self::Partial => {
                let numerator = initial.checked_mul(3u128.checked_pow(level)?)?;
                numerator / 2u128.checked_pow(level)?
            }
        };

        usize::try_from(size).ok()
    }

    /// Короткое имя стратегии (`total` / `partial`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for ExpansionPolicy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpansionPolicy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" | "total_expansion" | "t" => Ok(Self::Total),
            "partial" | "partial_expansion" | "p" => Ok(Self::Partial),
            other => Err(TableError::configuration(format!(
                "unknown expansion policy '{other}' (expected total or partial)"
            ))),
        }
    }
}
