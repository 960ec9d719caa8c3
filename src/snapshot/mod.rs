//! Снимки состояния таблицы: экспорт и импорт.
//!
//! Снимок строится только из публичных read-only аксессоров таблицы и
//! содержит конфигурацию, содержимое каждого бакета и журнал расширений.
//! Поддерживаются два формата файла: текстовый с разделителем `;`
//! (см. [`delimited`]) и JSON.

pub mod delimited;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use dynhash_error::{TableError, TableResult};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::table::{DynamicHashTable, ExpansionEvent, ExpansionPolicy, Key};

/// Наибольшее число бакетов, которое допускает импорт снимка.
///
/// Размер из заголовка проверяется до выделения памяти, поэтому
/// испорченный файл не может заставить выделить произвольный объём.
pub const MAX_SNAPSHOT_BUCKETS: usize = 1 << 22;

/// Формат файла снимка.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// Текст с разделителем `;`.
    #[default]
    Delimited,
    Json,
}

/// Полное описание таблицы, достаточное для её восстановления.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub initial_size: usize,
    pub key_length: usize,
    pub policy: ExpansionPolicy,
    pub level: u32,
    pub table_size: usize,
    pub element_count: usize,
    /// Ключи каждого бакета в порядке вставки.
    pub buckets: Vec<Vec<String>>,
    pub history: Vec<ExpansionEvent>,
    /// Время экспорта (RFC 3339), заполняется при сохранении в файл.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SnapshotFormat {
    /// Формат по расширению файла: `.json` -> JSON, иначе текст.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Delimited,
        }
    }
}

impl TableSnapshot {
    /// Снимает текущее состояние таблицы.
    pub fn capture(table: &DynamicHashTable) -> Self {
        Self {
            initial_size: table.initial_size(),
            key_length: table.key_length(),
            policy: table.policy(),
            level: table.level(),
            table_size: table.table_size(),
            element_count: table.len(),
            buckets: table
                .buckets()
                .map(|b| b.iter().map(|k| k.as_str().to_string()).collect())
                .collect(),
            history: table.history().to_vec(),
            exported_at: None,
        }
    }

    /// Восстанавливает таблицу, проверяя все инварианты снимка.
    pub fn restore(self) -> TableResult<DynamicHashTable> {
        check_bucket_limit(self.initial_size.max(self.table_size))?;
        if self.table_size != self.buckets.len() {
            return Err(TableError::corrupted(format!(
                "declared table size {} but {} buckets listed",
                self.table_size,
                self.buckets.len()
            )));
        }

        let listed: usize = self.buckets.iter().map(Vec::len).sum();
        if listed != self.element_count {
            return Err(TableError::corrupted(format!(
                "declared {} elements but {listed} listed",
                self.element_count
            )));
        }

        DynamicHashTable::from_parts(
            self.initial_size,
            self.key_length,
            self.policy,
            self.level,
            self.buckets,
            self.history,
        )
    }

    pub fn to_json(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TableError::Serialization(e.to_string()))
    }

    pub fn from_json(text: &str) -> TableResult<Self> {
        serde_json::from_str(text).map_err(|e| TableError::Deserialization(e.to_string()))
    }

    pub fn to_delimited(&self) -> String {
        delimited::write(self)
    }

    pub fn from_delimited(text: &str) -> TableResult<Self> {
        delimited::parse(text)
    }

    /// Сохраняет снимок в файл.
    ///
    /// Запись атомарна: данные пишутся во временный файл рядом с целевым,
    /// который затем переименовывается.
    pub fn save(
        &self,
        path: &Path,
        format: SnapshotFormat,
    ) -> TableResult<()> {
        let mut stamped = self.clone();
        stamped.exported_at = Some(chrono::Utc::now().to_rfc3339());

        let body = match format {
            SnapshotFormat::Delimited => stamped.to_delimited(),
            SnapshotFormat::Json => stamped.to_json()?,
        };

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(body.as_bytes())?;
        temp.flush()?;
        temp.persist(path).map_err(|e| TableError::Io(e.error))?;

        info!(
            path = %path.display(),
            ?format,
            elements = self.element_count,
            level = self.level,
            "snapshot saved"
        );
        Ok(())
    }

    /// Загружает снимок, выбирая формат по расширению файла.
    pub fn load(path: &Path) -> TableResult<Self> {
        let text = fs::read_to_string(path)?;
        let snapshot = match SnapshotFormat::from_path(path) {
            SnapshotFormat::Json => Self::from_json(&text)?,
            SnapshotFormat::Delimited => Self::from_delimited(&text)?,
        };

        info!(path = %path.display(), level = snapshot.level, "snapshot loaded");
        Ok(snapshot)
    }
}

impl DynamicHashTable {
    /// Снимок текущего состояния.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }

    /// Восстанавливает таблицу из снимка.
    pub fn from_snapshot(snapshot: TableSnapshot) -> TableResult<Self> {
        snapshot.restore()
    }
}

impl From<&DynamicHashTable> for TableSnapshot {
    fn from(table: &DynamicHashTable) -> Self {
        Self::capture(table)
    }
}

/// Ключи снимка в порядке бакетов, удобно для сравнения состава таблиц.
pub fn snapshot_keys(snapshot: &TableSnapshot) -> Vec<&str> {
    snapshot
        .buckets
        .iter()
        .flat_map(|b| b.iter().map(String::as_str))
        .collect()
}

/// Проверка, что ключ снимка корректен для его длины.
pub(crate) fn validate_key(
    text: &str,
    key_length: usize,
) -> TableResult<()> {
    Key::parse(text, key_length)
        .map(|_| ())
        .map_err(|e| TableError::corrupted(e.to_string()))
}

/// Отказ, если таблица такого размера не может быть импортирована.
pub(crate) fn check_bucket_limit(buckets: usize) -> TableResult<()> {
    if buckets > MAX_SNAPSHOT_BUCKETS {
        return Err(TableError::corrupted(format!(
            "{buckets} buckets exceed the bucket limit of {MAX_SNAPSHOT_BUCKETS}"
        )));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
