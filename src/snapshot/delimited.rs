//! Текстовый формат снимка с разделителем `;`.
//!
//! Одна запись на строку:
//!
//! ```text
//! config;<initial_size>;<key_length>;<policy>;<level>;<table_size>;<element_count>
//! exported;<rfc3339>
//! bucket;<idx>;<key>|<key>|...
//! event;<level>;<old_size>;<new_size>;<trigger>
//! ```
//!
//! Пустые строки и строки, начинающиеся с `#`, пропускаются. Строка
//! `config` обязательна и должна идти первой. Бакеты, для которых нет
//! строки `bucket`, считаются пустыми.

use std::{fmt::Write as _, str::FromStr};

use dynhash_error::{TableError, TableResult};

use super::{validate_key, TableSnapshot, MAX_SNAPSHOT_BUCKETS};
use crate::table::{ExpansionEvent, ExpansionPolicy, ExpansionTrigger};

const SEP: char = ';';
const KEY_SEP: char = '|';

/// Сериализует снимок в текст.
pub fn write(snapshot: &TableSnapshot) -> String {
    let mut out = String::new();

    out.push_str("# dynhash table snapshot\n");
    let _ = writeln!(
        out,
        "config;{};{};{};{};{};{}",
        snapshot.initial_size,
        snapshot.key_length,
        snapshot.policy,
        snapshot.level,
        snapshot.table_size,
        snapshot.element_count
    );
    if let Some(ts) = &snapshot.exported_at {
        let _ = writeln!(out, "exported;{ts}");
    }
    for (idx, keys) in snapshot.buckets.iter().enumerate() {
        let _ = writeln!(out, "bucket;{idx};{}", keys.join("|"));
    }
    for ev in &snapshot.history {
        let _ = writeln!(
            out,
            "event;{};{};{};{}",
            ev.level, ev.old_size, ev.new_size, ev.trigger
        );
    }

    out
}

/// Разбирает текст снимка.
///
/// Проверяются только синтаксис и формат ключей; инварианты таблицы
/// проверяет [`TableSnapshot::restore`].
pub fn parse(text: &str) -> TableResult<TableSnapshot> {
    let mut snapshot: Option<TableSnapshot> = None;
    let mut seen_buckets: Vec<bool> = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(SEP).collect();
        let at = |msg: String| TableError::corrupted(format!("line {}: {msg}", lineno + 1));

        match (fields[0], snapshot.as_mut()) {
            ("config", None) => {
                expect_fields(&fields, 7).map_err(at)?;
                let initial_size: usize = number(fields[1], "initial size").map_err(at)?;
                let policy =
                    ExpansionPolicy::from_str(fields[3]).map_err(|e| at(e.to_string()))?;
                let level: u32 = number(fields[4], "level").map_err(at)?;
                let table_size: usize = number(fields[5], "table size").map_err(at)?;
                if policy.size_for(initial_size, level) != Some(table_size) {
                    return Err(at(format!(
                        "table size {table_size} does not match level {level} of {policy} table"
                    )));
                }
                // Размер растёт с уровнем, так что initial_size <= table_size
                if table_size > MAX_SNAPSHOT_BUCKETS {
                    return Err(at(format!(
                        "{table_size} buckets exceed the bucket limit of {MAX_SNAPSHOT_BUCKETS}"
                    )));
                }

                seen_buckets = vec![false; table_size];
                snapshot = Some(TableSnapshot {
                    initial_size,
                    key_length: number(fields[2], "key length").map_err(at)?,
                    policy,
                    level,
                    table_size,
                    element_count: number(fields[6], "element count").map_err(at)?,
                    buckets: vec![Vec::new(); table_size],
                    history: Vec::new(),
                    exported_at: None,
                });
            }
            ("config", Some(_)) => return Err(at("duplicate config record".into())),
            (_, None) => return Err(at("config record must come first".into())),
            ("exported", Some(s)) => {
                expect_fields(&fields, 2).map_err(at)?;
                s.exported_at = Some(fields[1].to_string());
            }
            ("bucket", Some(s)) => {
                expect_fields(&fields, 3).map_err(at)?;
                let idx: usize = number(fields[1], "bucket index").map_err(at)?;
                match seen_buckets.get_mut(idx) {
                    Some(seen) if *seen => {
                        return Err(at(format!("bucket {idx} listed twice")));
                    }
                    Some(seen) => *seen = true,
                    None => {
                        return Err(at(format!(
                            "bucket {idx} out of range for {} buckets",
                            s.table_size
                        )));
                    }
                }

                if !fields[2].is_empty() {
                    for key in fields[2].split(KEY_SEP) {
                        validate_key(key, s.key_length)?;
                        s.buckets[idx].push(key.to_string());
                    }
                }
            }
            ("event", Some(s)) => {
                expect_fields(&fields, 5).map_err(at)?;
                s.history.push(ExpansionEvent {
                    level: number(fields[1], "event level").map_err(at)?,
                    old_size: number(fields[2], "old size").map_err(at)?,
                    new_size: number(fields[3], "new size").map_err(at)?,
                    trigger: ExpansionTrigger::from_str(fields[4])
                        .map_err(|e| at(e.to_string()))?,
                });
            }
            (other, Some(_)) => return Err(at(format!("unknown record type '{other}'"))),
        }
    }

    snapshot.ok_or_else(|| TableError::corrupted("missing config record"))
}

fn expect_fields(
    fields: &[&str],
    count: usize,
) -> Result<(), String> {
    if fields.len() == count {
        Ok(())
    } else {
        Err(format!(
            "'{}' record needs {count} fields, got {}",
            fields[0],
            fields.len()
        ))
    }
}

fn number<T: FromStr>(
    field: &str,
    what: &str,
) -> Result<T, String> {
    field
        .trim()
        .parse()
        .map_err(|_| format!("invalid {what} '{field}'"))
}
