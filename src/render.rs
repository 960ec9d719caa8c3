//! Текстовое отображение ответов симулятора.

use std::fmt::{Display, Write as _};

use owo_colors::OwoColorize;

use crate::{
    command::HELP_TEXT,
    simulator::{Insertion, Reply},
    snapshot::TableSnapshot,
    table::ExpansionEvent,
};

/// Преобразует ответ в текст для терминала.
pub fn render(
    reply: &Reply,
    color: bool,
) -> String {
    match reply {
        Reply::Initialized {
            initial_size,
            key_length,
            policy,
        } => format!(
            "table initialized: {} buckets, {} digit keys, {} expansion",
            accent(initial_size, color),
            key_length,
            accent(policy, color)
        ),
        Reply::Inserted(rows) => rows
            .iter()
            .map(|row| render_insertion(row, color))
            .collect::<Vec<_>>()
            .join("\n"),
        Reply::Found {
            key,
            bucket: Some(idx),
        } => format!("{key} found in bucket {}", accent(idx, color)),
        Reply::Found { key, bucket: None } => format!("{key} not found"),
        Reply::Removed { key, removed: true } => format!("{key} removed"),
        Reply::Removed { key, removed: false } => format!("{key} not found"),
        Reply::Expanded(ev) => render_event(ev, color),
        Reply::Reset => "table reset to level 0".to_string(),
        Reply::Table(snapshot) => render_table(snapshot, color),
        Reply::History(events) => render_history(events, color),
        Reply::Stats(s) => format!(
            "elements: {}\nbuckets: {}\nempty buckets: {}\nlongest chain: {}\nload factor: {:.3}",
            s.elements, s.buckets, s.empty_buckets, s.longest_chain, s.load_factor
        ),
        Reply::Exported { path, format } => {
            format!("snapshot written to {} ({format:?})", path.display())
        }
        Reply::Imported {
            path,
            elements,
            level,
        } => format!(
            "snapshot {} loaded: {elements} elements, level {level}",
            path.display()
        ),
        Reply::Help => HELP_TEXT.to_string(),
    }
}

/// Заголовок и строки бакетов: `[idx] key key ...`.
pub fn render_table(
    snapshot: &TableSnapshot,
    color: bool,
) -> String {
    let mut out = String::new();
    let load = if snapshot.table_size == 0 {
        0.0
    } else {
        snapshot.element_count as f64 / snapshot.table_size as f64
    };

    let _ = writeln!(
        out,
        "policy: {} | level: {} | size: {} | elements: {} | load factor: {load:.2}",
        accent(snapshot.policy, color),
        snapshot.level,
        snapshot.table_size,
        snapshot.element_count,
    );

    let width = snapshot.table_size.saturating_sub(1).to_string().len();
    for (idx, keys) in snapshot.buckets.iter().enumerate() {
        let label = format!("[{idx:>width$}]");
        let label = if color {
            label.dimmed().to_string()
        } else {
            label
        };
        if keys.is_empty() {
            let _ = writeln!(out, "{label}");
        } else {
            let _ = writeln!(out, "{label} {}", keys.join(" "));
        }
    }

    out.trim_end().to_string()
}

pub fn render_history(
    events: &[ExpansionEvent],
    color: bool,
) -> String {
    if events.is_empty() {
        return "no expansions yet".to_string();
    }

    let mut out = String::from("level  old  new  trigger");
    for ev in events {
        let _ = write!(
            out,
            "\n{:>5} {:>4} {:>4}  {}",
            ev.level,
            ev.old_size,
            ev.new_size,
            trigger(ev, color)
        );
    }
    out
}

fn render_insertion(
    row: &Insertion,
    color: bool,
) -> String {
    let mut line = format!("{} -> bucket {}", row.key, accent(row.bucket, color));
    for ev in &row.expansions {
        let _ = write!(line, "\n  {}", render_event(ev, color));
    }
    line
}

fn render_event(
    ev: &ExpansionEvent,
    color: bool,
) -> String {
    format!(
        "expanded to level {}: {} -> {} buckets ({})",
        ev.level,
        ev.old_size,
        accent(ev.new_size, color),
        trigger(ev, color)
    )
}

fn trigger(
    ev: &ExpansionEvent,
    color: bool,
) -> String {
    let label = ev.trigger.label();
    if color {
        label.yellow().to_string()
    } else {
        label.to_string()
    }
}

fn accent<T: Display>(
    value: T,
    color: bool,
) -> String {
    if color {
        value.bold().cyan().to_string()
    } else {
        value.to_string()
    }
}
