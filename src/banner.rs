use atty::Stream;
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use crate::table::DynamicHashTable;

/// Баннер интерактивного режима.
pub const BANNER: &str = r#"
    dynhash {version}
    ----------------------------------------------
    Table:            {size} buckets, {key_length}-digit keys
    Policy:           {policy} expansion
    Build:            {git} ({build_time})
"#;

/// Подставляет в шаблон версию, параметры таблицы и данные сборки.
pub fn banner_text(table: &DynamicHashTable) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let build_time_raw = option_env!("BUILD_TIME").unwrap_or("unknown");
    let build_time = match DateTime::parse_from_rfc3339(build_time_raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%d.%m.%Y %H:%M:%S")
            .to_string(),
        Err(_) => build_time_raw.to_string(),
    };

    BANNER
        .replace("{version}", version)
        .replace("{size}", &table.table_size().to_string())
        .replace("{key_length}", &table.key_length().to_string())
        .replace("{policy}", table.policy().as_str())
        .replace("{git}", git)
        .replace("{build_time}", &build_time)
}

/// Печатает баннер; цвет только если stdout является терминалом.
pub fn print_banner(
    table: &DynamicHashTable,
    color: bool,
) {
    let text = banner_text(table);
    let color = color && atty::is(Stream::Stdout);

    for (i, line) in text.lines().enumerate() {
        if !color {
            println!("{line}");
        } else if i == 1 {
            println!("{}", line.bold().bright_blue());
        } else if line.trim_start().starts_with("Policy:") {
            println!("{}", line.cyan());
        } else if line.trim_start().starts_with("Build:") {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    println!("Type 'help' for the list of commands, 'quit' to exit.");
    println!();
}
