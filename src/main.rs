//! CLI симулятора динамической хеш-таблицы.
//!
//! Режимы: интерактивный (REPL), одиночная команда и выполнение файла
//! команд. Таблица создаётся по настройкам (`dynhash.toml`, переменные
//! `DYNHASH_*`, флаги командной строки).

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dynhash::{
    banner, init_logging, render::render, ErrorExt, ExpansionPolicy, Reply, Settings,
    SimulatorError, Simulator,
};
use owo_colors::OwoColorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, warn};

/// Аргументы командной строки.
#[derive(Parser, Debug)]
#[command(name = "dynhash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dynamic hash table simulator with total and partial expansion", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Путь к файлу настроек
    #[arg(
        short,
        long,
        global = true,
        env = "DYNHASH_CONFIG",
        help = "Settings file (defaults to ./dynhash.toml if present)"
    )]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Log level for dynhash (trace, debug, info, warn, error)")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Disable coloured output")]
    no_color: bool,
    /// Формат вывода ответов
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "pretty",
        help = "Reply output format"
    )]
    output: OutputFormat,
    #[arg(long, global = true, help = "Initial number of buckets")]
    size: Option<usize>,
    #[arg(long, global = true, help = "Number of digits per key")]
    key_length: Option<usize>,
    #[arg(long, global = true, help = "Expansion policy: total or partial")]
    policy: Option<ExpansionPolicy>,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Формат вывода ответов.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Человекочитаемый текст
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Интерактивный режим (REPL)
    #[command(alias = "i")]
    Repl {
        #[arg(long, help = "Command history file (overrides settings)")]
        history: Option<PathBuf>,
        #[arg(long, help = "Do not print the startup banner")]
        no_banner: bool,
    },
    /// Выполнить одну команду над новой таблицей и выйти
    #[command(alias = "e")]
    Exec {
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Command to run (e.g. 'insert 01 05')"
        )]
        args: Vec<String>,
    },
    /// Выполнить команды из файла, по одной на строку
    Script {
        file: PathBuf,
        #[arg(long, help = "Continue after a failing command")]
        keep_going: bool,
    },
}

impl Cli {
    /// Флаги командной строки перекрывают настройки.
    fn apply(
        &self,
        settings: &mut Settings,
    ) {
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
        if self.no_color {
            settings.color = false;
            settings.logging.with_ansi = false;
        }
        if let Some(size) = self.size {
            settings.initial_size = size;
        }
        if let Some(key_length) = self.key_length {
            settings.key_length = key_length;
        }
        if let Some(policy) = self.policy {
            settings.policy = policy;
        }
        if let Some(Commands::Repl {
            history: Some(path),
            ..
        }) = &self.command
        {
            settings.history_file = Some(path.clone());
        }
    }
}

/// Параметры вывода, общие для всех режимов.
#[derive(Debug, Clone, Copy)]
struct Output {
    format: OutputFormat,
    color: bool,
}

impl Output {
    fn reply(
        &self,
        reply: &Reply,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Pretty => println!("{}", render(reply, self.color)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(reply).context("failed to encode reply")?
            ),
        }
        Ok(())
    }

    fn error(
        &self,
        err: &SimulatorError,
    ) {
        let message = format!("error [{}]: {}", err.status_code(), err.client_message());
        if self.color {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{message}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply(&mut settings);

    let logging = init_logging(settings.logging.clone())
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let table = settings.build_table().context("invalid table settings")?;
    debug!(?settings, "settings loaded");

    let mut sim = Simulator::with_table(table);
    let out = Output {
        format: cli.output,
        color: settings.color,
    };

    let result = match &cli.command {
        None => run_repl(&mut sim, settings.history_file.as_deref(), out, true),
        Some(Commands::Repl { no_banner, .. }) => {
            run_repl(&mut sim, settings.history_file.as_deref(), out, !no_banner)
        }
        Some(Commands::Exec { args }) => run_exec(&mut sim, &args.join(" "), out),
        Some(Commands::Script { file, keep_going }) => {
            let text = fs::read_to_string(file)
                .with_context(|| format!("failed to read script {}", file.display()))?;
            run_script(&mut sim, &text, *keep_going, out)
        }
    };

    logging.shutdown();
    result
}

fn run_exec(
    sim: &mut Simulator,
    line: &str,
    out: Output,
) -> Result<()> {
    match sim.execute_line(line) {
        Ok(Some(reply)) => out.reply(&reply),
        Ok(None) => Ok(()),
        Err(e) => {
            out.error(&e);
            Err(e.into())
        }
    }
}

/// Выполняет строки скрипта по порядку.
///
/// Без `keep_going` останавливается на первой ошибке; иначе выполняет все
/// строки и возвращает ошибку с числом неудачных команд.
fn run_script(
    sim: &mut Simulator,
    text: &str,
    keep_going: bool,
    out: Output,
) -> Result<()> {
    let mut failed = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        match sim.execute_line(line) {
            Ok(Some(reply)) => out.reply(&reply)?,
            Ok(None) => {}
            Err(e) => {
                out.error(&e);
                if !keep_going {
                    return Err(e).with_context(|| format!("line {}: '{}'", lineno + 1, line.trim()));
                }
                warn!(line = lineno + 1, error = %e, "script command failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} command(s) failed");
    }
    Ok(())
}

fn run_repl(
    sim: &mut Simulator,
    history: Option<&Path>,
    out: Output,
    show_banner: bool,
) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    if let Some(path) = history {
        // Отсутствующий файл истории при первом запуске не ошибка
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), error = %e, "history not loaded");
        }
    }

    if show_banner {
        if let Some(table) = sim.table() {
            banner::print_banner(table, out.color);
        }
    }

    loop {
        match editor.readline("dynhash> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if matches!(line, "quit" | "exit" | "salir") {
                    break;
                }
                match sim.execute_line(line) {
                    Ok(Some(reply)) => out.reply(&reply)?,
                    Ok(None) => {}
                    Err(e) => out.error(&e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        }
    }

    if let Some(path) = history {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}
