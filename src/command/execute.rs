//! Абстракция и диспетчеризация команд симулятора.
//!
//! Содержит трейт [`CommandExecute`] для унифицированного выполнения команд и
//! enum [`Command`], инкапсулирующий все поддерживаемые команды, а также
//! разбор текстовой строки в команду.

use std::path::PathBuf;

use super::{
    ExpandCommand, ExportCommand, HelpCommand, HistoryCommand, ImportCommand, InitCommand,
    InsertCommand, RemoveCommand, ResetCommand, SearchCommand, ShowCommand, StatsCommand,
};
use crate::{
    error::{SimulatorError, SimulatorResult},
    simulator::{Reply, Simulator},
    snapshot::SnapshotFormat,
    table::ExpansionPolicy,
};

pub trait CommandExecute: std::fmt::Debug {
    /// Выполняет команду над симулятором.
    ///
    /// # Возвращает
    /// - `Ok(Reply)` — результат для отображения.
    /// - `Err(SimulatorError)` — ошибка разбора, отсутствие таблицы или
    ///   ошибка таблицы. Состояние таблицы при этом не меняется.
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply>;

    /// Имя команды для логирования.
    fn command_name(&self) -> &'static str {
        "unknown"
    }
}

/// Перечисление всех поддерживаемых команд.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init(InitCommand),
    Insert(InsertCommand),
    Search(SearchCommand),
    Remove(RemoveCommand),
    Expand(ExpandCommand),
    Reset(ResetCommand),
    Show(ShowCommand),
    History(HistoryCommand),
    Stats(StatsCommand),
    Export(ExportCommand),
    Import(ImportCommand),
    Help(HelpCommand),
}

/// Краткая справка по командам.
pub const HELP_TEXT: &str = "\
init <size> <key_len> <total|partial>   create a new table (inicializar)
insert <key> [key...]                   insert keys (insertar)
search <key>                            find the bucket of a key (buscar)
remove <key>                            remove a key (eliminar)
expand                                  force one expansion step (expandir)
reset                                   clear the table, keep its configuration
show                                    print all buckets (mostrar)
history                                 print the expansion log (historial)
stats                                   print occupancy statistics
export <path> [csv|json]                save a snapshot (exportar)
import <path>                           load a snapshot (importar)
help                                    this message";

////////////////////////////////////////////////////////////////////////////////
// Разбор
////////////////////////////////////////////////////////////////////////////////

impl Command {
    /// Разбирает строку в команду.
    ///
    /// Пустая строка и комментарий (`#...`) дают `Ok(None)`. Имя команды
    /// нечувствительно к регистру, поддерживаются испанские синонимы.
    pub fn parse(line: &str) -> SimulatorResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match name.as_str() {
            "init" | "inicializar" => {
                let [size, key_len, policy] = exact::<3>(&name, &args)?;
                Command::Init(InitCommand {
                    initial_size: number(size, "initial size")?,
                    key_length: number(key_len, "key length")?,
                    policy: policy.parse::<ExpansionPolicy>()?,
                })
            }
            "insert" | "insertar" | "add" => {
                if args.is_empty() {
                    return Err(usage(&name, "at least one key"));
                }
                Command::Insert(InsertCommand {
                    keys: args.iter().map(|k| k.to_string()).collect(),
                })
            }
            "search" | "buscar" | "find" => {
                let [key] = exact::<1>(&name, &args)?;
                Command::Search(SearchCommand {
                    key: key.to_string(),
                })
            }
            "remove" | "eliminar" | "delete" | "del" => {
                let [key] = exact::<1>(&name, &args)?;
                Command::Remove(RemoveCommand {
                    key: key.to_string(),
                })
            }
            "expand" | "expandir" => {
                exact::<0>(&name, &args)?;
                Command::Expand(ExpandCommand)
            }
            "reset" | "reiniciar" => {
                exact::<0>(&name, &args)?;
                Command::Reset(ResetCommand)
            }
            "show" | "mostrar" => {
                exact::<0>(&name, &args)?;
                Command::Show(ShowCommand)
            }
            "history" | "historial" => {
                exact::<0>(&name, &args)?;
                Command::History(HistoryCommand)
            }
            "stats" => {
                exact::<0>(&name, &args)?;
                Command::Stats(StatsCommand)
            }
            "export" | "exportar" => {
                let (path, format) = match args.as_slice() {
                    [path] => {
                        let path = PathBuf::from(path);
                        let format = SnapshotFormat::from_path(&path);
                        (path, format)
                    }
                    [path, format] => (PathBuf::from(path), parse_format(format)?),
                    _ => return Err(usage(&name, "<path> [csv|json]")),
                };
                Command::Export(ExportCommand { path, format })
            }
            "import" | "importar" => {
                let [path] = exact::<1>(&name, &args)?;
                Command::Import(ImportCommand {
                    path: PathBuf::from(path),
                })
            }
            "help" | "ayuda" | "?" => Command::Help(HelpCommand),
            _ => return Err(SimulatorError::UnknownCommand(name)),
        };

        Ok(Some(command))
    }
}

fn exact<'a, const N: usize>(
    name: &str,
    args: &[&'a str],
) -> SimulatorResult<[&'a str; N]> {
    <[&str; N]>::try_from(args)
        .map_err(|_| usage(name, &format!("exactly {N} argument(s), got {}", args.len())))
}

fn usage(
    name: &str,
    expected: &str,
) -> SimulatorError {
    SimulatorError::Parse(format!("'{name}' expects {expected}"))
}

fn number(
    arg: &str,
    what: &str,
) -> SimulatorResult<usize> {
    arg.parse()
        .map_err(|_| SimulatorError::Parse(format!("invalid {what} '{arg}'")))
}

fn parse_format(arg: &str) -> SimulatorResult<SnapshotFormat> {
    match arg.to_ascii_lowercase().as_str() {
        "csv" | "txt" | "delimited" => Ok(SnapshotFormat::Delimited),
        "json" => Ok(SnapshotFormat::Json),
        other => Err(SimulatorError::Parse(format!(
            "unknown snapshot format '{other}' (expected csv or json)"
        ))),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Диспетчеризация
////////////////////////////////////////////////////////////////////////////////

impl CommandExecute for Command {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        match self {
            Command::Init(cmd) => cmd.execute(sim),
            Command::Insert(cmd) => cmd.execute(sim),
            Command::Search(cmd) => cmd.execute(sim),
            Command::Remove(cmd) => cmd.execute(sim),
            Command::Expand(cmd) => cmd.execute(sim),
            Command::Reset(cmd) => cmd.execute(sim),
            Command::Show(cmd) => cmd.execute(sim),
            Command::History(cmd) => cmd.execute(sim),
            Command::Stats(cmd) => cmd.execute(sim),
            Command::Export(cmd) => cmd.execute(sim),
            Command::Import(cmd) => cmd.execute(sim),
            Command::Help(cmd) => cmd.execute(sim),
        }
    }

    fn command_name(&self) -> &'static str {
        match self {
            Command::Init(cmd) => cmd.command_name(),
            Command::Insert(cmd) => cmd.command_name(),
            Command::Search(cmd) => cmd.command_name(),
            Command::Remove(cmd) => cmd.command_name(),
            Command::Expand(cmd) => cmd.command_name(),
            Command::Reset(cmd) => cmd.command_name(),
            Command::Show(cmd) => cmd.command_name(),
            Command::History(cmd) => cmd.command_name(),
            Command::Stats(cmd) => cmd.command_name(),
            Command::Export(cmd) => cmd.command_name(),
            Command::Import(cmd) => cmd.command_name(),
            Command::Help(cmd) => cmd.command_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_init() {
        assert_eq!(
            parse("init 4 2 total"),
            Command::Init(InitCommand {
                initial_size: 4,
                key_length: 2,
                policy: ExpansionPolicy::Total,
            })
        );
        assert_eq!(
            parse("Inicializar 5 3 PARTIAL"),
            Command::Init(InitCommand {
                initial_size: 5,
                key_length: 3,
                policy: ExpansionPolicy::Partial,
            })
        );
    }

    #[test]
    fn test_parse_insert_many() {
        assert_eq!(
            parse("insert 01   02 03"),
            Command::Insert(InsertCommand {
                keys: vec!["01".into(), "02".into(), "03".into()],
            })
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse("buscar 07").command_name(), "search");
        assert_eq!(parse("eliminar 07").command_name(), "remove");
        assert_eq!(parse("EXPAND").command_name(), "expand");
        assert_eq!(parse("historial").command_name(), "history");
        assert_eq!(parse("?").command_name(), "help");
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!(
            parse("export out.json"),
            Command::Export(ExportCommand {
                path: "out.json".into(),
                format: SnapshotFormat::Json,
            })
        );
        assert_eq!(
            parse("export out.dat csv"),
            Command::Export(ExportCommand {
                path: "out.dat".into(),
                format: SnapshotFormat::Delimited,
            })
        );
        assert!(Command::parse("export out.dat yaml").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("fly away"),
            Err(SimulatorError::UnknownCommand(name)) if name == "fly"
        ));
        assert!(matches!(Command::parse("init 4 2"), Err(SimulatorError::Parse(_))));
        assert!(matches!(
            Command::parse("init four 2 total"),
            Err(SimulatorError::Parse(_))
        ));
        assert!(matches!(
            Command::parse("init 4 2 linear"),
            Err(SimulatorError::Table(_))
        ));
        assert!(matches!(Command::parse("insert"), Err(SimulatorError::Parse(_))));
        assert!(matches!(Command::parse("search"), Err(SimulatorError::Parse(_))));
        assert!(matches!(Command::parse("reset now"), Err(SimulatorError::Parse(_))));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("  # note").unwrap(), None);
    }
}
