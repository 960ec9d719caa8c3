use std::path::PathBuf;

use super::CommandExecute;
use crate::{
    error::SimulatorResult,
    simulator::{Reply, Simulator},
    snapshot::{SnapshotFormat, TableSnapshot},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    pub path: PathBuf,
    pub format: SnapshotFormat,
}

impl CommandExecute for ExportCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        sim.snapshot()?.save(&self.path, self.format)?;
        Ok(Reply::Exported {
            path: self.path.clone(),
            format: self.format,
        })
    }

    fn command_name(&self) -> &'static str {
        "export"
    }
}

/// Импорт снимка заменяет текущую таблицу только при успешной проверке.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    pub path: PathBuf,
}

impl CommandExecute for ImportCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        let table = TableSnapshot::load(&self.path)?.restore()?;
        let reply = Reply::Imported {
            path: self.path.clone(),
            elements: table.len(),
            level: table.level(),
        };
        sim.replace(table);
        Ok(reply)
    }

    fn command_name(&self) -> &'static str {
        "import"
    }
}
