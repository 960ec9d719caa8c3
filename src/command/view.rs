use super::CommandExecute;
use crate::{
    error::SimulatorResult,
    simulator::{Reply, Simulator},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCommand;

impl CommandExecute for ShowCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        Ok(Reply::Table(sim.snapshot()?))
    }

    fn command_name(&self) -> &'static str {
        "show"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCommand;

impl CommandExecute for HistoryCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        Ok(Reply::History(sim.table_ref()?.history().to_vec()))
    }

    fn command_name(&self) -> &'static str {
        "history"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCommand;

impl CommandExecute for StatsCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        Ok(Reply::Stats(sim.table_ref()?.stats()))
    }

    fn command_name(&self) -> &'static str {
        "stats"
    }
}

/// Справка доступна и без таблицы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl CommandExecute for HelpCommand {
    fn execute(
        &self,
        _sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        Ok(Reply::Help)
    }

    fn command_name(&self) -> &'static str {
        "help"
    }
}
