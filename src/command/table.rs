use tracing::warn;

use super::CommandExecute;
use crate::{
    error::SimulatorResult,
    simulator::{Insertion, Reply, Simulator},
    table::{DynamicHashTable, ExpansionPolicy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitCommand {
    pub initial_size: usize,
    pub key_length: usize,
    pub policy: ExpansionPolicy,
}

impl CommandExecute for InitCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        let table = DynamicHashTable::new(self.initial_size, self.key_length, self.policy)?;
        sim.replace(table);
        Ok(Reply::Initialized {
            initial_size: self.initial_size,
            key_length: self.key_length,
            policy: self.policy,
        })
    }

    fn command_name(&self) -> &'static str {
        "init"
    }
}

/// Вставка одного или нескольких ключей.
///
/// Каждая вставка атомарна. При ошибке на очередном ключе уже вставленные
/// ключи остаются в таблице, а остальные не обрабатываются.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertCommand {
    pub keys: Vec<String>,
}

impl CommandExecute for InsertCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        let table = sim.table_mut()?;
        let mut inserted = Vec::with_capacity(self.keys.len());

        for key in &self.keys {
            let before = table.history().len();
            let bucket = table.insert(key).inspect_err(|e| {
                warn!(key = %key, error = %e, done = inserted.len(), "insert rejected");
            })?;
            inserted.push(Insertion {
                key: key.clone(),
                bucket,
                expansions: table.history()[before..].to_vec(),
            });
        }

        Ok(Reply::Inserted(inserted))
    }

    fn command_name(&self) -> &'static str {
        "insert"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    pub key: String,
}

impl CommandExecute for SearchCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        let bucket = sim.table_ref()?.search(&self.key);
        Ok(Reply::Found {
            key: self.key.clone(),
            bucket,
        })
    }

    fn command_name(&self) -> &'static str {
        "search"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCommand {
    pub key: String,
}

impl CommandExecute for RemoveCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        let removed = sim.table_mut()?.remove(&self.key);
        Ok(Reply::Removed {
            key: self.key.clone(),
            removed,
        })
    }

    fn command_name(&self) -> &'static str {
        "remove"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandCommand;

impl CommandExecute for ExpandCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        Ok(Reply::Expanded(sim.table_mut()?.force_expansion()))
    }

    fn command_name(&self) -> &'static str {
        "expand"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetCommand;

impl CommandExecute for ResetCommand {
    fn execute(
        &self,
        sim: &mut Simulator,
    ) -> SimulatorResult<Reply> {
        sim.table_mut()?.reset();
        Ok(Reply::Reset)
    }

    fn command_name(&self) -> &'static str {
        "reset"
    }
}
