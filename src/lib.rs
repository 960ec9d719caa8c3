/// Startup banner for the interactive mode.
pub mod banner;
/// Simulator commands: parsing, dispatch and execution.
pub mod command;
/// Application settings loading.
pub mod config;
/// Simulator-level errors.
pub mod error;
/// Flexible logging (formatting, filters, sinks).
pub mod logging;
/// Terminal rendering of simulator replies.
pub mod render;
/// The simulator: owns the single live table and executes command lines.
pub mod simulator;
/// Table snapshots: capture, restore, delimited and JSON files.
pub mod snapshot;
/// Dynamic hash table with total and partial expansion.
pub mod table;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Simulator commands.
pub use command::{Command, CommandExecute};
/// config
pub use config::Settings;
/// Error types shared with the `dynhash-error` crate.
pub use dynhash_error::{ErrorExt, StatusCode, TableError, TableResult};
pub use error::{SimulatorError, SimulatorResult};
/// Logging initialization.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Simulator and its replies.
pub use simulator::{Insertion, Reply, Simulator};
/// Snapshots.
pub use snapshot::{SnapshotFormat, TableSnapshot};
/// Core table types.
pub use table::{
    Bucket, DynamicHashTable, ExpansionEvent, ExpansionPolicy, ExpansionTrigger, Key, TableStats,
    LOAD_FACTOR_THRESHOLD, MAX_KEY_LENGTH, MIN_INITIAL_SIZE,
};
