//! Команды симулятора.
//!
//! - `execute`: трейт выполнения, enum команд и разбор строки.
//! - `table`: команды, изменяющие таблицу (init, insert, remove, expand, ...).
//! - `view`: команды только для чтения (show, history, stats, help).
//! - `snapshot`: экспорт и импорт снимков.

pub mod execute;
pub mod snapshot;
pub mod table;
pub mod view;

// Публичный экспорт всех команд из вложенных модулей, чтобы упростить
// доступ к ним из внешнего кода.
pub use execute::*;
pub use snapshot::*;
pub use table::*;
pub use view::*;
