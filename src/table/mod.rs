pub mod bucket;
pub mod event;
pub mod key;
pub mod policy;
pub mod table_base;

// Publicly re-export all types from the submodules to simplify access from
// external code.
pub use bucket::Bucket;
pub use event::{ExpansionEvent, ExpansionTrigger};
pub use key::{Key, MAX_KEY_LENGTH};
pub use policy::ExpansionPolicy;
pub use table_base::{DynamicHashTable, TableStats, LOAD_FACTOR_THRESHOLD, MIN_INITIAL_SIZE};
