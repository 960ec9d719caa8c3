pub mod ext;
pub mod status_code;
pub mod types;

// Реэкспорт всех типов ошибок, чтобы зависимые крейты импортировали их
// прямо из корня `dynhash_error`.
pub use ext::*;
pub use status_code::*;
pub use types::*;

pub type TableResult<T> = Result<T, TableError>;
