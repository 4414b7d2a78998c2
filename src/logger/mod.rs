mod logger;
mod value;

pub use logger::{CsvLogger, DEFAULT_DELIMITER, DEFAULT_NULL_STRING};
pub use value::Value;
