mod table;
mod value;

pub use table::{Row, Table};
pub use value::{ColumnType, Value, NA_TOKENS};

pub(crate) use value::{is_na_token, parse_number};
