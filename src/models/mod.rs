mod employee;
mod organisation;
mod user;

pub use employee::*;
pub use organisation::*;
pub use user::*;

use serde::Serialize;

use crate::db::from_row::FromRow;

/// A record type persisted in one table with an integer primary key.
///
/// Column knowledge lives in explicit `match` arms on each implementor, so a
/// caller-supplied field name only ever reaches SQL after it has been mapped
/// onto a known `&'static str` column.
pub trait Entity: FromRow + Serialize {
    const TABLE: &'static str;
    /// Primary key column.
    const KEY: &'static str;
    /// SELECT/RETURNING column list, in `FromRow` order.
    const COLUMNS: &'static str;
    /// Columns bound by an insert, in order.
    const INSERT_COLUMNS: &'static [&'static str];
    /// Fields a create request must carry, checked in order.
    const REQUIRED: &'static [&'static str];
    /// Sentence subject used in conflict messages, e.g. "A user".
    const SUBJECT: &'static str;

    /// Any column of the table, keyed by field name.
    fn column(field: &str) -> Option<&'static str>;

    /// Columns an update may overwrite. Primary keys are never mutable.
    fn mutable_column(field: &str) -> Option<&'static str>;

    /// How a column is named to callers.
    fn field_label(column: &str) -> &str {
        column
    }

    fn conflict_message(column: &str) -> String {
        format!(
            "{} with this {} already exists.",
            Self::SUBJECT,
            Self::field_label(column)
        )
    }
}
