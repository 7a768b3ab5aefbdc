//! Row mapping trait and helpers for reducing boilerplate in queries.

use rusqlite::{Connection, OptionalExtension, Row, ToSql};

use crate::models::{Employee, Organisation, User};

/// Trait for constructing a type from a database row.
///
/// Column order follows the implementor's `Entity::COLUMNS`.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Query for a single optional result.
pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Option<T>> {
    conn.query_row(sql, params, T::from_row)
        .optional()
        .map_err(Into::into)
}

/// Query for multiple results.
pub fn query_all<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

impl FromRow for Organisation {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Organisation {
            code: row.get(0)?,
            org_name: row.get(1)?,
            details: row.get(2)?,
        })
    }
}

impl FromRow for Employee {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get(0)?,
            fname: row.get(1)?,
            lname: row.get(2)?,
            email: row.get(3)?,
            address: row.get(4)?,
            org_code: row.get(5)?,
        })
    }
}

impl FromRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            fname: row.get(1)?,
            lname: row.get(2)?,
            email: row.get(3)?,
            gender: row.get(4)?,
            contact_info: row.get(5)?,
            address: row.get(6)?,
            mobile_no: row.get(7)?,
        })
    }
}
