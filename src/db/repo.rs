//! Generic CRUD over `Entity` tables.
//!
//! Each write runs in its own IMMEDIATE transaction, so the write lock is taken
//! before the existence check reads the row. On failure the transaction is
//! dropped without commit, which rolls it back, and the store error is
//! translated into the `AppError` the handlers report.

use rusqlite::{
    Connection, ErrorCode, OptionalExtension, ToSql, Transaction, TransactionBehavior, ffi,
    params_from_iter, types::Value,
};
use serde_json::Value as JsonValue;

use super::from_row::{FromRow, query_all, query_one};
use crate::error::{AppError, Result};
use crate::models::Entity;
use crate::validation::Record;

/// Builder for dynamic UPDATE statements over allow-listed columns.
struct UpdateBuilder {
    table: &'static str,
    key_column: &'static str,
    key: i64,
    fields: Vec<(&'static str, Value)>,
}

impl UpdateBuilder {
    fn new(table: &'static str, key_column: &'static str, key: i64) -> Self {
        Self {
            table,
            key_column,
            key,
            fields: Vec::new(),
        }
    }

    fn set(mut self, column: &'static str, value: Value) -> Self {
        self.fields.push((column, value));
        self
    }

    fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Execute the update and return the row through a RETURNING clause.
    fn execute_returning<T: FromRow>(
        self,
        conn: &Connection,
        returning_cols: &str,
    ) -> rusqlite::Result<Option<T>> {
        let sets: Vec<String> = self
            .fields
            .iter()
            .map(|(col, _)| format!("{} = ?", col))
            .collect();
        let mut values: Vec<Value> = self.fields.into_iter().map(|(_, v)| v).collect();
        values.push(Value::Integer(self.key));
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
            self.table,
            sets.join(", "),
            self.key_column,
            returning_cols
        );
        conn.query_row(&sql, params_from_iter(values), T::from_row)
            .optional()
    }
}

/// Insert a row built from the record's insertable fields.
///
/// Absent fields are bound as NULL; the store decides whether that is allowed.
/// Returns the persisted row, generated key included.
pub fn insert<E: Entity>(conn: &mut Connection, record: &Record) -> Result<E> {
    let values = E::INSERT_COLUMNS
        .iter()
        .map(|column| sql_value(column, record.get(*column)))
        .collect::<Result<Vec<_>>>()?;
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        E::INSERT_COLUMNS.join(", "),
        vec!["?"; values.len()].join(", "),
        E::COLUMNS
    );

    let tx = write_transaction(conn)?;
    let row = tx
        .query_row(&sql, params_from_iter(values), E::from_row)
        .map_err(translate::<E>)?;
    tx.commit()?;
    Ok(row)
}

pub fn fetch_all<E: Entity>(conn: &Connection) -> Result<Vec<E>> {
    query_all(
        conn,
        &format!("SELECT {} FROM {} ORDER BY {}", E::COLUMNS, E::TABLE, E::KEY),
        &[],
    )
}

pub fn fetch_by_key<E: Entity>(conn: &Connection, key: i64) -> Result<Option<E>> {
    query_one(
        conn,
        &format!("SELECT {} FROM {} WHERE {} = ?1", E::COLUMNS, E::TABLE, E::KEY),
        &[&key],
    )
}

/// All rows whose `field` equals `value`, ordered by key.
pub fn fetch_by_field<E: Entity>(
    conn: &Connection,
    field: &str,
    value: &dyn ToSql,
) -> Result<Vec<E>> {
    query_all(conn, &filter_sql::<E>(field, "")?, &[value])
}

/// First row (lowest key) whose `field` equals `value`.
pub fn fetch_first_by_field<E: Entity>(
    conn: &Connection,
    field: &str,
    value: &dyn ToSql,
) -> Result<Option<E>> {
    query_one(conn, &filter_sql::<E>(field, " LIMIT 1")?, &[value])
}

fn filter_sql<E: Entity>(field: &str, suffix: &str) -> Result<String> {
    let column = E::column(field).ok_or_else(|| {
        AppError::Internal(format!("unknown field '{}' for {}", field, E::TABLE))
    })?;
    Ok(format!(
        "SELECT {} FROM {} WHERE {} = ?1 ORDER BY {}{}",
        E::COLUMNS,
        E::TABLE,
        column,
        E::KEY,
        suffix
    ))
}

/// Overwrite the mutable fields present in `record`; unknown names are ignored.
///
/// Returns `None` when no row has `key`, leaving the store untouched.
pub fn update<E: Entity>(conn: &mut Connection, key: i64, record: &Record) -> Result<Option<E>> {
    let mut builder = UpdateBuilder::new(E::TABLE, E::KEY, key);
    for (field, value) in record {
        if let Some(column) = E::mutable_column(field) {
            builder = builder.set(column, sql_value(column, Some(value))?);
        }
    }
    apply(conn, key, builder)
}

/// Overwrite every mutable column; fields missing from `record` become NULL.
pub fn replace<E: Entity>(conn: &mut Connection, key: i64, record: &Record) -> Result<Option<E>> {
    let mut builder = UpdateBuilder::new(E::TABLE, E::KEY, key);
    for column in E::INSERT_COLUMNS.iter().filter_map(|c| E::mutable_column(c)) {
        builder = builder.set(column, sql_value(column, record.get(column))?);
    }
    apply(conn, key, builder)
}

fn apply<E: Entity>(conn: &mut Connection, key: i64, builder: UpdateBuilder) -> Result<Option<E>> {
    let tx = write_transaction(conn)?;
    let Some(current) = fetch_by_key::<E>(&tx, key)? else {
        return Ok(None);
    };
    if builder.is_empty() {
        return Ok(Some(current));
    }

    let updated = builder
        .execute_returning::<E>(&tx, E::COLUMNS)
        .map_err(translate::<E>)?
        .unwrap_or(current);
    tx.commit()?;
    Ok(Some(updated))
}

/// Delete the row with `key`. Returns false when there was none.
pub fn delete<E: Entity>(conn: &mut Connection, key: i64) -> Result<bool> {
    let tx = write_transaction(conn)?;
    if fetch_by_key::<E>(&tx, key)?.is_none() {
        return Ok(false);
    }

    tx.execute(
        &format!("DELETE FROM {} WHERE {} = ?1", E::TABLE, E::KEY),
        [key],
    )
    .map_err(translate::<E>)?;
    tx.commit()?;
    Ok(true)
}

fn write_transaction(conn: &mut Connection) -> Result<Transaction<'_>> {
    Ok(conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
}

/// Bind a JSON scalar for `column`. Nested values are rejected.
fn sql_value(column: &str, value: Option<&JsonValue>) -> Result<Value> {
    Ok(match value {
        None | Some(JsonValue::Null) => Value::Null,
        Some(JsonValue::Bool(b)) => Value::Integer(i64::from(*b)),
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Real),
        },
        Some(JsonValue::String(s)) => Value::Text(s.clone()),
        Some(JsonValue::Array(_) | JsonValue::Object(_)) => {
            return Err(AppError::BadRequest(format!(
                "The field '{}' must be a scalar value.",
                column
            )));
        }
    })
}

/// Map a failed write onto the error taxonomy.
///
/// Unique and primary-key violations become `Conflict` naming the column from
/// the constraint detail; foreign-key and NOT NULL violations become
/// `Integrity`. Everything else stays a raw database error.
fn translate<E: Entity>(err: rusqlite::Error) -> AppError {
    if let rusqlite::Error::SqliteFailure(failure, detail) = &err
        && failure.code == ErrorCode::ConstraintViolation
    {
        let detail = detail.as_deref().unwrap_or_default();
        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                return match violated_column(detail) {
                    Some(column) => AppError::Conflict(E::conflict_message(column)),
                    None => AppError::Integrity(detail.to_string()),
                };
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY | ffi::SQLITE_CONSTRAINT_NOTNULL => {
                return AppError::Integrity(detail.to_string());
            }
            _ => {}
        }
    }
    AppError::Database(err)
}

/// Column named by a constraint detail such as
/// `UNIQUE constraint failed: users.mobile_no`.
fn violated_column(detail: &str) -> Option<&str> {
    let (_, target) = detail.split_once("failed: ")?;
    let first = target.split(", ").next()?;
    first.rsplit('.').next().filter(|c| !c.is_empty())
}
