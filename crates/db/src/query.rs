//! Verbatim execution of caller-supplied SQL.
//!
//! Raw query mode trusts the caller completely: the statement text runs
//! as-is, with no parameterization or filtering. Callers are trusted
//! operator scripts on the far side of the deployment boundary; revisit that
//! assumption before adding any allow-listing here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{json, Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error::DbError;
use crate::session::DbSession;

/// Execute `sql` verbatim and serialize every result row as a JSON object
/// keyed by column name. Statements that return no rows (or no result set
/// at all) produce an empty array.
pub async fn run_raw(session: &mut DbSession, sql: &str) -> Result<Vec<Value>, DbError> {
    let rows = sqlx::query(sql)
        .fetch_all(session)
        .await
        .map_err(DbError::Execution)?;

    rows.iter()
        .map(row_to_json)
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(DbError::Execution)
}

/// Convert one MySQL row into a JSON object, column by column.
fn row_to_json(row: &MySqlRow) -> Result<Value, sqlx::Error> {
    let mut object = Map::new();
    for column in row.columns() {
        let value = column_to_json(row, column.ordinal(), column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }
    Ok(Value::Object(object))
}

/// Decode a single column into its closest JSON representation.
///
/// Numbers stay numbers, NULL stays null, temporal types use their canonical
/// text form, and binary payloads fall back to lossy UTF-8.
fn column_to_json(row: &MySqlRow, idx: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(idx)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "BOOLEAN" => json!(row.try_get::<bool, _>(idx)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            json!(row.try_get::<i64, _>(idx)?)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => json!(row.try_get::<u64, _>(idx)?),
        "FLOAT" => json!(row.try_get::<f32, _>(idx)?),
        "DOUBLE" => json!(row.try_get::<f64, _>(idx)?),
        "DATE" => json!(row.try_get::<NaiveDate, _>(idx)?.to_string()),
        "TIME" => json!(row.try_get::<NaiveTime, _>(idx)?.to_string()),
        "DATETIME" => json!(row.try_get::<NaiveDateTime, _>(idx)?.to_string()),
        "TIMESTAMP" => json!(row.try_get::<DateTime<Utc>, _>(idx)?.to_rfc3339()),
        "JSON" => row.try_get::<Value, _>(idx)?,
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            json!(String::from_utf8_lossy(row.try_get::<&[u8], _>(idx)?))
        }
        // CHAR, VARCHAR, TEXT, ENUM, DECIMAL and anything else with a text
        // form; unknown binary-ish types fall back to lossy UTF-8.
        _ => match row.try_get::<String, _>(idx) {
            Ok(text) => json!(text),
            Err(_) => json!(String::from_utf8_lossy(row.try_get::<&[u8], _>(idx)?)),
        },
    };

    Ok(value)
}
