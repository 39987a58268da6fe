use assert_matches::assert_matches;
use serde_json::json;
use sqlx::MySqlPool;

use apilog_db::query::run_raw;
use apilog_db::schema::ensure_log_table;
use apilog_db::DbError;

/// `SELECT 1 AS x` comes back as exactly `[{"x":1}]` -- no wrapping, no
/// field renaming.
#[sqlx::test]
async fn test_select_literal_round_trips(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let rows = run_raw(&mut conn, "SELECT 1 AS x").await.unwrap();
    assert_eq!(rows, vec![json!({"x": 1})]);
}

/// Strings and NULLs keep their JSON identity.
#[sqlx::test]
async fn test_strings_and_nulls_serialize_faithfully(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let rows = run_raw(&mut conn, "SELECT 'hello' AS greeting, NULL AS missing")
        .await
        .unwrap();
    assert_eq!(rows, vec![json!({"greeting": "hello", "missing": null})]);
}

/// Reading the log table through raw query mode returns its rows unwrapped.
#[sqlx::test]
async fn test_reads_log_table_rows(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_log_table(&mut conn).await.unwrap();

    sqlx::query(
        "INSERT INTO api_logs (request_id, path, method, ip_address, user_agent) \
         VALUES ('r1', '/a', 'POST', '1.2.3.4', 'script')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    let rows = run_raw(
        &mut conn,
        "SELECT request_id, method FROM api_logs ORDER BY id",
    )
    .await
    .unwrap();
    assert_eq!(rows, vec![json!({"request_id": "r1", "method": "POST"})]);
}

/// A statement without a result set yields an empty array, not an error.
#[sqlx::test]
async fn test_non_select_statement_yields_empty_array(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_log_table(&mut conn).await.unwrap();

    let rows = run_raw(
        &mut conn,
        "INSERT INTO api_logs (request_id, path, method, ip_address, user_agent) \
         VALUES ('r2', '/b', 'GET', '0.0.0.0', 'script')",
    )
    .await
    .unwrap();
    assert!(rows.is_empty());
}

/// Malformed SQL surfaces as an execution error, never a panic.
#[sqlx::test]
async fn test_malformed_sql_is_an_execution_error(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let err = run_raw(&mut conn, "SELEKT 1").await.unwrap_err();
    assert_matches!(err, DbError::Execution(_));
    assert!(!err.details().is_empty());
}

/// The empty statement (a query event that carried no SQL) fails at the
/// database, matching the observed system.
#[sqlx::test]
async fn test_empty_statement_is_an_execution_error(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let err = run_raw(&mut conn, "").await.unwrap_err();
    assert_matches!(err, DbError::Execution(_));
}
