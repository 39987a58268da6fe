//! Session-release coverage for the full invocation paths.
//!
//! Every test here gets its own throwaway database, so process-list counts
//! scoped to that database (`processlist.db`) see only this test's
//! sessions: the probe connection doing the counting, and whatever the
//! handler opens.

use std::time::Duration;

use serde_json::{json, Value};
use sqlx::mysql::MySqlConnection;
use sqlx::MySqlPool;

use apilog_api::handler::handle_event;
use apilog_core::event::InvocationEvent;
use apilog_core::response::FAILURE_MESSAGE;
use apilog_db::DbConfig;

/// Build a `DbConfig` from the `DATABASE_URL` the test suite runs against,
/// pointed at the given database.
fn config_from_env(database: &str) -> DbConfig {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for db tests");
    let rest = url
        .strip_prefix("mysql://")
        .or_else(|| url.strip_prefix("mariadb://"))
        .expect("DATABASE_URL must be a mysql:// URL");

    let (userinfo, host_part) = rest.split_once('@').expect("DATABASE_URL must name a user");
    let (user, password) = match userinfo.split_once(':') {
        Some((user, password)) => (user.to_string(), password.to_string()),
        None => (userinfo.to_string(), String::new()),
    };

    let authority = host_part.split(['/', '?']).next().unwrap_or(host_part);
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host.to_string(), port.parse().expect("DATABASE_URL port")),
        None => (authority.to_string(), 3306),
    };

    DbConfig {
        host,
        user,
        password,
        database: database.to_string(),
        port,
    }
}

/// The per-test database name assigned by the test harness.
async fn current_database(pool: &MySqlPool) -> String {
    sqlx::query_scalar("SELECT DATABASE()")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Count the server-side connections currently attached to `database`.
async fn db_connections(conn: &mut MySqlConnection, database: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM information_schema.processlist WHERE db = ?")
        .bind(database)
        .fetch_one(conn)
        .await
        .unwrap()
}

/// Poll until the connection count drops back to `baseline`; a leaked
/// session keeps it elevated and fails the test.
async fn assert_session_released(conn: &mut MySqlConnection, database: &str, baseline: i64) {
    for _ in 0..50 {
        if db_connections(conn, database).await <= baseline {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("a database session for {database} is still open after the invocation");
}

/// Success path, log-write mode: the invocation answers 200, lands exactly
/// one row, and leaves no session behind.
#[sqlx::test]
async fn test_log_write_releases_the_session(pool: MySqlPool) {
    let database = current_database(&pool).await;
    let config = config_from_env(&database);
    let mut probe = pool.acquire().await.unwrap();
    let baseline = db_connections(&mut probe, &database).await;

    let event = InvocationEvent::decode(&json!({
        "path": "/status",
        "requestContext": {"requestId": "rel-1"}
    }));
    let response = handle_event(&config, event).await;

    assert_eq!(response.status_code, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["requestId"], "rel-1");

    assert_session_released(&mut probe, &database, baseline).await;

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM api_logs")
        .fetch_one(&mut *probe)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

/// Success path, raw query mode: the handler's own session id comes back
/// through the contract body, and that connection is gone afterwards.
#[sqlx::test]
async fn test_raw_query_releases_the_session(pool: MySqlPool) {
    let config = config_from_env(&current_database(&pool).await);

    let event = InvocationEvent::decode(&json!({
        "is_query": true,
        "sql": "SELECT CONNECTION_ID() AS id"
    }));
    let response = handle_event(&config, event).await;

    assert_eq!(response.status_code, 200);
    let rows: Value = serde_json::from_str(&response.body).unwrap();
    let id = rows[0]["id"].as_u64().expect("body carries the session id");

    for _ in 0..50 {
        let visible: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.processlist WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
        if visible == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("connection {id} still visible after the invocation");
}

/// Caught execution error: the invocation answers the uniform 500 and the
/// session is still released. The schema-error path shares this exact
/// release step (any dispatch failure runs it), so this also pins that
/// structure.
#[sqlx::test]
async fn test_execution_error_still_releases_the_session(pool: MySqlPool) {
    let database = current_database(&pool).await;
    let config = config_from_env(&database);
    let mut probe = pool.acquire().await.unwrap();
    let baseline = db_connections(&mut probe, &database).await;

    let event = InvocationEvent::decode(&json!({"is_query": true, "sql": "SELEKT 1"}));
    let response = handle_event(&config, event).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], FAILURE_MESSAGE);

    assert_session_released(&mut probe, &database, baseline).await;
}
