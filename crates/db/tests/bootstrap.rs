//! Startup path: create the database file, migrate, verify the schema.

use sqlx::SqlitePool;

/// Full bootstrap: a missing directory and database file are created.
#[tokio::test]
async fn test_full_bootstrap_creates_missing_store() {
    let root = std::env::temp_dir().join(format!(
        "tavern-bootstrap-{}-{}",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let db_file = root.join("database").join("db.sqlite3");
    let url = format!("sqlite://{}", db_file.display());

    let pool = tavern_db::create_pool(&url, 1).await.unwrap();
    tavern_db::run_migrations(&pool).await.unwrap();
    tavern_db::health_check(&pool).await.unwrap();
    assert!(db_file.exists(), "database file should be created");

    // Running migrations again is a no-op.
    tavern_db::run_migrations(&pool).await.unwrap();

    pool.close().await;
    let _ = std::fs::remove_dir_all(&root);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_tables_exist(pool: SqlitePool) {
    tavern_db::health_check(&pool).await.unwrap();

    for table in ["characters", "comments"] {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
                .bind(table)
                .fetch_one(&pool)
                .await
                .unwrap_or_else(|e| panic!("{table} lookup failed: {e}"));
        assert_eq!(count.0, 1, "{table} table should exist");
    }
}

/// Comments cannot reference a character that does not exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_foreign_key_enforced(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO comments (character_id, text, created_at) VALUES (999, 'orphan', '2026-01-01T00:00:00Z')",
    )
    .execute(&pool)
    .await;

    let err = result.expect_err("orphan comment must be rejected");
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_foreign_key_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}
