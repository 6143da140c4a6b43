use catalog_db::DbPool;

/// Fresh in-memory catalog with the schema applied and no rows.
pub async fn empty_pool() -> DbPool {
    let pool = catalog_db::create_memory_pool().await.unwrap();
    catalog_db::init_schema(&pool).await.unwrap();
    pool
}

/// Fresh in-memory catalog holding the demonstration dataset.
pub async fn seeded_pool() -> DbPool {
    let pool = empty_pool().await;
    assert!(catalog_db::seed_if_empty(&pool).await.unwrap());
    pool
}

pub async fn table_count(pool: &DbPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("{table} count failed: {e}"))
}
