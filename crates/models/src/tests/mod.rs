
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory store with the schema applied
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    crate::db::connect_and_migrate(&DatabaseConfig::with_url("sqlite::memory:")).await
}
