#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// In-memory SQLite with migrations applied. Every call yields an isolated store.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_and_migrate(&DatabaseConfig::with_url("sqlite::memory:")).await
}
