use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use sqlx::migrate::Migrator;
use sqlx::{Pool, Postgres};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(database_url: &str) -> Result<Pool<Postgres>, sqlx::Error> {
    let mut cfg = DbPoolConfig::from_env("event-service").unwrap_or_default();
    cfg.service_name = "event-service".to_string();
    if cfg.database_url.is_empty() {
        cfg.database_url = database_url.to_string();
    }
    let pool = create_pg_pool(cfg).await?;
    Ok(pool)
}

/// Run embedded migrations (idempotent). Schema drift is fatal at startup.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
