pub mod models;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Opens the badge store.
///
/// Accepts either a full DSN (`sqlite:`, `postgres://`, `mysql://`) or a plain
/// SQLite file path, in which case the parent directory and file are created.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(migration::database_url(path_or_url)).await
}

/// Connects and brings the schema up to date.
pub async fn connect_and_migrate(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = connect(path_or_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
