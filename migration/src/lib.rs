pub mod migrations;
mod migrator;

pub use migrator::Migrator;

use std::path::Path;

/// `true` when `DATABASE_PATH` holds a connection URL rather than a SQLite file path.
pub fn is_database_url(path_or_url: &str) -> bool {
    path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
}

/// Connection URL for `DATABASE_PATH`.
///
/// URLs are passed through untouched. A plain path becomes a read-write-create
/// SQLite URL and its parent directory is created, since SQLite won't create
/// intermediate dirs.
pub fn database_url(path_or_url: &str) -> String {
    if is_database_url(path_or_url) {
        return path_or_url.to_string();
    }

    if let Some(parent) = Path::new(path_or_url).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
