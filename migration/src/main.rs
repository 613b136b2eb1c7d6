use std::{env, fs, path::Path};

mod runner;

const DEFAULT_DATABASE_PATH: &str = "data/badges.db";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            runner::run_all_migrations(&migration::database_url(&db_path)).await;
        }
        _ => {
            runner::run_all_migrations(&migration::database_url(&db_path)).await;
        }
    }
}

fn remove_db_file(path: &str) {
    if migration::is_database_url(path) {
        println!("DATABASE_PATH is a connection URL, not removing anything: {}", path);
        return;
    }

    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}
