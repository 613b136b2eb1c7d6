use api::build_app;
use db::models::badge::Model as Badge;
use std::net::SocketAddr;
use tracing_appender::rolling;
use util::{
    config::AppConfig,
    state::AppState,
    ws::ConnectionRegistry,
};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config);

    // Set up dependencies
    let db = db::connect_and_migrate(&config.database_path)
        .await
        .expect("Failed to connect to the badge store");

    Badge::ensure_admin(&db, &config.admin_badge_id)
        .await
        .expect("Failed to bootstrap the admin badge");

    let app_state = AppState::new(db, ConnectionRegistry::new(), &config);

    // Build app router
    let app = build_app(app_state).expect("Allowed origin is not a valid header value");

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(
        project = %config.project_name,
        env = %config.env,
        %addr,
        allowed_origin = %config.allowed_origin(),
        "Starting server"
    );
    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("api=info,util=info,db=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config.log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
