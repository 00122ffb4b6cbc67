use rusty_library_catalog::{
    adapters::memory::InMemoryCatalog,
    api::{handlers::AppState, router::create_router},
    application::catalog::ServiceDependencies,
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // 読み込みに失敗した場合は空のカタログで起動する
    let catalog = Arc::new(InMemoryCatalog::from_json_file(&config.books_path));

    let service_deps = ServiceDependencies { catalog };
    let app_state = Arc::new(AppState { service_deps });
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
