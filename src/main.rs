use books_api::{
    adapters::memory::BookStore as InMemoryBookStore,
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::AppConfig,
};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "books_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::parse();
    let cors = config.cors_layer()?;

    tracing::info!("CORS origin: {}", config.cors_origin);

    // The store lives for the whole process; nothing is persisted.
    let service_deps = ServiceDependencies {
        book_store: InMemoryBookStore::shared(),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs: http://localhost:{}/api-docs", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
