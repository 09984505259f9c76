//! Lapor-rs server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use lapor_api::{AppState, router as api_router};
use lapor_common::token::TokenSigner;
use lapor_common::{Config, InlineStorage, LocalStorage, StorageBackend, config::StorageKind};
use lapor_core::{
    AdminService, CitizenService, ComplaintService, SubmissionService, ValidationRecordService,
};
use lapor_db::repositories::{
    AdminRepository, CitizenRepository, ComplaintRepository, PhotoRepository,
    ValidationRecordRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lapor=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting lapor-rs server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = lapor_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    lapor_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize photo storage
    let storage_path = PathBuf::from(&config.storage.base_path);
    let storage: Arc<dyn StorageBackend> = match config.storage.kind {
        StorageKind::Local => Arc::new(LocalStorage::new(
            storage_path.clone(),
            config.server.url.clone(),
        )),
        StorageKind::Inline => Arc::new(InlineStorage),
    };
    info!(kind = ?config.storage.kind, "Initialized photo storage");

    // Initialize repositories
    let db = Arc::new(db);
    let citizen_repo = CitizenRepository::new(Arc::clone(&db));
    let complaint_repo = ComplaintRepository::new(Arc::clone(&db));
    let photo_repo = PhotoRepository::new(Arc::clone(&db));
    let admin_repo = AdminRepository::new(Arc::clone(&db));
    let validation_repo = ValidationRecordRepository::new(Arc::clone(&db));

    // Initialize services
    let signer = TokenSigner::new(&config.auth.jwt_secret);

    let citizen_service = CitizenService::new(citizen_repo.clone());
    let complaint_service = ComplaintService::new(
        complaint_repo.clone(),
        citizen_repo.clone(),
        photo_repo.clone(),
        storage.clone(),
    );
    let submission_service = SubmissionService::new(
        citizen_repo,
        complaint_repo.clone(),
        photo_repo,
        storage,
    );
    let admin_service = AdminService::new(admin_repo, signer);
    let validation_service = ValidationRecordService::new(validation_repo, complaint_repo);

    // Create app state
    let state = AppState {
        citizen_service,
        complaint_service,
        submission_service,
        admin_service,
        validation_service,
    };

    // Build router
    let app = Router::new()
        .nest_service("/uploads", ServeDir::new(storage_path))
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from((config.server.host.parse::<std::net::IpAddr>()?, config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
