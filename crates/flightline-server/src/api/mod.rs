//! Router assembly and top-level reporting endpoints

pub mod response;

use crate::config::Config;
use crate::db;
use crate::error::AppError;
use crate::features;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

/// Open the pool, apply migrations, and run the server until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.database).await?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    info!("Database migrations completed");

    let state = AppState { db: pool.clone() };
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    // Drain the pool before exit.
    pool.close().await;
    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let feature_state = features::FeatureState {
        db: state.db.clone(),
    };

    let api_v1 = features::router(feature_state);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .with_state(state)
        .nest("/api/v1", api_v1)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(crate::middleware::tracing_layer())
        .layer(crate::middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Flightline Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Result<Response, StatusCode> {
    match db::health_check(&state.db).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}

/// Entity counts across the whole store.
///
/// All sub-queries run inside one transaction; a single failure aborts the
/// whole aggregation.
async fn get_stats(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut tx = state.db.begin().await?;

    let airlines = count_rows(&mut tx, "airlines").await?;
    let airports = count_rows(&mut tx, "airports").await?;
    let aircraft = count_rows(&mut tx, "aircraft").await?;
    let flights = count_rows(&mut tx, "flights").await?;
    let passengers = count_rows(&mut tx, "passengers").await?;
    let bookings = count_rows(&mut tx, "bookings").await?;
    let crew_members = count_rows(&mut tx, "crew_members").await?;
    let crew_assignments = count_rows(&mut tx, "flight_crew").await?;

    tx.commit().await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Statistics retrieved successfully",
            "data": {
                "airlines": airlines,
                "airports": airports,
                "aircraft": aircraft,
                "flights": flights,
                "passengers": passengers,
                "bookings": bookings,
                "crew_members": crew_members,
                "crew_assignments": crew_assignments,
            }
        })),
    )
        .into_response())
}

async fn count_rows(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    table: &str,
) -> Result<i64, sqlx::Error> {
    // Table names come from the fixed list above, never from input.
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut **tx)
        .await
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    // Give ongoing requests time to complete
    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
