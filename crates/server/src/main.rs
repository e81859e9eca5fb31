// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod generation;
mod http;
mod routes;
mod session;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post, put},
};
use clap::Parser;
use jadwal::CancellationToken;
use jadwal_api::AuthenticationService;
use jadwal_persistence::SqlitePersistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::{Args, ServerConfig};
use crate::routes::{
    handle_city_schedules, handle_create_content, handle_create_user, handle_delete_content,
    handle_delete_user, handle_generate_yearly_schedule, handle_get_content,
    handle_get_running_text, handle_get_saved_user_location, handle_health, handle_list_contents,
    handle_list_user_locations, handle_list_users, handle_locations, handle_login, handle_logout,
    handle_set_location, handle_set_running_text, handle_sync, handle_sync_latest,
    handle_sync_list, handle_sync_range, handle_sync_today, handle_update_content,
    handle_update_user, handle_user_location,
};

/// Application state shared across handlers.
///
/// The persistence layer sits behind an async Mutex; the generation job
/// takes it per city from a blocking worker.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<SqlitePersistence>>,
    pub config: ServerConfig,
    /// Held for the duration of a yearly generation.
    pub generation: Arc<Mutex<()>>,
    /// Cancelled when the server begins shutting down.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(persistence: SqlitePersistence, config: ServerConfig) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            config,
            generation: Arc::new(Mutex::new(())),
            shutdown: CancellationToken::new(),
        }
    }
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/users", get(handle_list_users).post(handle_create_user))
        .route(
            "/users/{id}",
            put(handle_update_user).delete(handle_delete_user),
        )
        .route("/running-text", post(handle_set_running_text))
        .route("/running-text/{user_id}", get(handle_get_running_text))
        .route(
            "/content",
            get(handle_list_contents).post(handle_create_content),
        )
        .route(
            "/content/{id}",
            get(handle_get_content)
                .put(handle_update_content)
                .delete(handle_delete_content),
        )
        .route("/user-locations", get(handle_list_user_locations))
        .route(
            "/user-locations/{user_id}",
            get(handle_get_saved_user_location),
        )
        .route("/sync", post(handle_sync))
        .route("/sync/latest", get(handle_sync_latest))
        .route("/sync/list", get(handle_sync_list))
        .route("/sync/today", get(handle_sync_today))
        .route("/sync/range", get(handle_sync_range))
        .route(
            "/sync/generate-yearly-schedule",
            post(handle_generate_yearly_schedule),
        )
        .route("/sync/schedules/{city}", get(handle_city_schedules))
        .route("/sync/locations", get(handle_locations))
        .route("/sync/set-location", post(handle_set_location))
        .route("/sync/user-location", get(handle_user_location))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Resolves on Ctrl+C or SIGTERM and cancels `shutdown`.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
    shutdown.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Jadwal Server");

    let config: ServerConfig = ServerConfig::from_args(&args)?;
    info!(
        timezone = %config.timezone,
        session_ttl_hours = args.session_ttl_hours,
        method = %config.calculation.method,
        madhab = %config.calculation.madhab,
        "Loaded configuration"
    );

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    if AuthenticationService::ensure_default_admin(
        &mut persistence,
        &args.admin_username,
        &args.admin_password,
    )? {
        warn!(
            username = %args.admin_username,
            "Created default admin account; change its password"
        );
    }
    AuthenticationService::purge_expired_sessions(&mut persistence)?;

    let app_state: AppState = AppState::new(persistence, config);
    let shutdown: CancellationToken = app_state.shutdown.clone();

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server stopped");
    Ok(())
}
