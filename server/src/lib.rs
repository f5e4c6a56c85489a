//! # Review board backend
//!
//! REST API for saving interview boards and relaying expert feedback.
//!
//! # General Infrastructure
//! - Frontend talks JSON to this server, nothing else is exposed
//! - Boards and experts live in Redis as JSON documents inside hashes
//! - Candidate feedback ids come from the roster blob written by `enroll`
//! - Feedback is relayed to the ledger gateway when one is configured,
//!   otherwise the feedback route refuses
//!
//! # Routes
//! - `POST /save-details` stores a board and derives one token per expert
//! - `GET /details` lists every saved board
//! - `GET /experts` lists every known reviewer
//! - `GET /agenda/{name}` lists the boards a reviewer sits on
//! - `POST /feedback` validates scores and relays them to the gateway
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod token;

use routes::{
    agenda_handler, details_handler, experts_handler, feedback_handler, save_details_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/save-details", post(save_details_handler))
        .route("/details", get(details_handler))
        .route("/experts", get(experts_handler))
        .route("/agenda/{name}", get(agenda_handler))
        .route("/feedback", post(feedback_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
