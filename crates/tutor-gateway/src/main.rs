//! Axum-based HTTP gateway: thin plumbing around the tutor-core pipeline.
//! Config-driven via CoreConfig; exposes `/health` and `/chat`.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutor_core::{ChatResponse, CoreConfig, KnowledgeBase, ReplyOrchestrator};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[tutor-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[tutor-gateway] config load failed: {}", e);
            std::process::exit(1);
        }
    };

    // A missing knowledge base is non-fatal: the orchestrator degrades to
    // no-match guidance for learning requests.
    let knowledge = KnowledgeBase::load_path(&config.knowledge_base_path);
    let orchestrator =
        Arc::new(ReplyOrchestrator::new(knowledge).with_max_length(config.max_message_length));

    let app = router(orchestrator);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("{} listening on {}", config.app_name, addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[tutor-gateway] bind {} failed: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("[tutor-gateway] server error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Clone)]
struct AppState {
    orchestrator: Arc<ReplyOrchestrator>,
}

fn router(orchestrator: Arc<ReplyOrchestrator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(AppState { orchestrator })
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

#[derive(serde::Deserialize)]
struct ChatRequest {
    message: String,
}

async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> axum::Json<ChatResponse> {
    axum::Json(state.orchestrator.reply(&req.message))
}
