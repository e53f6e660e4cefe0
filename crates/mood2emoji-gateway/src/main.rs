//! Mood2Emoji Gateway — serves the classroom page and the mood API.
//! One shared pipeline, built at startup, read by every request.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, Response},
    routing::{get, post},
    Json, Router,
};
use mood2emoji_core::{MoodConfig, MoodError, MoodPipeline, MoodReport, MoodResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
struct AppState {
    pipeline: Arc<MoodPipeline>,
    input_limit: Option<usize>,
}

#[derive(Deserialize)]
struct MoodRequest {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum MoodResponse {
    Ok(MoodReport),
    Rejected {
        reason: &'static str,
        message: String,
    },
    Error {
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MoodConfig::load()?;
    let pipeline = MoodPipeline::from_config(&config)?;

    let state = Arc::new(AppState {
        pipeline: Arc::new(pipeline),
        input_limit: config.input_limit(),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/", get(serve_mood_ui))
        .route("/api/mood", post(mood_handler))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "[MOOD2EMOJI] v{} listening on http://{}",
        mood2emoji_core::version(),
        addr
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

async fn log_requests(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!(
        "[MOOD2EMOJI] {} {} from {} -> {}",
        method,
        path,
        addr,
        response.status()
    );
    response
}

async fn health() -> &'static str {
    "OK"
}

/// Classroom page: text box, mood card, and the teacher-mode explanation panel.
async fn serve_mood_ui() -> Html<&'static str> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(INDEX)
}

/// POST /api/mood: classify one submission.
async fn mood_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MoodRequest>,
) -> (StatusCode, Json<MoodResponse>) {
    if let Some(limit) = state.input_limit {
        if body.text.chars().count() > limit {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(MoodResponse::Rejected {
                    reason: "too_long",
                    message: format!("✂️ That's a lot! Please keep it under {} characters.", limit),
                }),
            );
        }
    }
    respond(state.pipeline.analyze(&body.text))
}

/// Map a pipeline outcome to an HTTP status and body.
fn respond(result: MoodResult<MoodReport>) -> (StatusCode, Json<MoodResponse>) {
    match result {
        Ok(report) => (StatusCode::OK, Json(MoodResponse::Ok(report))),
        Err(e) => {
            let reason = match &e {
                MoodError::EmptyInput => Some("empty_input"),
                MoodError::ProfanityDetected => Some("profanity"),
                _ => None,
            };
            match (reason, e.user_message()) {
                (Some(reason), Some(message)) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(MoodResponse::Rejected {
                        reason,
                        message: message.to_string(),
                    }),
                ),
                _ => {
                    tracing::error!("[MOOD2EMOJI] classification failed: {}", e);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(MoodResponse::Error {
                            message: "😕 The mood reader is taking a break. Please try again later."
                                .to_string(),
                        }),
                    )
                }
            }
        }
    }
}
