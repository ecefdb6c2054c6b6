use crate::activity::ActivityRecord;
use crate::notifications::spawn_notification;
use crate::traits::Notifier;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing};
use serde::Serialize;
use std::sync::Arc;
use tracing::{Span, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self { notifier: Arc::new(notifier) }
    }
}

#[derive(Serialize, Debug)]
pub struct Accepted {
    pub request_id: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", routing::get(|| async { "up" }))
        .route("/activity", routing::post(ingest))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

// - POST /activity
#[tracing::instrument(
    name = "Ingest activity",
    skip(state, activity),
    fields(
        request_id = tracing::field::Empty,
        kind = %activity.kind,
    )
)]
async fn ingest(
    State(state): State<AppState>,
    Json(activity): Json<ActivityRecord>,
) -> (StatusCode, Json<Accepted>) {
    let request_id = Uuid::new_v4().to_string();
    Span::current().record("request_id", request_id.as_str());

    info!("Queueing notification");
    spawn_notification(state.notifier.clone(), activity);

    (StatusCode::ACCEPTED, Json(Accepted { request_id }))
}
