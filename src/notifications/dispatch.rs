use crate::activity::ActivityRecord;
use crate::notifications::{Delivery, DispatchError};
use crate::traits::Notifier;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, warn};

/// Dispatch on a background task and only log the outcome.
///
/// The returned handle can be awaited but never yields an error.
pub fn spawn_notification(notifier: Arc<dyn Notifier>, activity: ActivityRecord) -> JoinHandle<()> {
    let span = tracing::info_span!("notification", kind = %activity.kind);
    tokio::spawn(
        async move {
            let outcome = notifier.dispatch(&activity).await;
            log_outcome(&outcome);
        }
        .instrument(span),
    )
}

pub fn log_outcome(outcome: &Result<Delivery, DispatchError>) {
    match outcome {
        Ok(Delivery { ok: true, message_id }) => {
            info!(message_id = ?message_id, "Notification sent successfully");
        }
        Ok(Delivery { ok: false, .. }) => {
            warn!("Telegram acknowledged the request with ok=false");
        }
        Err(DispatchError::NotConfigured { missing }) => {
            warn!(
                "Telegram credentials not configured. Set {} in environment variables.",
                missing.join(" and ")
            );
        }
        Err(DispatchError::Api { status, body }) => {
            error!(status = %status, body = %body, "Failed to send notification: API error");
        }
        Err(e) => {
            error!("Failed to send notification: {}", e);
        }
    }
}
