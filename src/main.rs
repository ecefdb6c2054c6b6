use activity_notifier::configuration::{NotifierConfig, ServerSettings};
use activity_notifier::notifications::TelegramNotifier;
use activity_notifier::server::{AppState, router};
use activity_notifier::telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("activity-notifier".into(), "info".into());
    init_subscriber(subscriber);

    info!("Starting activity-notifier");

    let settings = ServerSettings::from_env()?;
    let config = NotifierConfig::from_env();
    if let NotifierConfig::NotConfigured { missing } = &config {
        warn!(
            "Telegram credentials not configured, notifications will be skipped. Missing: {}",
            missing.join(", ")
        );
    }

    let app = router(AppState::new(TelegramNotifier::new(config)));

    let listener = tokio::net::TcpListener::bind(settings.listen_addr).await?;
    info!("Listening on {}", settings.listen_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
