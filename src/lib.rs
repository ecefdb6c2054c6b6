pub mod activity;
pub mod configuration;
pub mod messages;
pub mod notifications;
pub mod server;
pub mod telemetry;
pub mod traits;
