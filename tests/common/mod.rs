/// Shared test fixtures and utilities for test modules
#[allow(dead_code)]
pub mod fixtures {
    use activity_notifier::activity::{ActivityRecord, Location};
    use activity_notifier::configuration::{NotifierConfig, TelegramConfig};

    pub const BOT_TOKEN: &str = "123456:test-token";
    pub const CHAT_ID: &str = "-100200300";

    /// The visit from the Paris scenario, every optional field present
    pub fn paris_visit() -> ActivityRecord {
        ActivityRecord::visit("2024-01-01T00:00:00Z", "TestAgent/1.0").with_location(Location {
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            ip: Some("1.2.3.4".to_string()),
        })
    }

    /// A wallet connection with keys provided
    pub fn wallet_connect(provided: Option<bool>) -> ActivityRecord {
        let mut record = ActivityRecord::wallet_connect("2024-06-15T12:30:00Z", "WalletBrowser/2.3")
            .with_wallet_type("MetaMask")
            .with_location(Location {
                city: Some("Berlin".to_string()),
                country: Some("Germany".to_string()),
                ip: None,
            });
        record.security_keys_provided = provided;
        record
    }

    /// Configuration pointing at a mock Telegram API
    pub fn config_for(api_base_url: &str) -> NotifierConfig {
        TelegramConfig::new(BOT_TOKEN, CHAT_ID)
            .with_api_base_url(api_base_url)
            .into()
    }
}

/// Capturing tracing output in memory
#[allow(dead_code)]
pub mod logs {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        /// Install a plain-text subscriber on the current thread writing into this buffer
        pub fn install(&self) -> DefaultGuard {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .with_max_level(Level::TRACE)
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
