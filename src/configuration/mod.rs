mod settings;

pub use settings::{
    API_URL_VAR, BOT_TOKEN_VAR, CHAT_ID_VAR, ConfigError, DEFAULT_API_URL, DEFAULT_LISTEN_ADDR,
    LISTEN_ADDR_VAR, NotifierConfig, ServerSettings, TelegramConfig,
};
