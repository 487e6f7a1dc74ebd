use std::env;
use std::time::Duration;
use tracing::warn;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Delay before the simulated chat reply is posted
    pub chat_reply_delay_ms: u64,
    /// Maximum number of chat messages kept in memory
    pub chat_history_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let chat_reply_delay_ms = env::var("CHAT_REPLY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| {
                warn!("CHAT_REPLY_DELAY_MS not set or invalid, using default: 2000");
                2000
            });
        let chat_history_limit = env::var("CHAT_HISTORY_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|limit: &usize| *limit > 0)
            .unwrap_or(200);
        AppConfig { host, port, chat_reply_delay_ms, chat_history_limit }
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            chat_reply_delay_ms: 2000,
            chat_history_limit: 200,
        }
    }
}
