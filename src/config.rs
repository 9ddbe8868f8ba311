use std::env;

/// Which inbound fields the relay forwards upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    /// Only the new message is forwarded; prior turns are never sent.
    Stateless,
    /// Prior turns are forwarded ahead of the new message.
    HistoryAware,
}

impl RelayMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stateless" => Some(RelayMode::Stateless),
            "history" => Some(RelayMode::HistoryAware),
            _ => None,
        }
    }
}

/// Process-wide settings, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub relay_mode: RelayMode,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        let api_url = env::var("API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:1234/v1/chat/completions".to_string());
        let model_name = env::var("MODEL_NAME").unwrap_or_else(|_| "qwen/qwen3-1.7b".to_string());
        let max_tokens = env::var("MAX_TOKENS")
            .ok()
            .map(|v| v.parse().expect("MAX_TOKENS must be an integer"))
            .unwrap_or(1000);
        let temperature = env::var("TEMPERATURE")
            .ok()
            .map(|v| v.parse().expect("TEMPERATURE must be a number"))
            .unwrap_or(0.7);
        let relay_mode = env::var("RELAY_MODE")
            .ok()
            .map(|v| RelayMode::parse(&v).expect("RELAY_MODE must be 'history' or 'stateless'"))
            .unwrap_or(RelayMode::HistoryAware);
        let port = env::var("PORT")
            .ok()
            .map(|v| v.parse().expect("PORT must be a port number"))
            .unwrap_or(8000);

        Settings {
            api_url,
            model_name,
            max_tokens,
            temperature,
            relay_mode,
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod relay_mode {
        use super::*;

        #[test]
        fn parses_known_modes() {
            assert_eq!(RelayMode::parse("stateless"), Some(RelayMode::Stateless));
            assert_eq!(RelayMode::parse("history"), Some(RelayMode::HistoryAware));
            assert_eq!(RelayMode::parse(" History "), Some(RelayMode::HistoryAware));
        }

        #[test]
        fn rejects_unknown_modes() {
            assert_eq!(RelayMode::parse("both"), None);
            assert_eq!(RelayMode::parse(""), None);
        }
    }
}
