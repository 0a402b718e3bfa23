use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("AESTHETICS_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.scoring.endpoint = endpoint;
        }

        if let Ok(key) = std::env::var("AESTHETICS_API_KEY")
            && !key.is_empty()
        {
            self.scoring.api_key = key;
        }

        if let Ok(timeout_str) = std::env::var("AESTHETICS_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.trim().parse::<u64>()
        {
            self.scoring.timeout_secs = timeout;
        }

        if let Ok(enabled_str) = std::env::var("AESTHETICS_ENABLED")
            && let Some(enabled) = parse_flag(&enabled_str)
        {
            self.overlay.enabled = enabled;
        }

        if let Ok(level) = std::env::var("AESTHETICS_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
