use std::{env, time::Duration};

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REFRESH_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the habit API, without a trailing slash.
    pub api_base: String,
    pub port: u16,
    /// Auto-refresh tick; `None` disables it.
    pub refresh_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("HABIT_API_BASE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let refresh_secs = lookup("HABIT_REFRESH_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS);

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            port,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_without_env() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(60)));
    }

    #[test]
    fn reads_overrides_and_strips_slash() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HABIT_API_BASE", "http://api.local:9000/"),
            ("PORT", "3001"),
            ("HABIT_REFRESH_SECS", "0"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()));
        assert_eq!(config.api_base, "http://api.local:9000");
        assert_eq!(config.port, 3001);
        assert_eq!(config.refresh_interval, None);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(|key| (key == "PORT").then(|| "nope".to_string()));
        assert_eq!(config.port, 8080);
    }
}
