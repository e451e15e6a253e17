use std::env;
use std::time::Duration;

/// Default request timeout against the REST backend.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend. `None` runs against the in-memory store.
    pub api_url: Option<String>,
    pub timeout: Duration,
}

impl AppConfig {
    /// Reads `STOCKROOM_API_URL` and `STOCKROOM_TIMEOUT_SECS`, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            env::var("STOCKROOM_API_URL").ok(),
            env::var("STOCKROOM_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(api_url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let timeout_secs = match timeout_secs {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("STOCKROOM_TIMEOUT_SECS must be a whole number of seconds: {e}")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_in_memory_store() {
        let config = AppConfig::from_vars(None, None).unwrap();
        assert_eq!(config.api_url, None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let blank = AppConfig::from_vars(Some("  ".into()), None).unwrap();
        assert_eq!(blank.api_url, None);
    }

    #[test]
    fn reads_url_and_timeout() {
        let config =
            AppConfig::from_vars(Some("http://localhost:5000".into()), Some("3".into())).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(AppConfig::from_vars(None, Some("soon".into())).is_err());
    }
}
