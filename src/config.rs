use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "diagnosis-engine";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prediction service used when `DISEASE_API` is not set.
pub const DEFAULT_PREDICTION_ENDPOINT: &str = "https://disease-pred-svm.onrender.com/predict";

/// Remote call budget when `API_TIMEOUT` is not set (milliseconds).
pub const DEFAULT_API_TIMEOUT_MS: u64 = 15_000;

const ENDPOINT_ENV: &str = "DISEASE_API";
const TIMEOUT_ENV: &str = "API_TIMEOUT";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,diagnosis_engine=debug"
    } else {
        "info"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_TIMEOUT value: {0} (expected a positive number of milliseconds)")]
    InvalidTimeout(String),

    #[error("Invalid prediction endpoint: {0} (expected an http:// or https:// URL)")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Settings consumed by the diagnosis engine. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub prediction_endpoint: String,
    pub api_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prediction_endpoint: DEFAULT_PREDICTION_ENDPOINT.to_string(),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl EngineConfig {
    pub fn new(endpoint: &str, api_timeout_ms: u64) -> Result<Self, ConfigError> {
        let config = Self {
            prediction_endpoint: endpoint.trim().to_string(),
            api_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `DISEASE_API` and `API_TIMEOUT`, keeping defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_overrides(None, None)
    }

    /// Like [`from_env`](Self::from_env), but an explicit value replaces the
    /// matching variable, which is then not read at all.
    pub fn from_env_with_overrides(
        endpoint: Option<&str>,
        api_timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup_with(|key| std::env::var(key).ok(), endpoint, api_timeout_ms)
    }

    #[cfg(test)]
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(lookup, None, None)
    }

    fn from_lookup_with<F>(
        lookup: F,
        endpoint: Option<&str>,
        api_timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match endpoint {
            Some(endpoint) => config.prediction_endpoint = endpoint.trim().to_string(),
            None => {
                if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
                    config.prediction_endpoint = endpoint.trim().to_string();
                }
            }
        }

        match api_timeout_ms {
            Some(ms) => config.api_timeout_ms = ms,
            None => {
                if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
                    config.api_timeout_ms = parse_timeout(&raw)?;
                }
            }
        }

        config.validate()?;
        tracing::debug!(
            endpoint = %config.prediction_endpoint,
            timeout_ms = config.api_timeout_ms,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.prediction_endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
        }
        if self.api_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout("0".into()));
        }
        Ok(())
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_unset() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.api_timeout_ms, 15_000);
        assert_eq!(config.api_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn env_overrides_endpoint_and_timeout() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("DISEASE_API", "http://localhost:5000/predict"),
            ("API_TIMEOUT", "2500"),
        ]))
        .unwrap();
        assert_eq!(config.prediction_endpoint, "http://localhost:5000/predict");
        assert_eq!(config.api_timeout_ms, 2500);
    }

    #[test]
    fn blank_env_values_keep_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("DISEASE_API", "  "),
            ("API_TIMEOUT", ""),
        ]))
        .unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn rejects_unparsable_timeout() {
        let err = EngineConfig::from_lookup(lookup_from(&[("API_TIMEOUT", "soon")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".into()));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(matches!(
            EngineConfig::from_lookup(lookup_from(&[("API_TIMEOUT", "0")])),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(EngineConfig::new("http://localhost", 0).is_err());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = EngineConfig::new("ftp://example.org/predict", 1000).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn explicit_timeout_skips_invalid_env_value() {
        let config = EngineConfig::from_lookup_with(
            lookup_from(&[("API_TIMEOUT", "soon")]),
            None,
            Some(500),
        )
        .unwrap();
        assert_eq!(config.api_timeout_ms, 500);
    }

    #[test]
    fn explicit_endpoint_replaces_env_value() {
        let config = EngineConfig::from_lookup_with(
            lookup_from(&[("DISEASE_API", "not a url"), ("API_TIMEOUT", "2500")]),
            Some("http://127.0.0.1:8080/predict"),
            None,
        )
        .unwrap();
        assert_eq!(config.prediction_endpoint, "http://127.0.0.1:8080/predict");
        assert_eq!(config.api_timeout_ms, 2500);
    }

    #[test]
    fn explicit_values_are_still_validated() {
        assert!(matches!(
            EngineConfig::from_lookup_with(lookup_from(&[]), None, Some(0)),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            EngineConfig::from_lookup_with(lookup_from(&[]), Some("localhost"), None),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn app_name_is_set() {
        assert_eq!(APP_NAME, "diagnosis-engine");
        assert!(!APP_VERSION.is_empty());
    }
}
