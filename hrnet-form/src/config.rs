//! Engine configuration

/// Configuration for the form engine
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Re-validate the whole draft on every field change
    pub validate_on_change: bool,
    /// Log level handed to the logger setup
    pub log_level: String,
}

impl FormConfig {
    pub fn from_env() -> Self {
        Self {
            validate_on_change: std::env::var("HRNET_VALIDATE_ON_CHANGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("HRNET_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
