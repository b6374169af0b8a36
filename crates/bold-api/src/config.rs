//! Client configuration

use std::time::Duration;

/// Root of every BOLD endpoint path
pub const DEFAULT_BASE_URL: &str = "http://www.boldsystems.org/index.php";
pub const DEFAULT_USER_AGENT: &str = "bold-api-rs/0.1";
/// Timeout for record and metadata queries
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;
/// Timeout for bulk downloads (sequences, combined records, trace archives)
pub const DEFAULT_LONG_TIMEOUT_SECS: u64 = 5000;

/// Which of the two timeouts an endpoint uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutClass {
    Short,
    Long,
}

/// Settings shared by every request a client issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub long_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            long_timeout: Duration::from_secs(DEFAULT_LONG_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `BOLD_BASE_URL`, `BOLD_TIMEOUT_SECS`,
    /// `BOLD_LONG_TIMEOUT_SECS` and `BOLD_USER_AGENT`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str| {
            lookup(key)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        Self {
            base_url: lookup("BOLD_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: secs("BOLD_TIMEOUT_SECS").unwrap_or(defaults.timeout),
            long_timeout: secs("BOLD_LONG_TIMEOUT_SECS").unwrap_or(defaults.long_timeout),
            user_agent: lookup("BOLD_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout_for(&self, class: TimeoutClass) -> Duration {
        match class {
            TimeoutClass::Short => self.timeout,
            TimeoutClass::Long => self.long_timeout,
        }
    }
}
