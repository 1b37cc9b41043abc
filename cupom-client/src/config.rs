//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CUPOM_API_URL (or API_URL) | http://localhost:8000/api | Backend base URL |
//! | CUPOM_REQUEST_TIMEOUT_SECS | unset (no timeout) | Per-request timeout |
//! | CUPOM_TIMEZONE | America/Sao_Paulo | Zone the backend computes "today" in |

use shared::BusinessCalendar;

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Client configuration for connecting to the coupon backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL including the API prefix (e.g. "http://localhost:8000/api")
    pub base_url: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,

    /// Calendar used for status badges
    pub calendar: BusinessCalendar,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            calendar: BusinessCalendar::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CUPOM_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout = std::env::var("CUPOM_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0);

        let calendar = match std::env::var("CUPOM_TIMEZONE") {
            Ok(name) => BusinessCalendar::from_name(&name).unwrap_or_else(|e| {
                tracing::warn!("{e}, using {}", BusinessCalendar::default().timezone());
                BusinessCalendar::default()
            }),
            Err(_) => BusinessCalendar::default(),
        };

        Self {
            base_url,
            timeout,
            calendar,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the business calendar
    pub fn with_calendar(mut self, calendar: BusinessCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
