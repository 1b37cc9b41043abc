//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Every failure is terminal for the action that triggered it; nothing is
/// retried. Views show [`ClientError::user_message`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },

    /// 2xx response with `success: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Payload rejected before sending
    #[error("Validation error: {0}")]
    Validation(#[from] shared::ValidationError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message provided by the server (or by local validation), if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            Self::Rejected(message) => message.as_deref(),
            Self::Validation(e) => Some(&e.message),
            _ => None,
        }
    }

    /// Text for the UI: the detail verbatim, else the action's fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_detail_wins_over_fallback() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            detail: Some("Credenciais inválidas".into()),
        };
        assert_eq!(err.user_message("Erro ao fazer login"), "Credenciais inválidas");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn fallback_without_detail() {
        let err = ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(err.user_message("Erro ao criar cupom"), "Erro ao criar cupom");

        let err = ClientError::InvalidResponse("truncated".into());
        assert_eq!(err.user_message("Erro ao carregar cupons"), "Erro ao carregar cupons");

        let err = ClientError::Rejected(Some("  ".into()));
        assert_eq!(err.user_message("Erro ao reservar cupom"), "Erro ao reservar cupom");
    }

    #[test]
    fn validation_message_is_shown() {
        let err = ClientError::from(shared::ValidationError::new(
            "per_desc_cupom",
            "Desconto deve estar entre 1 e 100",
        ));
        assert_eq!(err.user_message("Erro ao criar cupom"), "Desconto deve estar entre 1 e 100");
    }
}
