//! API response types
//!
//! Mutating endpoints answer `{success, message}`; failures are non-2xx
//! responses whose body may carry a `detail` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of register/create/reserve/register-use calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Codes of the coupons issued by a create call
    #[serde(rename = "cupons", default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
}

/// Error body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the server provided one
    ///
    /// A plain string is returned verbatim. A list of validation items
    /// (`[{"msg": ...}]`) is flattened into `msg; msg`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.as_str()),
                        other => other.get("msg").and_then(Value::as_str),
                    })
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        }
    }

    /// Parse a raw body; anything that is not JSON yields no detail
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_verbatim() {
        let body = ErrorBody::from_text(r#"{"detail": "CPF já cadastrado"}"#);
        assert_eq!(body.message().as_deref(), Some("CPF já cadastrado"));
    }

    #[test]
    fn validation_items_are_joined() {
        let body = ErrorBody::from_text(
            r#"{"detail": [
                {"loc": ["body", "email_associado"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["query", "cnpj"], "msg": "field required", "type": "missing"}
            ]}"#,
        );
        assert_eq!(
            body.message().as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn no_detail_without_json() {
        assert_eq!(ErrorBody::from_text("Internal Server Error").message(), None);
        assert_eq!(ErrorBody::from_text(r#"{"detail": ""}"#).message(), None);
        assert_eq!(ErrorBody::from_text(r#"{"error": "x"}"#).message(), None);
    }

    #[test]
    fn create_response_lists_codes() {
        let resp: ActionResponse = serde_json::from_str(
            r#"{"success": true, "message": "2 cupons criados", "cupons": ["AAAAAAAAAAAA", "BBBBBBBBBBBB"]}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.codes.len(), 2);
    }
}
