//! Auth DTOs shared between cupom-client and cupom-tui

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::models::{Member, Merchant};

// =============================================================================
// User type
// =============================================================================

/// User type discriminator (`tipo`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    #[serde(rename = "associado")]
    Member,
    #[serde(rename = "comercio")]
    Merchant,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "associado",
            Self::Merchant => "comercio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Associado",
            Self::Merchant => "Comércio",
        }
    }

    /// Name of the tax ID used as login identifier
    pub fn identifier_label(self) -> &'static str {
        match self {
            Self::Member => "CPF",
            Self::Merchant => "CNPJ",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Member => Self::Merchant,
            Self::Merchant => Self::Member,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /auth/login`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// CPF for members, CNPJ for merchants
    #[serde(rename = "identificador")]
    #[validate(length(min = 1, message = "Identificador é obrigatório"))]
    pub identifier: String,
    #[serde(rename = "senha")]
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
    #[serde(rename = "tipo")]
    pub user_type: UserType,
}

/// Login response
///
/// `user` is the stored member or merchant document without its credential;
/// its shape depends on `tipo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "tipo")]
    pub user_type: UserType,
    #[serde(default)]
    pub user: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Decode `user` according to `tipo`
    pub fn into_user(self) -> Result<AuthenticatedUser, serde_json::Error> {
        match self.user_type {
            UserType::Member => serde_json::from_value(self.user).map(AuthenticatedUser::Member),
            UserType::Merchant => {
                serde_json::from_value(self.user).map(AuthenticatedUser::Merchant)
            }
        }
    }
}

/// User record handed to the root view after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatedUser {
    Member(Member),
    Merchant(Merchant),
}

impl AuthenticatedUser {
    pub fn user_type(&self) -> UserType {
        match self {
            Self::Member(_) => UserType::Member,
            Self::Merchant(_) => UserType::Merchant,
        }
    }

    /// CPF or CNPJ
    pub fn tax_id(&self) -> &str {
        match self {
            Self::Member(m) => &m.cpf,
            Self::Merchant(m) => &m.cnpj,
        }
    }

    /// Member name or merchant trade name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Member(m) => &m.name,
            Self::Merchant(m) => &m.trade_name,
        }
    }
}
