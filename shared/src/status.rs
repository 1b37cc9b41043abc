//! Coupon display status and listing filters

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display status of a coupon, derived on the client
///
/// Precedence: used > expired > active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponStatus {
    Active,
    Used,
    Expired,
}

impl CouponStatus {
    /// Derive the status from the usage timestamp and the end of the
    /// validity window, against the business `today`.
    pub fn derive(used_at: Option<NaiveDateTime>, end_date: NaiveDate, today: NaiveDate) -> Self {
        if used_at.is_some() {
            Self::Used
        } else if end_date < today {
            Self::Expired
        } else {
            Self::Active
        }
    }

    /// Badge label
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Used => "Utilizado",
            Self::Expired => "Vencido",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `filtro` query parameter of the listing endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    #[serde(rename = "ativos")]
    Active,
    #[serde(rename = "utilizados")]
    Used,
    #[serde(rename = "vencidos")]
    Expired,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::Active, Self::Used, Self::Expired];

    /// Query string value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ativos",
            Self::Used => "utilizados",
            Self::Expired => "vencidos",
        }
    }

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Cupons Ativos",
            Self::Used => "Cupons Utilizados",
            Self::Expired => "Cupons Vencidos",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Active => Self::Used,
            Self::Used => Self::Expired,
            Self::Expired => Self::Active,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Active => Self::Expired,
            Self::Used => Self::Active,
            Self::Expired => Self::Used,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
