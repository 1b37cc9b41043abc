//! Business calendar
//!
//! The backend compares coupon dates against its own local calendar day.
//! Status badges must use the same reference, so "today" is computed in a
//! configured business time zone instead of the workstation's zone.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::util::DATE_FORMAT;
use crate::validation::ValidationError;

/// Time zone the backend runs in unless configured otherwise
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    tz: Tz,
}

impl BusinessCalendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build from an IANA zone name such as `America/Sao_Paulo`
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ValidationError::new("timezone", format!("Fuso horário inválido: {name}")))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Current calendar day in the business time zone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

/// Parse a date field (YYYY-MM-DD)
pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::new(field, format!("Data inválida: {}", raw.trim())))
}
