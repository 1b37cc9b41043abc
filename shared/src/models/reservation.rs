//! Reservation Model (cupom_associado)

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Coupon;
use crate::status::CouponStatus;
use crate::util::{timestamp, timestamp_opt};

/// A coupon held by a member
///
/// A coupon has at most one reservation; the backend enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "id_cupom_associado")]
    pub id: String,
    #[serde(rename = "num_cupom")]
    pub coupon_code: String,
    #[serde(rename = "cpf_associado")]
    pub member_cpf: String,
    #[serde(rename = "dta_cupom_associado", with = "timestamp")]
    pub reserved_at: NaiveDateTime,
    #[serde(rename = "dta_uso_cupom_associado", default, with = "timestamp_opt")]
    pub used_at: Option<NaiveDateTime>,
    #[serde(rename = "cupom_info", default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

impl Reservation {
    /// Display status; `None` when the backend did not embed the coupon
    pub fn status(&self, today: NaiveDate) -> Option<CouponStatus> {
        match (&self.coupon, self.used_at) {
            (_, Some(used_at)) => Some(CouponStatus::derive(Some(used_at), NaiveDate::MIN, today)),
            (Some(coupon), None) => Some(CouponStatus::derive(None, coupon.end_date, today)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reservation(end: &str, used: serde_json::Value) -> Reservation {
        serde_json::from_value(json!({
            "id_cupom_associado": "5f0c6a3e-1d7b-4a53-9d57-0f6f3f0c9b21",
            "num_cupom": "0A1B2C3D4E5F",
            "cpf_associado": "52998224725",
            "dta_cupom_associado": "2025-04-02 10:00:00",
            "dta_uso_cupom_associado": used,
            "cupom_info": {
                "num_cupom": "0A1B2C3D4E5F",
                "tit_cupom": "Café grátis",
                "cnpj_comercio": "11222333000181",
                "dta_emissao_cupom": "2025-04-01",
                "dta_inicio_cupom": "2025-04-01",
                "dta_termino_cupom": end,
                "per_desc_cupom": 100.0
            }
        }))
        .unwrap()
    }

    #[test]
    fn badge_follows_usage_then_end_date() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();

        let used = reservation("2025-04-10", json!("2025-04-05 12:00:00"));
        assert_eq!(used.status(today), Some(CouponStatus::Used));

        let expired = reservation("2025-04-19", json!(null));
        assert_eq!(expired.status(today), Some(CouponStatus::Expired));

        let active = reservation("2025-04-20", json!(null));
        assert_eq!(active.status(today), Some(CouponStatus::Active));
    }

    #[test]
    fn missing_coupon_info_has_no_badge_unless_used() {
        let mut r = reservation("2025-04-30", json!(null));
        r.coupon = None;
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        assert_eq!(r.status(today), None);
        r.used_at = NaiveDate::from_ymd_opt(2025, 4, 3).and_then(|d| d.and_hms_opt(8, 0, 0));
        assert_eq!(r.status(today), Some(CouponStatus::Used));
    }
}
