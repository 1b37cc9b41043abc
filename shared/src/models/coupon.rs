//! Coupon Model (cupom)

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::CouponStatus;
use crate::util::timestamp_opt;

/// Coupon entity
///
/// The listing endpoints enrich the stored coupon: the member-facing lists
/// add the merchant's trade name and category name, the merchant's "used"
/// list adds the usage timestamp and the redeeming member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Redemption code (12 upper-case hex chars)
    #[serde(rename = "num_cupom")]
    pub code: String,
    #[serde(rename = "tit_cupom")]
    pub title: String,
    #[serde(rename = "cnpj_comercio")]
    pub merchant_cnpj: String,
    #[serde(rename = "dta_emissao_cupom")]
    pub issued_on: NaiveDate,
    #[serde(rename = "dta_inicio_cupom")]
    pub start_date: NaiveDate,
    #[serde(rename = "dta_termino_cupom")]
    pub end_date: NaiveDate,
    #[serde(rename = "per_desc_cupom")]
    pub discount_percent: f64,
    #[serde(
        rename = "nom_fantasia_comercio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merchant_name: Option<String>,
    #[serde(rename = "nom_categoria", default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(rename = "reservado", default)]
    pub reserved: Option<bool>,
    #[serde(
        rename = "dta_uso",
        default,
        with = "timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub used_at: Option<NaiveDateTime>,
    #[serde(rename = "cpf_associado", default, skip_serializing_if = "Option::is_none")]
    pub member_cpf: Option<String>,
}

impl Coupon {
    pub fn status(&self, today: NaiveDate) -> CouponStatus {
        CouponStatus::derive(self.used_at, self.end_date, today)
    }

    /// Whether `today` falls inside the validity window (inclusive)
    pub fn is_within_window(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    /// Discount formatted like the backend stores it (`15%`, `12.5%`)
    pub fn discount_label(&self) -> String {
        format!("{}%", self.discount_percent)
    }
}

/// Create coupons payload (`POST /cupons?cnpj=`)
///
/// One request issues `quantity` coupons sharing title, window and discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CouponCreate {
    #[serde(rename = "tit_cupom")]
    #[validate(length(min = 1, message = "Título é obrigatório"))]
    pub title: String,
    #[serde(rename = "dta_inicio_cupom")]
    pub start_date: NaiveDate,
    #[serde(rename = "dta_termino_cupom")]
    pub end_date: NaiveDate,
    #[serde(rename = "per_desc_cupom")]
    #[validate(range(min = 1.0, max = 100.0, message = "Desconto deve estar entre 1 e 100"))]
    pub discount_percent: f64,
    #[serde(rename = "qtd_cupons")]
    #[validate(range(min = 1, message = "Quantidade deve ser no mínimo 1"))]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_available_listing_entry() {
        let raw = json!({
            "num_cupom": "A1B2C3D4E5F6",
            "tit_cupom": "Pizza em dobro",
            "cnpj_comercio": "11222333000181",
            "dta_emissao_cupom": "2025-05-01",
            "dta_inicio_cupom": "2025-05-02",
            "dta_termino_cupom": "2025-05-31",
            "per_desc_cupom": 25.0,
            "nom_fantasia_comercio": "Pizzaria Napoli",
            "nom_categoria": "Alimentação"
        });
        let coupon: Coupon = serde_json::from_value(raw).unwrap();
        assert_eq!(coupon.code, "A1B2C3D4E5F6");
        assert_eq!(coupon.merchant_name.as_deref(), Some("Pizzaria Napoli"));
        assert_eq!(coupon.used_at, None);
        assert_eq!(coupon.discount_label(), "25%");

        let today = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        assert!(coupon.is_within_window(today));
        assert_eq!(coupon.status(today), CouponStatus::Active);
    }

    #[test]
    fn merchant_used_listing_carries_usage() {
        let raw = json!({
            "num_cupom": "FFEE00112233",
            "tit_cupom": "Corte + barba",
            "cnpj_comercio": "11222333000181",
            "dta_emissao_cupom": "2025-01-10",
            "dta_inicio_cupom": "2025-01-10",
            "dta_termino_cupom": "2025-01-20",
            "per_desc_cupom": 10,
            "dta_uso": "2025-01-15 18:42:07",
            "cpf_associado": "52998224725"
        });
        let coupon: Coupon = serde_json::from_value(raw).unwrap();
        assert_eq!(coupon.member_cpf.as_deref(), Some("52998224725"));
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(coupon.status(today), CouponStatus::Used);
    }

    #[test]
    fn create_payload_uses_wire_names() {
        let payload = CouponCreate {
            title: "Semana do cliente".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            discount_percent: 15.0,
            quantity: 3,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["tit_cupom"], "Semana do cliente");
        assert_eq!(value["dta_inicio_cupom"], "2025-09-01");
        assert_eq!(value["dta_termino_cupom"], "2025-09-15");
        assert_eq!(value["per_desc_cupom"], 15.0);
        assert_eq!(value["qtd_cupons"], 3);
    }
}
