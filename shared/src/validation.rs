//! Client-side form validation
//!
//! Mirrors the constraints of the input forms only: required fields, max
//! lengths, e-mail shape and the numeric bounds of the coupon form. Semantic
//! rules (duplicate tax IDs, check digits, date ordering) belong to the
//! backend.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::CouponCreate;
use crate::time::parse_date;

/// A form rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Campo inválido: {field}"));
                    (field.to_string(), message)
                })
            })
            .collect();
        fields.sort();
        match fields.into_iter().next() {
            Some((field, message)) => Self::new(field, message),
            None => Self::new("form", "Formulário inválido"),
        }
    }
}

/// Validate a derived form, reporting the first failing field
pub fn check<T: Validate>(form: &T) -> Result<(), ValidationError> {
    form.validate().map_err(ValidationError::from)
}

/// Raw text of the coupon creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponDraft {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub discount_percent: String,
    pub quantity: String,
}

impl CouponDraft {
    /// Turn the form into a request payload, or reject it
    pub fn parse(&self) -> Result<CouponCreate, ValidationError> {
        let start_date = parse_date(&self.start_date, "dta_inicio_cupom")?;
        let end_date = parse_date(&self.end_date, "dta_termino_cupom")?;

        let discount_percent = self
            .discount_percent
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .ok_or_else(|| {
                ValidationError::new("per_desc_cupom", "Desconto deve estar entre 1 e 100")
            })?;

        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|q| u32::try_from(q).ok())
            .ok_or_else(|| ValidationError::new("qtd_cupons", "Quantidade deve ser no mínimo 1"))?;

        let payload = CouponCreate {
            title: self.title.trim().to_string(),
            start_date,
            end_date,
            discount_percent,
            quantity,
        };
        check(&payload)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberRegistration;

    fn draft(discount: &str, quantity: &str) -> CouponDraft {
        CouponDraft {
            title: "Black Friday".into(),
            start_date: "2025-11-20".into(),
            end_date: "2025-11-30".into(),
            discount_percent: discount.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(draft("1", "1").parse().unwrap().discount_percent, 1.0);
        let full = draft("100", "50").parse().unwrap();
        assert_eq!(full.discount_percent, 100.0);
        assert_eq!(full.quantity, 50);
        assert_eq!(draft("12,5", "2").parse().unwrap().discount_percent, 12.5);
    }

    #[test]
    fn rejects_discount_outside_range() {
        for bad in ["0", "100.5", "-5", "abc", "NaN", ""] {
            let err = draft(bad, "1").parse().unwrap_err();
            assert_eq!(err.message, "Desconto deve estar entre 1 e 100", "input {bad:?}");
        }
    }

    #[test]
    fn rejects_quantity_below_one() {
        for bad in ["0", "-1", "", "1.5"] {
            let err = draft("10", bad).parse().unwrap_err();
            assert_eq!(err.message, "Quantidade deve ser no mínimo 1", "input {bad:?}");
        }
    }

    #[test]
    fn requires_title_and_dates() {
        let mut d = draft("10", "1");
        d.title = "   ".into();
        assert_eq!(d.parse().unwrap_err().message, "Título é obrigatório");

        let mut d = draft("10", "1");
        d.end_date = "30/11/2025".into();
        assert_eq!(d.parse().unwrap_err().field, "dta_termino_cupom");
    }

    #[test]
    fn registration_mirrors_form_constraints() {
        let mut form = MemberRegistration {
            cpf: "52998224725".into(),
            name: "João Lima".into(),
            birth_date: "1988-07-01".into(),
            address: "Av. Brasil, 100".into(),
            district: "Centro".into(),
            postal_code: "20000-000".into(),
            city: "Rio de Janeiro".into(),
            state: "RJ".into(),
            phone: "21988887777".into(),
            email: "joao@example.com".into(),
            password: "s3nha".into(),
        };
        assert!(check(&form).is_ok());

        form.state = "RJX".into();
        assert_eq!(check(&form).unwrap_err().message, "UF deve ter até 2 caracteres");

        form.state = "RJ".into();
        form.email = "joao.example.com".into();
        assert_eq!(check(&form).unwrap_err().message, "Email inválido");
    }
}
