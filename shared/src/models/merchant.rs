//! Merchant Model (comércio)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Merchant entity as returned by the backend (credential stripped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// CNPJ, the merchant's tax ID
    #[serde(rename = "cnpj_comercio")]
    pub cnpj: String,
    #[serde(rename = "id_categoria")]
    pub category_id: String,
    #[serde(rename = "raz_social_comercio")]
    pub legal_name: String,
    #[serde(rename = "nom_fantasia_comercio")]
    pub trade_name: String,
    #[serde(rename = "end_comercio")]
    pub address: String,
    #[serde(rename = "bairro_comercio")]
    pub district: String,
    #[serde(rename = "cep_comercio")]
    pub postal_code: String,
    #[serde(rename = "cid_comercio")]
    pub city: String,
    #[serde(rename = "uf_comercio")]
    pub state: String,
    #[serde(rename = "con_comercio")]
    pub phone: String,
    #[serde(rename = "email_comercio")]
    pub email: String,
}

/// Register merchant payload (`POST /auth/register/comercio`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MerchantRegistration {
    #[serde(rename = "cnpj_comercio")]
    #[validate(length(min = 1, message = "CNPJ é obrigatório"))]
    pub cnpj: String,
    #[serde(rename = "id_categoria")]
    #[validate(length(min = 1, message = "Categoria é obrigatória"))]
    pub category_id: String,
    #[serde(rename = "raz_social_comercio")]
    #[validate(length(min = 1, message = "Razão Social é obrigatória"))]
    pub legal_name: String,
    #[serde(rename = "nom_fantasia_comercio")]
    #[validate(length(min = 1, message = "Nome Fantasia é obrigatório"))]
    pub trade_name: String,
    #[serde(rename = "end_comercio")]
    #[validate(length(min = 1, message = "Endereço é obrigatório"))]
    pub address: String,
    #[serde(rename = "bairro_comercio")]
    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    pub district: String,
    #[serde(rename = "cep_comercio")]
    #[validate(length(min = 1, message = "CEP é obrigatório"))]
    pub postal_code: String,
    #[serde(rename = "cid_comercio")]
    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    pub city: String,
    #[serde(rename = "uf_comercio")]
    #[validate(length(min = 1, max = 2, message = "UF deve ter até 2 caracteres"))]
    pub state: String,
    #[serde(rename = "con_comercio")]
    #[validate(length(min = 1, message = "Telefone de Contato é obrigatório"))]
    pub phone: String,
    #[serde(rename = "email_comercio")]
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[serde(rename = "sen_comercio")]
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}
