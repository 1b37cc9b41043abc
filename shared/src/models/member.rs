//! Member Model (associado)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Member entity as returned by the backend (credential stripped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// CPF, the member's tax ID
    #[serde(rename = "cpf_associado")]
    pub cpf: String,
    #[serde(rename = "nom_associado")]
    pub name: String,
    /// Birth date as stored by the backend (YYYY-MM-DD when entered through the form)
    #[serde(rename = "dtn_associado")]
    pub birth_date: String,
    #[serde(rename = "end_associado")]
    pub address: String,
    #[serde(rename = "bairro_associado")]
    pub district: String,
    #[serde(rename = "cep_associado")]
    pub postal_code: String,
    #[serde(rename = "cid_associado")]
    pub city: String,
    #[serde(rename = "uf_associado")]
    pub state: String,
    #[serde(rename = "cel_associado")]
    pub phone: String,
    #[serde(rename = "email_associado")]
    pub email: String,
}

/// Register member payload (`POST /auth/register/associado`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MemberRegistration {
    #[serde(rename = "cpf_associado")]
    #[validate(length(min = 1, message = "CPF é obrigatório"))]
    pub cpf: String,
    #[serde(rename = "nom_associado")]
    #[validate(length(min = 1, message = "Nome Completo é obrigatório"))]
    pub name: String,
    #[serde(rename = "dtn_associado")]
    #[validate(length(min = 1, message = "Data de Nascimento é obrigatória"))]
    pub birth_date: String,
    #[serde(rename = "end_associado")]
    #[validate(length(min = 1, message = "Endereço é obrigatório"))]
    pub address: String,
    #[serde(rename = "bairro_associado")]
    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    pub district: String,
    #[serde(rename = "cep_associado")]
    #[validate(length(min = 1, message = "CEP é obrigatório"))]
    pub postal_code: String,
    #[serde(rename = "cid_associado")]
    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    pub city: String,
    #[serde(rename = "uf_associado")]
    #[validate(length(min = 1, max = 2, message = "UF deve ter até 2 caracteres"))]
    pub state: String,
    #[serde(rename = "cel_associado")]
    #[validate(length(min = 1, message = "Celular é obrigatório"))]
    pub phone: String,
    #[serde(rename = "email_associado")]
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[serde(rename = "sen_associado")]
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}
