//! User-facing strings
//!
//! Fallbacks are shown when a failed call carries no server detail.

pub const LOGIN_FAILED: &str = "Erro ao fazer login";
pub const REGISTER_FAILED: &str = "Erro ao realizar cadastro";
pub const CREATE_FAILED: &str = "Erro ao criar cupom";
pub const REGISTER_USE_FAILED: &str = "Erro ao registrar uso";
pub const RESERVE_FAILED: &str = "Erro ao reservar cupom";
pub const LOAD_COUPONS_FAILED: &str = "Erro ao carregar cupons";
pub const LOAD_RESERVATIONS_FAILED: &str = "Erro ao carregar cupons reservados";

pub const REGISTERED: &str = "Cadastro realizado com sucesso! Faça login.";
pub const USE_REGISTERED: &str = "Uso registrado com sucesso!";
pub const RESERVED: &str = "Cupom reservado com sucesso!";

pub const CONFIRM_USE: &str = "Confirma o uso deste cupom?";
pub const CONFIRM_RESERVE: &str = "Deseja reservar este cupom?";

pub const LOADING: &str = "Carregando...";
pub const NO_COUPONS: &str = "Nenhum cupom encontrado";
pub const NO_AVAILABLE: &str = "Nenhum cupom disponível no momento";

/// Success line after creating coupons
pub fn created(server_message: Option<&str>) -> String {
    format!("Sucesso! {}", server_message.unwrap_or("Cupons criados"))
}
