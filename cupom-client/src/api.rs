//! Coupon backend API
//!
//! [`CouponApi`] is the seam between the views and the network: the TUI
//! holds an `Arc<dyn CouponApi>`, tests substitute their own
//! implementation.

use async_trait::async_trait;
use shared::validation;
use shared::{
    ActionResponse, AuthenticatedUser, Category, Coupon, CouponCreate, LoginRequest, LoginResponse,
    MemberRegistration, MerchantRegistration, Reservation, StatusFilter,
};

use crate::{ClientError, ClientResult, HttpClient};

/// Operations exposed by the coupon backend
#[async_trait]
pub trait CouponApi: Send + Sync {
    // ========== Auth API ==========

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthenticatedUser>;

    /// `POST /auth/register/associado`
    async fn register_member(&self, form: &MemberRegistration) -> ClientResult<ActionResponse>;

    /// `POST /auth/register/comercio`
    async fn register_merchant(&self, form: &MerchantRegistration)
    -> ClientResult<ActionResponse>;

    // ========== Member API ==========

    /// `GET /categorias`
    async fn categories(&self) -> ClientResult<Vec<Category>>;

    /// `GET /cupons/disponiveis?categoria=`
    async fn available_coupons(&self, category: Option<&str>) -> ClientResult<Vec<Coupon>>;

    /// `GET /cupons/reservados?cpf=&filtro=`
    async fn reservations(&self, cpf: &str, filter: StatusFilter)
    -> ClientResult<Vec<Reservation>>;

    /// `POST /cupons/reservar?num_cupom=&cpf=`
    async fn reserve(&self, code: &str, cpf: &str) -> ClientResult<ActionResponse>;

    // ========== Merchant API ==========

    /// `GET /cupons?cnpj=&filtro=`
    async fn merchant_coupons(&self, cnpj: &str, filter: StatusFilter)
    -> ClientResult<Vec<Coupon>>;

    /// `POST /cupons?cnpj=`
    async fn create_coupons(&self, cnpj: &str, payload: &CouponCreate)
    -> ClientResult<ActionResponse>;

    /// `POST /cupons/registrar-uso?num_cupom=&cnpj=`
    async fn register_use(&self, code: &str, cnpj: &str) -> ClientResult<ActionResponse>;
}

/// A 2xx answer can still carry `success: false`
fn ensure_success(response: ActionResponse) -> ClientResult<ActionResponse> {
    if response.success {
        Ok(response)
    } else {
        Err(ClientError::Rejected(response.message))
    }
}

#[async_trait]
impl CouponApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthenticatedUser> {
        validation::check(request)?;
        let response: LoginResponse = self.post("/auth/login", &[], request).await?;
        if !response.success {
            return Err(ClientError::Rejected(response.message));
        }
        let user = response
            .into_user()
            .map_err(|e| ClientError::InvalidResponse(format!("user record: {e}")))?;
        tracing::info!(tipo = %user.user_type(), id = user.tax_id(), "login succeeded");
        Ok(user)
    }

    async fn register_member(&self, form: &MemberRegistration) -> ClientResult<ActionResponse> {
        validation::check(form)?;
        let response: ActionResponse = self.post("/auth/register/associado", &[], form).await?;
        ensure_success(response)
    }

    async fn register_merchant(
        &self,
        form: &MerchantRegistration,
    ) -> ClientResult<ActionResponse> {
        validation::check(form)?;
        let response: ActionResponse = self.post("/auth/register/comercio", &[], form).await?;
        ensure_success(response)
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/categorias", &[]).await
    }

    async fn available_coupons(&self, category: Option<&str>) -> ClientResult<Vec<Coupon>> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => {
                self.get("/cupons/disponiveis", &[("categoria", category)])
                    .await
            }
            None => self.get("/cupons/disponiveis", &[]).await,
        }
    }

    async fn reservations(
        &self,
        cpf: &str,
        filter: StatusFilter,
    ) -> ClientResult<Vec<Reservation>> {
        self.get(
            "/cupons/reservados",
            &[("cpf", cpf), ("filtro", filter.as_str())],
        )
        .await
    }

    async fn reserve(&self, code: &str, cpf: &str) -> ClientResult<ActionResponse> {
        let response: ActionResponse = self
            .post_empty("/cupons/reservar", &[("num_cupom", code), ("cpf", cpf)])
            .await?;
        ensure_success(response)
    }

    async fn merchant_coupons(&self, cnpj: &str, filter: StatusFilter) -> ClientResult<Vec<Coupon>> {
        self.get("/cupons", &[("cnpj", cnpj), ("filtro", filter.as_str())])
            .await
    }

    async fn create_coupons(
        &self,
        cnpj: &str,
        payload: &CouponCreate,
    ) -> ClientResult<ActionResponse> {
        validation::check(payload)?;
        let response: ActionResponse = self.post("/cupons", &[("cnpj", cnpj)], payload).await?;
        ensure_success(response)
    }

    async fn register_use(&self, code: &str, cnpj: &str) -> ClientResult<ActionResponse> {
        let response: ActionResponse = self
            .post_empty("/cupons/registrar-uso", &[("num_cupom", code), ("cnpj", cnpj)])
            .await?;
        ensure_success(response)
    }
}
