//! Commands, outcomes and effects
//!
//! Views never talk to the network. A key press yields [`Effect`]s; the app
//! turns `Effect::Request` into a spawned call whose [`Outcome`] is fed back
//! to the current view.

use cupom_client::{
    ActionResponse, AuthenticatedUser, Category, ClientResult, Coupon, CouponApi, CouponCreate,
    LoginRequest, MemberRegistration, MerchantRegistration, Reservation, StatusFilter,
};

/// A backend call requested by a view
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(LoginRequest),
    RegisterMember(MemberRegistration),
    RegisterMerchant(MerchantRegistration),
    LoadCategories,
    LoadAvailable { category: Option<String> },
    LoadReservations { cpf: String, filter: StatusFilter },
    Reserve { code: String, cpf: String },
    LoadMerchantCoupons { cnpj: String, filter: StatusFilter },
    CreateCoupons { cnpj: String, payload: CouponCreate },
    RegisterUse { code: String, cnpj: String },
}

impl Command {
    /// Name for logs; payloads may carry credentials
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::RegisterMember(_) => "register_member",
            Self::RegisterMerchant(_) => "register_merchant",
            Self::LoadCategories => "load_categories",
            Self::LoadAvailable { .. } => "load_available",
            Self::LoadReservations { .. } => "load_reservations",
            Self::Reserve { .. } => "reserve",
            Self::LoadMerchantCoupons { .. } => "load_merchant_coupons",
            Self::CreateCoupons { .. } => "create_coupons",
            Self::RegisterUse { .. } => "register_use",
        }
    }
}

/// Result of a [`Command`]
#[derive(Debug)]
pub enum Outcome {
    LoggedIn(ClientResult<AuthenticatedUser>),
    Registered(ClientResult<ActionResponse>),
    Categories(ClientResult<Vec<Category>>),
    Available(ClientResult<Vec<Coupon>>),
    Reservations(ClientResult<Vec<Reservation>>),
    Reserved(ClientResult<ActionResponse>),
    MerchantCoupons(ClientResult<Vec<Coupon>>),
    Created(ClientResult<ActionResponse>),
    UseRegistered(ClientResult<ActionResponse>),
}

/// What a view asks the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Request(Command),
    /// Login succeeded: start the session and open the dashboard
    Enter(AuthenticatedUser),
    Logout,
    Quit,
}

/// Run a command against the API
pub async fn execute(api: &dyn CouponApi, command: Command) -> Outcome {
    match command {
        Command::Login(request) => Outcome::LoggedIn(api.login(&request).await),
        Command::RegisterMember(form) => Outcome::Registered(api.register_member(&form).await),
        Command::RegisterMerchant(form) => {
            Outcome::Registered(api.register_merchant(&form).await)
        }
        Command::LoadCategories => Outcome::Categories(api.categories().await),
        Command::LoadAvailable { category } => {
            Outcome::Available(api.available_coupons(category.as_deref()).await)
        }
        Command::LoadReservations { cpf, filter } => {
            Outcome::Reservations(api.reservations(&cpf, filter).await)
        }
        Command::Reserve { code, cpf } => Outcome::Reserved(api.reserve(&code, &cpf).await),
        Command::LoadMerchantCoupons { cnpj, filter } => {
            Outcome::MerchantCoupons(api.merchant_coupons(&cnpj, filter).await)
        }
        Command::CreateCoupons { cnpj, payload } => {
            Outcome::Created(api.create_coupons(&cnpj, &payload).await)
        }
        Command::RegisterUse { code, cnpj } => {
            Outcome::UseRegistered(api.register_use(&code, &cnpj).await)
        }
    }
}

/// Request lifecycle of a view: `idle → loading → idle`
///
/// While loading, the control that triggered the call is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

impl Phase {
    pub fn is_loading(self) -> bool {
        self == Phase::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Inline message shown under a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A command waiting for the user's yes/no
#[derive(Debug, Clone, PartialEq)]
pub struct Confirm {
    pub prompt: String,
    pub command: Command,
}
