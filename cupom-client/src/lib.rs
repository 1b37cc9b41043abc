//! Cupom Client - HTTP client for the coupon backend
//!
//! Typed calls to the coupon REST API, the client configuration, the error
//! type with server-detail extraction and the authenticated session.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::CouponApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;

pub use reqwest::StatusCode;

// Re-export shared types for convenience
pub use shared::{
    ActionResponse, AuthenticatedUser, BusinessCalendar, Category, Coupon, CouponCreate,
    CouponStatus, LoginRequest, Member, MemberRegistration, Merchant, MerchantRegistration,
    Reservation, StatusFilter, UserType,
};
