//! Shared types for the Cupom client
//!
//! Wire models of the coupon backend, auth DTOs, coupon status derivation,
//! the business calendar used for "today" and client-side form validation.
//! These types are shared between cupom-client and cupom-tui.

pub mod client;
pub mod models;
pub mod response;
pub mod status;
pub mod time;
pub mod util;
pub mod validation;

// Re-exports
pub use client::{AuthenticatedUser, LoginRequest, LoginResponse, UserType};
pub use models::{
    Category, Coupon, CouponCreate, Member, MemberRegistration, Merchant, MerchantRegistration,
    Reservation,
};
pub use response::{ActionResponse, ErrorBody};
pub use status::{CouponStatus, StatusFilter};
pub use time::BusinessCalendar;
pub use validation::ValidationError;
