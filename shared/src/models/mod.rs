//! Data models
//!
//! Entities are owned by the coupon backend; the client only deserializes
//! them. Wire names are the backend's Portuguese field names, mapped to
//! English Rust names with `#[serde(rename)]`.

pub mod category;
pub mod coupon;
pub mod member;
pub mod merchant;
pub mod reservation;

// Re-exports
pub use category::*;
pub use coupon::*;
pub use member::*;
pub use merchant::*;
pub use reservation::*;
