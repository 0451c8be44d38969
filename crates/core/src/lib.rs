//! `boxoffice-core` — purchasing foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{InvalidPurchase, PurchaseResult, Violation};
pub use id::{AccountId, PurchaseId};
pub use money::Money;
pub use value_object::ValueObject;
