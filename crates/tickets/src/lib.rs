//! Ticket purchasing domain module.
//!
//! This crate contains the business rules for buying tickets: categories,
//! pricing, aggregation and validation, implemented purely as deterministic
//! domain logic (no IO, no gateways, no logging).

pub mod category;
pub mod policy;
pub mod request;
pub mod rules;
pub mod tally;

pub use category::TicketCategory;
pub use policy::{DEFAULT_MAX_TICKETS, PricingPolicy};
pub use request::TicketRequest;
pub use rules::{ValidatedPurchase, validate_purchase};
pub use tally::TicketTally;
