//! Ticket purchase service.
//!
//! Composes the purchase rules from `boxoffice-tickets` with the seat booking
//! and payment gateways. This is the only place where validation turns into
//! side effects.

pub mod config;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use service::{PurchaseReceipt, TicketService, TicketServiceImpl};
