//! Third-party gateway contracts (seat booking, payments).
//!
//! The purchase service only depends on the traits here. Real integrations
//! live outside this workspace; [`InMemoryGateway`] stands in for both in
//! tests and local runs.

pub mod in_memory;
pub mod payment;
pub mod seat_booking;

pub use in_memory::{GatewayCall, InMemoryGateway};
pub use payment::TicketPaymentService;
pub use seat_booking::SeatReservationService;
