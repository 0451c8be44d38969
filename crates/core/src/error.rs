//! Purchase error model.

use thiserror::Error;

/// Result type used across the purchasing layer.
pub type PurchaseResult<T> = Result<T, InvalidPurchase>;

/// The single rejection kind for a ticket purchase.
///
/// Any broken business rule surfaces as this error, before any seat is
/// reserved or any payment is taken. The attached [`Violation`] is
/// diagnostic: it names the rule that fired first, for logs and messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid purchase: {violation}")]
pub struct InvalidPurchase {
    violation: Violation,
}

impl InvalidPurchase {
    pub fn new(violation: Violation) -> Self {
        Self { violation }
    }

    pub fn violation(&self) -> &Violation {
        &self.violation
    }
}

impl From<Violation> for InvalidPurchase {
    fn from(violation: Violation) -> Self {
        Self::new(violation)
    }
}

/// Which purchase rule was broken.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Account identifiers must be strictly positive.
    #[error("account id {0} is not positive")]
    InvalidAccount(i64),

    /// The call carried no ticket requests at all.
    #[error("no ticket requests supplied")]
    NoRequests,

    /// A single request asked for zero or a negative number of tickets.
    #[error("ticket request quantity {0} is not positive")]
    NonPositiveQuantity(i32),

    /// Total tickets across all requests is above the per-purchase limit.
    #[error("tried to purchase {requested} tickets, maximum is {max}")]
    TicketLimitExceeded { requested: i64, max: u32 },

    /// Total tickets across all requests is zero.
    #[error("purchase contains no tickets")]
    NoTickets,

    /// Every infant sits on an adult's lap.
    #[error("{infants} infant tickets but only {adults} adult tickets")]
    InfantsExceedAdults { infants: i64, adults: i64 },

    /// Child and infant tickets need an accompanying adult ticket.
    #[error("no adult ticket in purchase")]
    NoAdult,

    /// The total price does not fit in the money representation.
    #[error("total price overflows for {tickets} tickets")]
    PriceOverflow { tickets: i64 },
}
