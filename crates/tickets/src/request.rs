use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

use crate::category::TicketCategory;

/// A request for `quantity` tickets of one category.
///
/// Immutable. The quantity is taken as supplied by the caller and is not
/// checked here: a zero or negative quantity is a valid *request* that the
/// purchase rules will reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: i32,
}

impl TicketRequest {
    pub const fn new(category: TicketCategory, quantity: i32) -> Self {
        Self { category, quantity }
    }

    pub const fn adult(quantity: i32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    pub const fn child(quantity: i32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    pub const fn infant(quantity: i32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl ValueObject for TicketRequest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_keeps_non_positive_quantities() {
        let req = TicketRequest::adult(-5);
        assert_eq!(req.category(), TicketCategory::Adult);
        assert_eq!(req.quantity(), -5);
    }

    #[test]
    fn equal_by_value() {
        assert_eq!(TicketRequest::child(2), TicketRequest::new(TicketCategory::Child, 2));
        assert_ne!(TicketRequest::child(2), TicketRequest::infant(2));
    }

    #[test]
    fn deserializes_from_json() {
        let req: TicketRequest =
            serde_json::from_str(r#"{"category":"ADULT","quantity":3}"#).unwrap();
        assert_eq!(req, TicketRequest::adult(3));
    }
}
