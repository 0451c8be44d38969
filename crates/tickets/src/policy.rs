use serde::{Deserialize, Serialize};

use boxoffice_core::Money;

use crate::category::TicketCategory;

/// Most tickets that may be bought in a single purchase.
pub const DEFAULT_MAX_TICKETS: u32 = 20;

/// Prices and limits applied to a purchase.
///
/// | Ticket Type | Price |
/// |-------------|-------|
/// | INFANT      | £0    |
/// | CHILD       | £10   |
/// | ADULT       | £20   |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub max_tickets: u32,
    pub adult_price: Money,
    pub child_price: Money,
    pub infant_price: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            adult_price: Money::from_units(20),
            child_price: Money::from_units(10),
            infant_price: Money::ZERO,
        }
    }
}

impl PricingPolicy {
    pub fn unit_price(&self, category: TicketCategory) -> Money {
        match category {
            TicketCategory::Adult => self.adult_price,
            TicketCategory::Child => self.child_price,
            TicketCategory::Infant => self.infant_price,
        }
    }

    pub fn with_max_tickets(mut self, max: u32) -> Self {
        self.max_tickets = max;
        self
    }

    pub fn with_price(mut self, category: TicketCategory, price: Money) -> Self {
        match category {
            TicketCategory::Adult => self.adult_price = price,
            TicketCategory::Child => self.child_price = price,
            TicketCategory::Infant => self.infant_price = price,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.unit_price(TicketCategory::Adult), Money::from_units(20));
        assert_eq!(policy.unit_price(TicketCategory::Child), Money::from_units(10));
        assert_eq!(policy.unit_price(TicketCategory::Infant), Money::ZERO);
        assert_eq!(policy.max_tickets, 20);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"child_price":12}"#).unwrap();
        assert_eq!(policy.child_price, Money::from_units(12));
        assert_eq!(policy.adult_price, Money::from_units(20));
        assert_eq!(policy.max_tickets, DEFAULT_MAX_TICKETS);
    }

    #[test]
    fn builder_overrides_single_price() {
        let policy = PricingPolicy::default()
            .with_price(TicketCategory::Infant, Money::from_units(2))
            .with_max_tickets(5);
        assert_eq!(policy.infant_price, Money::from_units(2));
        assert_eq!(policy.adult_price, Money::from_units(20));
        assert_eq!(policy.max_tickets, 5);
    }
}
