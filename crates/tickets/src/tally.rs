//! Per-category aggregation of ticket requests.

use serde::{Deserialize, Serialize};

use boxoffice_core::Money;

use crate::category::TicketCategory;
use crate::policy::PricingPolicy;
use crate::request::TicketRequest;

/// Ticket counts summed by category.
///
/// Built in one pass over the requests; request order does not matter.
/// Counts are widened to `i64` so that summing caller-supplied `i32`
/// quantities cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTally {
    pub adults: i64,
    pub children: i64,
    pub infants: i64,
}

impl TicketTally {
    pub fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketRequest>,
    {
        requests.into_iter().fold(Self::default(), |mut tally, req| {
            *tally.slot_mut(req.category()) += i64::from(req.quantity());
            tally
        })
    }

    pub fn count(&self, category: TicketCategory) -> i64 {
        match category {
            TicketCategory::Adult => self.adults,
            TicketCategory::Child => self.children,
            TicketCategory::Infant => self.infants,
        }
    }

    /// Total tickets across all categories.
    pub fn total(&self) -> i64 {
        self.adults + self.children + self.infants
    }

    /// Seats to reserve: every ticket except infants.
    pub fn seats(&self) -> i64 {
        TicketCategory::ALL
            .into_iter()
            .filter(|c| c.occupies_seat())
            .map(|c| self.count(c))
            .sum()
    }

    /// Total price under `policy`, or `None` if it overflows.
    ///
    /// Only meaningful for a tally of validated (positive) requests; a
    /// negative count contributes nothing.
    pub fn price(&self, policy: &PricingPolicy) -> Option<Money> {
        TicketCategory::ALL
            .into_iter()
            .try_fold(Money::ZERO, |total, c| {
                let count = u64::try_from(self.count(c)).unwrap_or(0);
                total.checked_add(policy.unit_price(c).checked_times(count)?)
            })
    }

    fn slot_mut(&mut self, category: TicketCategory) -> &mut i64 {
        match category {
            TicketCategory::Adult => &mut self.adults,
            TicketCategory::Child => &mut self.children,
            TicketCategory::Infant => &mut self.infants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_repeated_categories() {
        let requests = [
            TicketRequest::adult(5),
            TicketRequest::infant(1),
            TicketRequest::adult(4),
        ];
        let tally = TicketTally::from_requests(&requests);
        assert_eq!(tally.adults, 9);
        assert_eq!(tally.children, 0);
        assert_eq!(tally.infants, 1);
        assert_eq!(tally.total(), 10);
    }

    #[test]
    fn seats_exclude_infants() {
        let requests = [
            TicketRequest::adult(4),
            TicketRequest::child(2),
            TicketRequest::infant(3),
        ];
        let tally = TicketTally::from_requests(&requests);
        assert_eq!(tally.seats(), 6);
        assert_eq!(tally.price(&PricingPolicy::default()), Some(Money::from_units(100)));
    }

    #[test]
    fn empty_tally_is_zero() {
        let requests: [TicketRequest; 0] = [];
        let tally = TicketTally::from_requests(&requests);
        assert_eq!(tally, TicketTally::default());
        assert_eq!(tally.price(&PricingPolicy::default()), Some(Money::ZERO));
    }

    #[test]
    fn price_overflow_is_none() {
        let policy = PricingPolicy::default()
            .with_price(TicketCategory::Adult, Money::from_units(u64::MAX / 2 + 1));
        let tally = TicketTally::from_requests(&[TicketRequest::adult(1), TicketRequest::adult(1)]);
        assert_eq!(tally.price(&policy), None);

        let policy = PricingPolicy::default()
            .with_price(TicketCategory::Adult, Money::from_units(u64::MAX))
            .with_price(TicketCategory::Child, Money::from_units(1));
        let tally = TicketTally::from_requests(&[TicketRequest::adult(1), TicketRequest::child(1)]);
        assert_eq!(tally.price(&policy), None);
    }

    #[test]
    fn wide_counts_do_not_overflow() {
        let requests = [TicketRequest::adult(i32::MAX), TicketRequest::adult(i32::MAX)];
        let tally = TicketTally::from_requests(&requests);
        assert_eq!(tally.adults, 2 * i64::from(i32::MAX));
    }
}
