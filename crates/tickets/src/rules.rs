//! Purchase validation and calculation.
//!
//! Rules run in a fixed order and the first one broken rejects the whole
//! purchase:
//!
//! 1. input validity (positive account id, at least one request, every
//!    quantity positive)
//! 2. capacity (total tickets within `1..=max_tickets`)
//! 3. accompaniment (no more infants than adults)
//! 4. adult presence (at least one adult ticket)

use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, InvalidPurchase, Money, PurchaseResult, Violation};

use crate::policy::PricingPolicy;
use crate::request::TicketRequest;
use crate::tally::TicketTally;

/// A purchase that passed every rule, with its derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPurchase {
    pub account_id: AccountId,
    pub tally: TicketTally,
    pub seats: u32,
    pub total_price: Money,
}

/// Check `requests` for `account_id` against the purchase rules and compute
/// the seats to reserve and the amount to charge.
///
/// Pure: no gateway is touched here.
pub fn validate_purchase(
    account_id: AccountId,
    requests: &[TicketRequest],
    policy: &PricingPolicy,
) -> PurchaseResult<ValidatedPurchase> {
    ensure_valid_input(account_id, requests)?;

    let tally = TicketTally::from_requests(requests);
    ensure_within_limit(&tally, policy)?;
    ensure_infants_accompanied(&tally)?;
    ensure_adult_present(&tally)?;

    // Bounded by `max_tickets` once the capacity rule has passed.
    let seats = u32::try_from(tally.seats()).map_err(|_| limit_exceeded(&tally, policy))?;

    let total_price = tally
        .price(policy)
        .ok_or(Violation::PriceOverflow {
            tickets: tally.total(),
        })?;

    Ok(ValidatedPurchase {
        account_id,
        tally,
        seats,
        total_price,
    })
}

fn ensure_valid_input(account_id: AccountId, requests: &[TicketRequest]) -> PurchaseResult<()> {
    if !account_id.is_valid() {
        return Err(Violation::InvalidAccount(account_id.get()).into());
    }
    if requests.is_empty() {
        return Err(Violation::NoRequests.into());
    }
    if let Some(bad) = requests.iter().find(|r| r.quantity() <= 0) {
        return Err(Violation::NonPositiveQuantity(bad.quantity()).into());
    }
    Ok(())
}

fn ensure_within_limit(tally: &TicketTally, policy: &PricingPolicy) -> PurchaseResult<()> {
    let total = tally.total();
    if total > i64::from(policy.max_tickets) {
        return Err(limit_exceeded(tally, policy));
    }
    if total <= 0 {
        return Err(Violation::NoTickets.into());
    }
    Ok(())
}

fn ensure_infants_accompanied(tally: &TicketTally) -> PurchaseResult<()> {
    if tally.infants > tally.adults {
        return Err(Violation::InfantsExceedAdults {
            infants: tally.infants,
            adults: tally.adults,
        }
        .into());
    }
    Ok(())
}

fn ensure_adult_present(tally: &TicketTally) -> PurchaseResult<()> {
    if tally.adults <= 0 {
        return Err(Violation::NoAdult.into());
    }
    Ok(())
}

fn limit_exceeded(tally: &TicketTally, policy: &PricingPolicy) -> InvalidPurchase {
    Violation::TicketLimitExceeded {
        requested: tally.total(),
        max: policy.max_tickets,
    }
    .into()
}
