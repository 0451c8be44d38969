//! Purchase orchestration: validate, reserve, charge.
//!
//! ```text
//! purchase_tickets(account, requests)
//!   ↓
//! 1. Validate + calculate (pure, boxoffice-tickets)
//!   ↓ (any broken rule: InvalidPurchase, no gateway call)
//! 2. Reserve seats
//!   ↓
//! 3. Take payment
//!   ↓
//! PurchaseReceipt
//! ```
//!
//! Steps 2 and 3 are not transactional. If payment fails after seats were
//! reserved nothing is undone; the gateways expose no failure channel to
//! react to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{Span, debug, info, instrument};

use boxoffice_core::{AccountId, Money, PurchaseId, PurchaseResult};
use boxoffice_gateways::{SeatReservationService, TicketPaymentService};
use boxoffice_tickets::{PricingPolicy, TicketRequest, TicketTally, validate_purchase};

use crate::config::ServiceConfig;

/// Public purchase entry point.
pub trait TicketService {
    /// Buy `requests` for `account_id`.
    ///
    /// On success seats have been reserved and payment taken. On error
    /// neither gateway has been called.
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> PurchaseResult<PurchaseReceipt>;
}

/// Outcome of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub tally: TicketTally,
    pub seats_reserved: u32,
    pub amount_charged: Money,
    pub completed_at: DateTime<Utc>,
}

/// [`TicketService`] backed by a payment gateway and a seat booking gateway.
#[derive(Debug)]
pub struct TicketServiceImpl<P, S> {
    payments: P,
    seats: S,
    policy: PricingPolicy,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Service with the default pricing policy.
    pub fn new(payments: P, seats: S) -> Self {
        Self::with_config(payments, seats, ServiceConfig::default())
    }

    pub fn with_config(payments: P, seats: S, config: ServiceConfig) -> Self {
        Self {
            payments,
            seats,
            policy: config.policy,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    #[instrument(
        name = "purchase",
        skip(self, requests),
        fields(
            account_id = %account_id,
            requests = requests.len(),
            purchase_id = tracing::field::Empty
        )
    )]
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        let purchase_id = PurchaseId::new();
        Span::current().record("purchase_id", tracing::field::display(purchase_id));

        let purchase = validate_purchase(account_id, requests, &self.policy).inspect_err(|err| {
            info!(violation = %err.violation(), "purchase rejected");
        })?;

        debug!(
            adults = purchase.tally.adults,
            children = purchase.tally.children,
            infants = purchase.tally.infants,
            "purchase rules passed"
        );
        info!(
            seats = purchase.seats,
            amount = %purchase.total_price,
            "seats and cost calculated"
        );

        // Seats before payment, so nobody is charged when no seats are left.
        self.seats.reserve_seat(account_id, purchase.seats);
        self.payments.make_payment(account_id, purchase.total_price);

        Ok(PurchaseReceipt {
            purchase_id,
            account_id,
            tally: purchase.tally,
            seats_reserved: purchase.seats,
            amount_charged: purchase.total_price,
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::Violation;
    use boxoffice_gateways::{GatewayCall, InMemoryGateway};

    fn service(gateway: &InMemoryGateway) -> TicketServiceImpl<&InMemoryGateway, &InMemoryGateway> {
        TicketServiceImpl::new(gateway, gateway)
    }

    #[test]
    fn reserves_before_paying() {
        let gateway = InMemoryGateway::new();
        let account = AccountId::new(1);

        service(&gateway)
            .purchase_tickets(account, &[TicketRequest::adult(2), TicketRequest::child(1)])
            .unwrap();

        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::ReserveSeats {
                    account_id: account,
                    seats: 3
                },
                GatewayCall::MakePayment {
                    account_id: account,
                    amount: Money::from_units(50)
                },
            ]
        );
    }

    #[test]
    fn receipt_matches_gateway_calls() {
        let gateway = InMemoryGateway::new();
        let account = AccountId::new(7);

        let receipt = service(&gateway)
            .purchase_tickets(account, &[TicketRequest::adult(1), TicketRequest::infant(1)])
            .unwrap();

        assert_eq!(receipt.account_id, account);
        assert_eq!(receipt.seats_reserved, 1);
        assert_eq!(receipt.amount_charged, Money::from_units(20));
        assert_eq!(receipt.tally.infants, 1);
        assert_eq!(gateway.reservations(), vec![(account, 1)]);
        assert_eq!(gateway.payments(), vec![(account, Money::from_units(20))]);
    }

    #[test]
    fn rejection_touches_no_gateway() {
        let gateway = InMemoryGateway::new();

        let err = service(&gateway)
            .purchase_tickets(AccountId::new(1), &[TicketRequest::infant(1)])
            .unwrap_err();

        assert!(matches!(err.violation(), Violation::InfantsExceedAdults { .. }));
        assert!(gateway.is_untouched());
    }

    #[test]
    fn configured_policy_is_used() {
        let gateway = InMemoryGateway::new();
        let config = ServiceConfig {
            policy: PricingPolicy::default().with_max_tickets(2),
        };
        let svc = TicketServiceImpl::with_config(&gateway, &gateway, config);

        assert_eq!(svc.policy().max_tickets, 2);
        assert!(svc.purchase_tickets(AccountId::new(1), &[TicketRequest::adult(3)]).is_err());
        assert!(gateway.is_untouched());
    }

    #[test]
    fn receipt_serializes() {
        let gateway = InMemoryGateway::new();
        let receipt = service(&gateway)
            .purchase_tickets(AccountId::new(1), &[TicketRequest::adult(1)])
            .unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["account_id"], 1);
        assert_eq!(json["seats_reserved"], 1);
        assert_eq!(json["amount_charged"], 20);
    }
}
