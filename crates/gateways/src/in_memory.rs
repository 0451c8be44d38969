//! In-memory gateway for tests/dev.

use std::sync::Mutex;

use serde::Serialize;

use boxoffice_core::{AccountId, Money};

use crate::payment::TicketPaymentService;
use crate::seat_booking::SeatReservationService;

/// One call received by the in-memory gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GatewayCall {
    ReserveSeats { account_id: AccountId, seats: u32 },
    MakePayment { account_id: AccountId, amount: Money },
}

/// Seat booking + payment gateway that only records what it was asked to do.
///
/// - No IO
/// - Always succeeds
/// - Keeps calls in arrival order across both services
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    calls: Mutex<Vec<GatewayCall>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far, oldest first.
    pub fn calls(&self) -> Vec<GatewayCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::ReserveSeats { account_id, seats } => Some((account_id, seats)),
                GatewayCall::MakePayment { .. } => None,
            })
            .collect()
    }

    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::MakePayment { account_id, amount } => Some((account_id, amount)),
                GatewayCall::ReserveSeats { .. } => None,
            })
            .collect()
    }

    pub fn is_untouched(&self) -> bool {
        self.calls().is_empty()
    }

    fn record(&self, call: GatewayCall) {
        // A poisoned log still accepts calls; the panicking writer held no
        // partial state.
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
    }
}

impl SeatReservationService for InMemoryGateway {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        tracing::debug!(%account_id, seats, "in-memory seat reservation");
        self.record(GatewayCall::ReserveSeats { account_id, seats });
    }
}

impl TicketPaymentService for InMemoryGateway {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        tracing::debug!(%account_id, %amount, "in-memory payment");
        self.record(GatewayCall::MakePayment { account_id, amount });
    }
}
