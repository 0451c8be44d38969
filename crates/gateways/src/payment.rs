use std::sync::Arc;

use boxoffice_core::{AccountId, Money};

/// Payment gateway contract.
///
/// Charges `amount` to the account. The gateway exposes no failure channel:
/// a call is assumed to succeed.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount: Money);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        (**self).make_payment(account_id, amount)
    }
}
