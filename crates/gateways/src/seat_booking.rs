use std::sync::Arc;

use boxoffice_core::AccountId;

/// Seat booking contract.
///
/// Reserves `seats` seats for the account. Assumed to always succeed.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seats: u32);
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats)
    }
}
