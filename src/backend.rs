use crate::types::{Booking, TimeSlot};

pub const DEFAULT_MAX_BOOKINGS: usize = 4;

pub trait ReservationBackend: Clone + Send + Sync + 'static {
    /// Appends `booking` to `slot` unless the slot is already at capacity.
    /// Checking and appending happen as one step for all concurrent callers.
    fn try_reserve(&self, slot: TimeSlot, booking: Booking) -> bool;
    /// Snapshot for diagnostics. Never base an admission on it.
    fn count_for(&self, slot: TimeSlot) -> usize;
    fn max_bookings(&self) -> usize;
}
