use crate::{
    backend::ReservationBackend,
    error::BookingError,
    slot_clock::SlotClock,
    types::Booking,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ReservationService<T: ReservationBackend> {
    clock: SlotClock,
    backend: T,
}

impl<T: ReservationBackend> ReservationService<T> {
    pub fn new(clock: SlotClock, backend: T) -> Self {
        Self { clock, backend }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &T {
        &self.backend
    }

    pub fn book(&self, name: &str, raw_time: &str) -> Result<Booking, BookingError> {
        if name.trim().is_empty() {
            debug!("Rejected booking without a name");
            return Err(BookingError::InvalidName);
        }

        let slot = SlotClock::parse(raw_time).inspect_err(|_| {
            debug!(raw_time, "Rejected malformed booking time");
        })?;
        self.clock.validate(slot).inspect_err(|_| {
            debug!(%slot, "Rejected booking outside business hours");
        })?;

        let booking = Booking {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            slot,
        };

        if !self.backend.try_reserve(slot, booking.clone()) {
            warn!(%slot, name, "Booking slot is not available");
            return Err(BookingError::CapacityExceeded);
        }

        info!(id = %booking.id, %slot, name = booking.name.as_str(), "Booking accepted");
        Ok(booking)
    }
}
