use crate::{
    backend::{ReservationBackend, DEFAULT_MAX_BOOKINGS},
    types::{Booking, TimeSlot},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LocalReservations {
    bookings: Arc<Mutex<HashMap<TimeSlot, Vec<Booking>>>>,
    max_bookings: usize,
}

impl LocalReservations {
    pub fn new(max_bookings: usize) -> Self {
        Self {
            bookings: Arc::new(Mutex::default()),
            max_bookings,
        }
    }

    // The map is consistent after every critical section, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<TimeSlot, Vec<Booking>>> {
        self.bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn bookings_for(&self, slot: TimeSlot) -> Vec<Booking> {
        self.lock().get(&slot).cloned().unwrap_or_default()
    }
}

impl Default for LocalReservations {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BOOKINGS)
    }
}

impl ReservationBackend for LocalReservations {
    fn try_reserve(&self, slot: TimeSlot, booking: Booking) -> bool {
        let mut bookings = self.lock();
        let occupied = bookings.entry(slot).or_default();
        if occupied.len() >= self.max_bookings {
            debug!(%slot, occupied = occupied.len(), "Slot is fully booked");
            return false;
        }
        occupied.push(booking);
        true
    }

    fn count_for(&self, slot: TimeSlot) -> usize {
        self.lock().get(&slot).map_or(0, Vec::len)
    }

    fn max_bookings(&self) -> usize {
        self.max_bookings
    }
}
