use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::{
    backend::{ReservationBackend, DEFAULT_MAX_BOOKINGS},
    types::{Booking, TimeSlot},
};

pub struct MockReservationBackendInner {
    pub admit: AtomicBool,
    pub calls_to_try_reserve: AtomicU64,
    pub reserved: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockReservationBackend(pub Arc<MockReservationBackendInner>);

impl MockReservationBackendInner {
    fn new() -> Self {
        Self {
            admit: AtomicBool::new(true),
            calls_to_try_reserve: AtomicU64::default(),
            reserved: Mutex::default(),
        }
    }
}

impl MockReservationBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockReservationBackendInner::new()))
    }
}

impl ReservationBackend for MockReservationBackend {
    fn try_reserve(&self, _slot: TimeSlot, booking: Booking) -> bool {
        self.0.calls_to_try_reserve.fetch_add(1, Ordering::SeqCst);
        let admitted = self.0.admit.load(Ordering::SeqCst);
        if admitted {
            self.0.reserved.lock().unwrap().push(booking);
        }
        admitted
    }

    fn count_for(&self, slot: TimeSlot) -> usize {
        self.0
            .reserved
            .lock()
            .unwrap()
            .iter()
            .filter(|booking| booking.slot == slot)
            .count()
    }

    fn max_bookings(&self) -> usize {
        DEFAULT_MAX_BOOKINGS
    }
}
