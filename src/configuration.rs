use crate::slot_clock::SlotClock;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn business_hours(&self) -> SlotClock;
    fn max_bookings(&self) -> usize;
}
