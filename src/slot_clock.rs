use crate::{error::BookingError, types::TimeSlot};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HH_MM: Regex = Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap();
}

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "16:00";

/// Business hours a booking has to fall into, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotClock {
    start: TimeSlot,
    end: TimeSlot,
}

impl SlotClock {
    pub fn new(start: TimeSlot, end: TimeSlot) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "Business hours start ({start}) must not be after their end ({end})"
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeSlot {
        self.start
    }

    pub fn end(&self) -> TimeSlot {
        self.end
    }

    /// Accepts strictly `HH:MM` on a 24 hour clock.
    pub fn parse(raw: &str) -> Result<TimeSlot, BookingError> {
        let captures = HH_MM.captures(raw).ok_or(BookingError::InvalidFormat)?;
        let hour = captures[1]
            .parse()
            .map_err(|_| BookingError::InvalidFormat)?;
        let minute = captures[2]
            .parse()
            .map_err(|_| BookingError::InvalidFormat)?;
        TimeSlot::from_hm(hour, minute).ok_or(BookingError::InvalidFormat)
    }

    pub fn validate(&self, slot: TimeSlot) -> Result<(), BookingError> {
        if slot < self.start || slot > self.end {
            return Err(BookingError::OutOfHours {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Default for SlotClock {
    fn default() -> Self {
        Self {
            start: TimeSlot::from_hm(9, 0).expect("09:00 is a valid time of day"),
            end: TimeSlot::from_hm(16, 0).expect("16:00 is a valid time of day"),
        }
    }
}
