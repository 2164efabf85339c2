use crate::types::TimeSlot;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons a booking request is turned down. None of them leave a trace in the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Name must be provided.")]
    InvalidName,
    #[error("Invalid booking time format.")]
    InvalidFormat,
    #[error("Booking time must be between {start} and {end}.")]
    OutOfHours { start: TimeSlot, end: TimeSlot },
    #[error("Booking slot is not available.")]
    CapacityExceeded,
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::InvalidName
            | BookingError::InvalidFormat
            | BookingError::OutOfHours { .. } => StatusCode::BAD_REQUEST,
            BookingError::CapacityExceeded => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
