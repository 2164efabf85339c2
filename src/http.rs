use crate::backend::ReservationBackend;
use crate::configuration::Configuration;
use crate::reservation_service::ReservationService;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum::{routing::post, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRequest {
    #[serde(rename = "BookingTime", default)]
    booking_time: String,
    #[serde(rename = "Name", default)]
    name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingResponse {
    #[serde(rename = "BookingId")]
    booking_id: String,
}

pub fn create_app<T: ReservationBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let business_hours = configuration.business_hours();
    info!(
        start = %business_hours.start(),
        end = %business_hours.end(),
        max_bookings = backend.max_bookings(),
        "Accepting bookings"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        reservation_service: ReservationService::new(business_hours, backend),
    };

    Router::new()
        .route("/api/Settlement/MakeBooking", post(make_booking))
        .with_state(state)
        .layer(cors)
}

async fn make_booking<T: ReservationBackend>(
    State(state): State<AppState<T>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(%rejection, "Rejected unreadable booking request");
            return (StatusCode::BAD_REQUEST, "Invalid data format.").into_response();
        }
    };

    match state
        .reservation_service
        .book(&request.name, &request.booking_time)
    {
        Ok(booking) => Json(BookingResponse {
            booking_id: booking.id.to_string(),
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
