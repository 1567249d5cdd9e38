use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::booking::event::CreateBooking;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        parse_booking_date, BookingResponse, CreateBookingRequest, CreateBookingResponse,
    },
};

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    req.validate(&())?;

    // The booking owner is always the token identity, never caller input.
    let space_id = req
        .space_id
        .ok_or_else(|| AppError::UnprocessableEntity("space_id is required".into()))?;
    let booked_on = parse_booking_date(req.date.as_deref().unwrap_or_default())?;
    let event = CreateBooking::new(user.id(), space_id, booked_on);

    registry
        .booking_repository()
        .create(event)
        .await
        .map(|booking_id| (StatusCode::CREATED, Json(CreateBookingResponse { booking_id })))
}

pub async fn show_user_bookings(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    user.ensure_owner(user_id)?;

    registry
        .booking_repository()
        .find_by_user_id(user_id)
        .await
        .map(|bookings| Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
