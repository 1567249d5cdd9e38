use chrono::NaiveDate;
use garde::Validate;
use kernel::model::booking::{Booking, BookingSpace};
use kernel::model::id::{BookingId, SpaceId};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[garde(required)]
    pub space_id: Option<SpaceId>,
    #[garde(required, length(min = 1))]
    pub date: Option<String>,
}

/// The booking date arrives as a string so that a missing field and a
/// malformed date produce distinct 400s instead of a deserialization error.
pub fn parse_booking_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidBookingDate(raw.to_string()))
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub booking_id: BookingId,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    pub date: NaiveDate,
    pub space: BookingSpaceResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            booked_by: _,
            booked_on,
            space,
        } = value;
        Self {
            id: booking_id,
            date: booked_on,
            space: space.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingSpaceResponse {
    pub id: SpaceId,
    pub name: String,
    pub image: Option<String>,
}

impl From<BookingSpace> for BookingSpaceResponse {
    fn from(value: BookingSpace) -> Self {
        let BookingSpace {
            space_id,
            name,
            image_path,
        } = value;
        Self {
            id: space_id,
            name,
            image: image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_requires_space_and_date() {
        let req = CreateBookingRequest {
            space_id: Some(SpaceId::new()),
            date: None,
        };
        assert!(req.validate(&()).is_err());

        let req = CreateBookingRequest {
            space_id: None,
            date: Some("2024-01-01".into()),
        };
        assert!(req.validate(&()).is_err());

        let req = CreateBookingRequest {
            space_id: Some(SpaceId::new()),
            date: Some("2024-01-01".into()),
        };
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn booking_date_must_be_a_calendar_date() {
        assert_eq!(
            parse_booking_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(matches!(
            parse_booking_date("01/02/2024"),
            Err(AppError::InvalidBookingDate(_))
        ));
        assert!(matches!(
            parse_booking_date("2024-02-30"),
            Err(AppError::InvalidBookingDate(_))
        ));
        assert!(parse_booking_date("").is_err());
    }
}
