use chrono::NaiveDate;
use kernel::model::booking::{Booking, BookingSpace};
use kernel::model::id::{BookingId, SpaceId, UserId};

/// One booking joined with the display columns of its space.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub booked_on: NaiveDate,
    pub space_id: SpaceId,
    pub space_name: String,
    pub space_image_path: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            booked_on,
            space_id,
            space_name,
            space_image_path,
        } = value;
        Booking {
            booking_id,
            booked_by: user_id,
            booked_on,
            space: BookingSpace {
                space_id,
                name: space_name,
                image_path: space_image_path,
            },
        }
    }
}
