use crate::model::id::{BookingId, SpaceId, UserId};
use chrono::NaiveDate;

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub booked_on: NaiveDate,
    pub space: BookingSpace,
}

/// Display snapshot of the booked space, joined in at read time.
#[derive(Debug)]
pub struct BookingSpace {
    pub space_id: SpaceId,
    pub name: String,
    pub image_path: Option<String>,
}
