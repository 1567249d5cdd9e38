use crate::model::id::{SpaceId, UserId};
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub booked_by: UserId,
    pub space_id: SpaceId,
    pub booked_on: NaiveDate,
}
