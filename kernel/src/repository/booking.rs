use crate::model::booking::{event::CreateBooking, Booking};
use crate::model::id::{BookingId, UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a reservation. Referential integrity against `users` and
    /// `spaces` is enforced by the storage layer's foreign keys.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
}
