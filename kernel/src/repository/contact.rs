use crate::model::contact::{event::CreateContactMessage, ContactMessage};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, event: CreateContactMessage) -> AppResult<ContactMessage>;
}
