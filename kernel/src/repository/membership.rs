use crate::model::membership::{event::CreateMembership, Membership};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Membership>>;
    /// Swap the whole catalog for a new snapshot in one transaction.
    async fn replace_all(&self, events: Vec<CreateMembership>) -> AppResult<()>;
}
