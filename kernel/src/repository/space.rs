use crate::model::id::SpaceId;
use crate::model::space::{event::CreateSpace, Space};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>>;
    /// Swap the whole catalog for a new snapshot in one transaction.
    async fn replace_all(&self, events: Vec<CreateSpace>) -> AppResult<()>;
}
