use crate::model::id::UserId;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Check a login credential pair. Unknown email fails with
    /// `EntityNotFound`, a hash mismatch with `InvalidPassword`.
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId>;
}
