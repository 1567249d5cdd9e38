use crate::model::{
    membership::Membership,
    user::{
        event::{CreateUser, UpdateUserMembership},
        User,
    },
};
use crate::model::id::UserId;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a new account. The password is hashed before it is stored;
    /// a duplicate email fails with `EmailAlreadyExists`.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// Link the user to a membership plan. The whole operation runs in one
    /// transaction and returns both updated records.
    async fn update_membership(
        &self,
        event: UpdateUserMembership,
    ) -> AppResult<(User, Membership)>;
}
