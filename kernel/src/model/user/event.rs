use crate::model::id::{MembershipId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, new)]
pub struct UpdateUserMembership {
    pub user_id: UserId,
    pub membership_id: MembershipId,
}
