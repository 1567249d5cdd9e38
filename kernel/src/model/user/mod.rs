use crate::model::id::{MembershipId, UserId};

pub mod event;

/// A registered account. The password hash never leaves the adapter layer,
/// so it is absent here on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub membership_id: Option<MembershipId>,
}
