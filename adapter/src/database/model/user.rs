use kernel::model::id::{MembershipId, UserId};
use kernel::model::user::User;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub membership_id: Option<MembershipId>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            name,
            email,
            membership_id,
        } = value;
        User {
            user_id,
            name,
            email,
            membership_id,
        }
    }
}

// Only the credential check reads this row; the hash stays inside the
// adapter.
#[derive(sqlx::FromRow)]
pub struct UserPasswordRow {
    pub user_id: UserId,
    pub password_hash: String,
}
