use derive_new::new;
use garde::Validate;
use kernel::model::id::{MembershipId, UserId};
use kernel::model::user::{
    event::{CreateUser, UpdateUserMembership},
    User,
};
use serde::{Deserialize, Serialize};

use crate::model::membership::MembershipResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[garde(required, length(min = 1))]
    pub name: Option<String>,
    #[garde(required, email)]
    pub email: Option<String>,
    #[garde(required, length(min = 1))]
    pub password: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        // Validation ran at the boundary, the fields are present here.
        let CreateUserRequest {
            name,
            email,
            password,
        } = value;
        CreateUser {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub membership_id: Option<MembershipId>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            membership_id,
        } = value;
        Self {
            id: user_id,
            name,
            email,
            membership_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMembershipRequest {
    #[garde(required)]
    pub membership_id: Option<MembershipId>,
}

#[derive(new)]
pub struct UpdateMembershipRequestWithUserId(UserId, UpdateMembershipRequest);

impl From<UpdateMembershipRequestWithUserId> for UpdateUserMembership {
    fn from(value: UpdateMembershipRequestWithUserId) -> Self {
        let UpdateMembershipRequestWithUserId(user_id, UpdateMembershipRequest { membership_id }) =
            value;
        UpdateUserMembership {
            user_id,
            membership_id: membership_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MembershipAssignmentResponse {
    pub user: UserResponse,
    pub membership: MembershipResponse,
}
