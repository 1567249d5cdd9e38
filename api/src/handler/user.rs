use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::user::{
        CreateUserRequest, MembershipAssignmentResponse, UpdateMembershipRequest,
        UpdateMembershipRequestWithUserId, UserResponse,
    },
};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

pub async fn show_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    user.ensure_owner(user_id)?;

    registry
        .user_repository()
        .find_current_user(user_id)
        .await
        .and_then(|u| match u {
            Some(u) => Ok(Json(u.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn update_membership(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateMembershipRequest>,
) -> AppResult<Json<MembershipAssignmentResponse>> {
    user.ensure_owner(user_id)?;
    req.validate(&())?;

    let event = UpdateMembershipRequestWithUserId::new(user_id, req);
    registry
        .user_repository()
        .update_membership(event.into())
        .await
        .map(|(user, membership)| {
            Json(MembershipAssignmentResponse {
                user: user.into(),
                membership: membership.into(),
            })
        })
}
