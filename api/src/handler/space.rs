use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::SpaceId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::space::SpaceResponse;

pub async fn show_space_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<SpaceResponse>>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(|spaces| Json(spaces.into_iter().map(SpaceResponse::from).collect()))
}

pub async fn show_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}
