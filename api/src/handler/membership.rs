use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::membership::MembershipResponse;

pub async fn show_membership_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<MembershipResponse>>> {
    registry
        .membership_repository()
        .find_all()
        .await
        .map(|plans| Json(plans.into_iter().map(MembershipResponse::from).collect()))
}
