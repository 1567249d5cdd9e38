use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::contact::{ContactMessageRequest, ContactMessageResponse};

pub async fn submit_contact_message(
    State(registry): State<AppRegistry>,
    Json(req): Json<ContactMessageRequest>,
) -> AppResult<(StatusCode, Json<ContactMessageResponse>)> {
    req.validate(&())?;

    registry
        .contact_repository()
        .create(req.into())
        .await
        .map(|message| (StatusCode::CREATED, Json(message.into())))
}
