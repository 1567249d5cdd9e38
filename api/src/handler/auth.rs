use axum::{extract::State, Json};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use garde::Validate;
use kernel::model::auth::RefreshToken;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::auth::{AccessTokensResponse, LoginRequest, RefreshTokenResponse};

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokensResponse>> {
    req.validate(&())?;

    let LoginRequest { email, password } = req;
    let user_id = registry
        .auth_repository()
        .verify_user(
            email.as_deref().unwrap_or_default(),
            password.as_deref().unwrap_or_default(),
        )
        .await?;

    let token_service = registry.token_service();
    let access_token = token_service.issue_access_token(user_id)?;
    let refresh_token = token_service.issue_refresh_token(user_id)?;

    Ok(Json(AccessTokensResponse {
        access_token: access_token.0,
        refresh_token: refresh_token.0,
        user_id,
    }))
}

pub async fn refresh_access_token(
    State(registry): State<AppRegistry>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::UnauthenticatedError)?;

    let refresh_token = RefreshToken(bearer.token().to_string());
    let access_token = registry.token_service().refresh(&refresh_token)?;

    Ok(Json(RefreshTokenResponse {
        access_token: access_token.0,
    }))
}
