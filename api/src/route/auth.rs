use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, refresh_access_token};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh_access_token))
}
