use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::show_user_bookings;
use crate::handler::user::{register_user, show_user, update_membership};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/:user_id", get(show_user))
        .route("/:user_id/bookings", get(show_user_bookings))
        .route("/:user_id/membership", put(update_membership));

    Router::new().nest("/users", users_routers)
}
