use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::membership::show_membership_list;

pub fn build_membership_routers() -> Router<AppRegistry> {
    let memberships_routers = Router::new().route("/", get(show_membership_list));

    Router::new().nest("/memberships", memberships_routers)
}
