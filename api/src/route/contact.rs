use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::contact::submit_contact_message;

pub fn build_contact_routers() -> Router<AppRegistry> {
    let contact_routers = Router::new().route("/", post(submit_contact_message));

    Router::new().nest("/contact", contact_routers)
}
