use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::booking::create_booking;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new().route("/", post(create_booking));

    Router::new().nest("/bookings", bookings_routers)
}
