use axum::Router;
use registry::AppRegistry;

pub mod auth;
pub mod booking;
pub mod contact;
pub mod health;
pub mod membership;
pub mod space;
pub mod user;

/// Everything under `/api`, the paths the frontend depends on.
pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(auth::build_auth_routers())
        .merge(user::build_user_routers())
        .merge(space::build_space_routers())
        .merge(membership::build_membership_routers())
        .merge(booking::build_booking_routers())
        .merge(contact::build_contact_routers());
    Router::new().nest("/api", router)
}
