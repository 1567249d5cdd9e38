use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::contact::ContactRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::membership::MembershipRepositoryImpl;
use adapter::repository::space::SpaceRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::token::TokenService;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::contact::ContactRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::membership::MembershipRepository;
use kernel::repository::space::SpaceRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

/// Application context built once at startup and handed to every handler as
/// axum state. Nothing in the system lives in module-level globals.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    membership_repository: Arc<dyn MembershipRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    contact_repository: Arc<dyn ContactRepository>,
    token_service: Arc<TokenService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let membership_repository = Arc::new(MembershipRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let contact_repository = Arc::new(ContactRepositoryImpl::new(pool.clone()));
        let token_service = Arc::new(TokenService::new(&app_config.auth));
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            space_repository,
            membership_repository,
            booking_repository,
            contact_repository,
            token_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn membership_repository(&self) -> Arc<dyn MembershipRepository> {
        self.membership_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn contact_repository(&self) -> Arc<dyn ContactRepository> {
        self.contact_repository.clone()
    }

    pub fn token_service(&self) -> Arc<TokenService> {
        self.token_service.clone()
    }
}
