use crate::database::{model::user::UserPasswordRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::UserId;
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserPasswordRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        let row = row.ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;

        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::InvalidPassword);
        }

        Ok(row.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    use crate::repository::user::UserRepositoryImpl;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_registered_user_can_log_in(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let auth_repo = AuthRepositoryImpl::new(ConnectionPool::new(pool));

        let user = user_repo
            .create(CreateUser::new(
                "Login".into(),
                "login@example.com".into(),
                "s3cret".into(),
            ))
            .await?;

        let verified = auth_repo.verify_user("login@example.com", "s3cret").await?;
        assert_eq!(verified, user.user_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_unknown_email_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AuthRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo.verify_user("ghost@example.com", "whatever").await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_wrong_password_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let auth_repo = AuthRepositoryImpl::new(ConnectionPool::new(pool));

        user_repo
            .create(CreateUser::new(
                "Login".into(),
                "login@example.com".into(),
                "right-pw".into(),
            ))
            .await?;

        let res = auth_repo.verify_user("login@example.com", "wrong-pw").await;
        assert!(matches!(res, Err(AppError::InvalidPassword)));

        Ok(())
    }
}
