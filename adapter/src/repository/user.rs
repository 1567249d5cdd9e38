use crate::database::{
    model::{membership::MembershipRow, user::UserRow},
    ConnectionPool,
};
use async_trait::async_trait;
use bcrypt::{hash, DEFAULT_COST};
use derive_new::new;
use kernel::model::id::UserId;
use kernel::model::{
    membership::Membership,
    user::{
        event::{CreateUser, UpdateUserMembership},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        // Pre-check so the common duplicate registration gets a clean 409.
        // Two identical registrations racing past this check are caught by
        // the unique constraint below.
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&event.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if exists > 0 {
            return Err(AppError::EmailAlreadyExists);
        }

        let user_id = UserId::new();
        let password_hash = hash(&event.password, DEFAULT_COST)?;
        sqlx::query(
            r#"
                INSERT INTO users (user_id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(User {
            user_id,
            name: event.name,
            email: event.email,
            membership_id: None,
        })
    }

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, name, email, membership_id
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn update_membership(
        &self,
        event: UpdateUserMembership,
    ) -> AppResult<(User, Membership)> {
        let mut tx = self.db.begin().await?;

        let membership: Option<MembershipRow> = sqlx::query_as(
            r#"
                SELECT membership_id, name, price, features
                FROM memberships
                WHERE membership_id = $1
            "#,
        )
        .bind(event.membership_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let membership =
            membership.ok_or_else(|| AppError::InvalidMembership(event.membership_id.to_string()))?;

        let res = sqlx::query(
            r#"
                UPDATE users
                SET membership_id = $1, updated_at = CURRENT_TIMESTAMP
                WHERE user_id = $2
            "#,
        )
        .bind(event.membership_id)
        .bind(event.user_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user {} not found",
                event.user_id
            )));
        }

        let user: UserRow = sqlx::query_as(
            r#"
                SELECT user_id, name, email, membership_id
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok((User::from(user), Membership::from(membership)))
    }
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            AppError::EmailAlreadyExists
        }
        _ => AppError::SpecificOperationError(e),
    }
}
