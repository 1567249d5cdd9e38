use crate::database::{model::membership::MembershipRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::MembershipId;
use kernel::model::membership::{event::CreateMembership, Membership};
use kernel::repository::membership::MembershipRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MembershipRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Membership>> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
                SELECT membership_id, name, price, features
                FROM memberships
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Membership::from).collect())
    }

    async fn replace_all(&self, events: Vec<CreateMembership>) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM memberships")
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        for event in events {
            sqlx::query(
                r#"
                    INSERT INTO memberships (membership_id, name, price, features)
                    VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(MembershipId::new())
            .bind(&event.name)
            .bind(event.price)
            .bind(&event.features)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
