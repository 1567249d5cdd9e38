use crate::database::{model::space::SpaceRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::SpaceId;
use kernel::model::space::{event::CreateSpace, Space};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, name, location, price, availability, image_path
                FROM spaces
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, name, location, price, availability, image_path
                FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Space::from))
    }

    async fn replace_all(&self, events: Vec<CreateSpace>) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM spaces")
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        for event in events {
            sqlx::query(
                r#"
                    INSERT INTO spaces (space_id, name, location, price, availability, image_path)
                    VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(SpaceId::new())
            .bind(&event.name)
            .bind(&event.location)
            .bind(event.price)
            .bind(event.availability)
            .bind(&event.image_path)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
