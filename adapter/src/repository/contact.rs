use crate::database::{model::contact::ContactMessageRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::contact::{event::CreateContactMessage, ContactMessage};
use kernel::model::id::ContactMessageId;
use kernel::repository::contact::ContactRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ContactRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn create(&self, event: CreateContactMessage) -> AppResult<ContactMessage> {
        let mut tx = self.db.begin().await?;

        let contact_message_id = ContactMessageId::new();
        sqlx::query(
            r#"
                INSERT INTO contact_messages (contact_message_id, name, email, message)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(contact_message_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.message)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(ContactMessage {
            contact_message_id,
            name: event.name,
            email: event.email,
            message: event.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_contact_message_is_persisted(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ContactRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let stored = repo
            .create(CreateContactMessage::new(
                "Visitor".into(),
                "visitor@example.com".into(),
                "Do you have day passes?".into(),
            ))
            .await?;
        assert_eq!(stored.name, "Visitor");

        let row: ContactMessageRow = sqlx::query_as(
            r#"
                SELECT contact_message_id, name, email, message
                FROM contact_messages
                WHERE contact_message_id = $1
            "#,
        )
        .bind(stored.contact_message_id)
        .fetch_one(&pool)
        .await?;
        assert_eq!(row.message, "Do you have day passes?");

        Ok(())
    }
}
