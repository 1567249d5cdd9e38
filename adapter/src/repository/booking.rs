use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::booking::{event::CreateBooking, Booking};
use kernel::model::id::{BookingId, UserId};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        let booking_id = BookingId::new();
        sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, user_id, space_id, booked_on)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.space_id)
        .bind(event.booked_on)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.user_id,
                    b.booked_on,
                    s.space_id,
                    s.name AS space_name,
                    s.image_path AS space_image_path
                FROM bookings b
                INNER JOIN spaces s ON s.space_id = b.space_id
                WHERE b.user_id = $1
                ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kernel::model::space::event::CreateSpace;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::space::SpaceRepository;
    use kernel::repository::user::UserRepository;

    use crate::repository::space::SpaceRepositoryImpl;
    use crate::repository::user::UserRepositoryImpl;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_and_list_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let space_repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let booking_repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let user = user_repo
            .create(CreateUser::new(
                "Booker".into(),
                "booker@example.com".into(),
                "pw".into(),
            ))
            .await?;
        space_repo
            .replace_all(vec![CreateSpace::new(
                "Meeting Room".into(),
                "Ground floor".into(),
                30.0,
                true,
                Some("/images/room.png".into()),
            )])
            .await?;
        let space = space_repo.find_all().await?.remove(0);

        let booked_on = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let booking_id = booking_repo
            .create(CreateBooking::new(user.user_id, space.space_id, booked_on))
            .await?;

        let bookings = booking_repo.find_by_user_id(user.user_id).await?;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].booking_id, booking_id);
        assert_eq!(bookings[0].booked_on, booked_on);
        assert_eq!(bookings[0].space.name, "Meeting Room");
        assert_eq!(
            bookings[0].space.image_path.as_deref(),
            Some("/images/room.png")
        );

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_booking_against_unknown_space_fails(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let booking_repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let user = user_repo
            .create(CreateUser::new(
                "Booker".into(),
                "booker@example.com".into(),
                "pw".into(),
            ))
            .await?;

        // No such space: the foreign key rejects the insert and the
        // transaction rolls back.
        let res = booking_repo
            .create(CreateBooking::new(
                user.user_id,
                kernel::model::id::SpaceId::new(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .await;
        assert!(res.is_err());

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_other_users_see_no_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let space_repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let booking_repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let owner = user_repo
            .create(CreateUser::new(
                "Owner".into(),
                "owner@example.com".into(),
                "pw".into(),
            ))
            .await?;
        let other = user_repo
            .create(CreateUser::new(
                "Other".into(),
                "other@example.com".into(),
                "pw".into(),
            ))
            .await?;
        space_repo
            .replace_all(vec![CreateSpace::new(
                "Desk".into(),
                "Upstairs".into(),
                10.0,
                true,
                None,
            )])
            .await?;
        let space = space_repo.find_all().await?.remove(0);

        booking_repo
            .create(CreateBooking::new(
                owner.user_id,
                space.space_id,
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            ))
            .await?;

        assert_eq!(booking_repo.find_by_user_id(other.user_id).await?.len(), 0);

        Ok(())
    }
}
