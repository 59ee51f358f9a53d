use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::models::vendor::ServiceType;

pub struct BookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BookingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, booking: &Booking) -> Result<()> {
        sqlx::query(
            "INSERT INTO planora_bookings (id, user_id, event_id, vendor_id, service_id, booking_date, amount, status, payment_status, special_requirements, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.event_id)
        .bind(booking.vendor_id)
        .bind(booking.service_id)
        .bind(booking.booking_date)
        .bind(booking.amount)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(&booking.special_requirements)
        .bind(&booking.notes)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM planora_bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM planora_bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM planora_bookings ORDER BY created_at DESC")
                .fetch_all(self.pool)
                .await?;

        Ok(bookings)
    }

    pub async fn save(&self, booking: &Booking) -> Result<()> {
        sqlx::query(
            "UPDATE planora_bookings SET booking_date = $1, amount = $2, status = $3, payment_status = $4, special_requirements = $5, notes = $6, updated_at = $7 WHERE id = $8"
        )
        .bind(booking.booking_date)
        .bind(booking.amount)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(&booking.special_requirements)
        .bind(&booking.notes)
        .bind(booking.updated_at)
        .bind(booking.id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM planora_bookings WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // Service type and rating of the vendors behind the caller's most recent
    // bookings, newest first. Bookings whose vendor row is gone are skipped.
    pub async fn recent_vendor_preferences(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<(ServiceType, f64)>> {
        let preferences = sqlx::query_as::<_, (ServiceType, f64)>(
            "SELECT v.service_type, v.average_rating
             FROM planora_bookings b
             JOIN planora_vendors v ON v.id = b.vendor_id
             WHERE b.user_id = $1
             ORDER BY b.created_at DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(preferences)
    }
}
