use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::event::Event;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, event: &Event) -> Result<()> {
        sqlx::query(
            "INSERT INTO planora_events (id, user_id, title, description, event_type, date, time, location, expected_attendees, budget, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
        )
        .bind(event.id)
        .bind(event.user_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_type)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(event.expected_attendees)
        .bind(event.budget)
        .bind(event.status)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM planora_events WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(event)
    }

    // Ownership is part of the lookup filter; another user's event reads as
    // absent, matching the public contract.
    pub async fn find_by_id_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT * FROM planora_events WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM planora_events WHERE user_id = $1 ORDER BY date ASC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn save(&self, event: &Event) -> Result<()> {
        sqlx::query(
            "UPDATE planora_events SET title = $1, description = $2, event_type = $3, date = $4, time = $5, location = $6, expected_attendees = $7, budget = $8, status = $9, updated_at = $10 WHERE id = $11"
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_type)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(event.expected_attendees)
        .bind(event.budget)
        .bind(event.status)
        .bind(event.updated_at)
        .bind(event.id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM planora_events WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
