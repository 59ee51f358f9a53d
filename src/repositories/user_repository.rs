use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{Role, User};

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> Result<()> {
        sqlx::query(
            "INSERT INTO planora_users (id, name, email, phone, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.role)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM planora_users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM planora_users ORDER BY created_at DESC")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    pub async fn update(&self, user: &User) -> Result<()> {
        sqlx::query(
            "UPDATE planora_users SET name = $1, email = $2, phone = $3, updated_at = $4 WHERE id = $5",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.updated_at)
        .bind(user.id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_role(&self, id: Uuid, role: Role) -> Result<()> {
        sqlx::query("UPDATE planora_users SET role = $1, updated_at = NOW() WHERE id = $2")
            .bind(role)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM planora_users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
