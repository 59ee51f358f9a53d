use anyhow::Result;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::vendor::{ListVendorsQuery, ServiceType, Vendor};

pub struct VendorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VendorRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vendor: &Vendor) -> Result<()> {
        sqlx::query(
            "INSERT INTO planora_vendors (id, user_id, business_name, business_description, service_type, contact_email, contact_phone, business_address, services, reviews, average_rating, is_verified, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        )
        .bind(vendor.id)
        .bind(vendor.user_id)
        .bind(&vendor.business_name)
        .bind(&vendor.business_description)
        .bind(vendor.service_type)
        .bind(&vendor.contact_email)
        .bind(&vendor.contact_phone)
        .bind(serde_json::to_value(&vendor.business_address)?)
        .bind(serde_json::to_value(&vendor.services)?)
        .bind(serde_json::to_value(&vendor.reviews)?)
        .bind(vendor.average_rating)
        .bind(vendor.is_verified)
        .bind(vendor.created_at)
        .bind(vendor.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>("SELECT * FROM planora_vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(vendor)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM planora_vendors WHERE user_id = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(vendor)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM planora_vendors WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    // Whole-row rewrite; services and reviews travel with the profile as one
    // document, so concurrent writers are last-write-wins.
    pub async fn save(&self, vendor: &Vendor) -> Result<()> {
        sqlx::query(
            "UPDATE planora_vendors SET business_name = $1, business_description = $2, service_type = $3, contact_email = $4, contact_phone = $5, business_address = $6, services = $7, reviews = $8, average_rating = $9, is_verified = $10, updated_at = $11 WHERE id = $12"
        )
        .bind(&vendor.business_name)
        .bind(&vendor.business_description)
        .bind(vendor.service_type)
        .bind(&vendor.contact_email)
        .bind(&vendor.contact_phone)
        .bind(serde_json::to_value(&vendor.business_address)?)
        .bind(serde_json::to_value(&vendor.services)?)
        .bind(serde_json::to_value(&vendor.reviews)?)
        .bind(vendor.average_rating)
        .bind(vendor.is_verified)
        .bind(vendor.updated_at)
        .bind(vendor.id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM planora_vendors WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search(
        &self,
        query: &ListVendorsQuery,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vendor>> {
        let mut builder = QueryBuilder::new("SELECT * FROM planora_vendors WHERE 1=1");
        Self::push_filters(&mut builder, query);

        builder.push(" ORDER BY average_rating DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let vendors = builder
            .build_query_as::<Vendor>()
            .fetch_all(self.pool)
            .await?;

        Ok(vendors)
    }

    pub async fn count(&self, query: &ListVendorsQuery) -> Result<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM planora_vendors WHERE 1=1");
        Self::push_filters(&mut builder, query);

        let count: i64 = builder.build_query_scalar().fetch_one(self.pool).await?;

        Ok(count)
    }

    pub async fn top_rated(
        &self,
        service_types: Option<&[ServiceType]>,
        min_rating: f64,
        limit: i64,
    ) -> Result<Vec<Vendor>> {
        let mut builder = QueryBuilder::new(
            "SELECT * FROM planora_vendors WHERE is_verified = TRUE AND average_rating >= ",
        );
        builder.push_bind(min_rating);

        if let Some(types) = service_types {
            if !types.is_empty() {
                builder.push(" AND service_type IN (");
                let mut separated = builder.separated(", ");
                for service_type in types {
                    separated.push_bind(*service_type);
                }
                builder.push(")");
            }
        }

        builder.push(" ORDER BY average_rating DESC LIMIT ");
        builder.push_bind(limit);

        let vendors = builder
            .build_query_as::<Vendor>()
            .fetch_all(self.pool)
            .await?;

        Ok(vendors)
    }

    pub async fn list_verified_by_type(&self, service_type: ServiceType) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM planora_vendors WHERE service_type = $1 AND is_verified = TRUE",
        )
        .bind(service_type)
        .fetch_all(self.pool)
        .await?;

        Ok(vendors)
    }

    pub async fn list_by_type_excluding(
        &self,
        service_type: ServiceType,
        exclude_vendor: Uuid,
    ) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM planora_vendors WHERE service_type = $1 AND id <> $2",
        )
        .bind(service_type)
        .bind(exclude_vendor)
        .fetch_all(self.pool)
        .await?;

        Ok(vendors)
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ListVendorsQuery) {
        if let Some(service_type) = query.service_type {
            builder.push(" AND service_type = ");
            builder.push_bind(service_type);
        }

        if let Some(is_verified) = query.is_verified {
            builder.push(" AND is_verified = ");
            builder.push_bind(is_verified);
        }

        if let Some(min_rating) = query.min_rating {
            builder.push(" AND average_rating >= ");
            builder.push_bind(min_rating);
        }

        if let Some(search) = &query.search {
            builder.push(" AND business_name ILIKE ");
            builder.push_bind(format!("%{}%", search));
        }
    }
}
