use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "service_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Catering,
    Decoration,
    Photography,
    Venue,
    Entertainment,
    Transportation,
    Technology,
    Other,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Catering => "catering",
            ServiceType::Decoration => "decoration",
            ServiceType::Photography => "photography",
            ServiceType::Venue => "venue",
            ServiceType::Entertainment => "entertainment",
            ServiceType::Transportation => "transportation",
            ServiceType::Technology => "technology",
            ServiceType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    #[default]
    Flat,
    PerHour,
    PerPerson,
    PerDay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub price_unit: PriceUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub business_description: String,
    pub service_type: ServiceType,
    pub contact_email: String,
    pub contact_phone: String,

    pub business_address: Option<BusinessAddress>,

    pub services: Vec<Service>,

    pub reviews: Vec<Review>,

    pub average_rating: f64,
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for Vendor {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let services: Json<Vec<Service>> = row.try_get("services")?;
        let reviews: Json<Vec<Review>> = row.try_get("reviews")?;
        let business_address: serde_json::Value = row.try_get("business_address")?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            business_name: row.try_get("business_name")?,
            business_description: row.try_get("business_description")?,
            service_type: row.try_get("service_type")?,
            contact_email: row.try_get("contact_email")?,
            contact_phone: row.try_get("contact_phone")?,
            business_address: serde_json::from_value(business_address).unwrap_or(None),
            services: services.0,
            reviews: reviews.0,
            average_rating: row.try_get("average_rating")?,
            is_verified: row.try_get("is_verified")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendor {
    pub business_name: String,
    pub business_description: String,
    pub service_type: ServiceType,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub business_address: Option<BusinessAddress>,
    #[serde(default)]
    pub services: Vec<NewService>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendor {
    pub business_name: Option<String>,
    pub business_description: Option<String>,
    pub service_type: Option<ServiceType>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub business_address: Option<BusinessAddress>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub price_unit: PriceUnit,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_unit: Option<PriceUnit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVendorsQuery {
    pub service_type: Option<ServiceType>,
    pub is_verified: Option<bool>,
    pub min_rating: Option<f64>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Vendor {
    pub fn new(
        user_id: Uuid,
        contact_email: String,
        contact_phone: String,
        create: CreateVendor,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            business_name: create.business_name,
            business_description: create.business_description,
            service_type: create.service_type,
            contact_email,
            contact_phone,
            business_address: create.business_address,
            services: create.services.into_iter().map(Service::from_new).collect(),
            reviews: Vec::new(),
            average_rating: 0.0,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateVendor) {
        if let Some(business_name) = update.business_name {
            self.business_name = business_name;
        }
        if let Some(business_description) = update.business_description {
            self.business_description = business_description;
        }
        if let Some(service_type) = update.service_type {
            self.service_type = service_type;
        }
        if let Some(contact_email) = update.contact_email {
            self.contact_email = contact_email;
        }
        if let Some(contact_phone) = update.contact_phone {
            self.contact_phone = contact_phone;
        }
        if let Some(business_address) = update.business_address {
            self.business_address = Some(business_address);
        }
        self.updated_at = Utc::now();
    }

    pub fn recalculate_average_rating(&mut self) {
        if self.reviews.is_empty() {
            self.average_rating = 0.0;
            return;
        }

        let sum: i32 = self.reviews.iter().map(|review| review.rating).sum();
        self.average_rating = f64::from(sum) / self.reviews.len() as f64;
    }

    pub fn has_review_from(&self, user_id: Uuid) -> bool {
        self.reviews.iter().any(|review| review.user_id == user_id)
    }

    pub fn service_mut(&mut self, service_id: Uuid) -> Option<&mut Service> {
        self.services
            .iter_mut()
            .find(|service| service.id == service_id)
    }

    pub fn remove_service(&mut self, service_id: Uuid) -> bool {
        let before = self.services.len();
        self.services.retain(|service| service.id != service_id);
        self.services.len() < before
    }
}

impl Service {
    pub fn from_new(new: NewService) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            price: new.price,
            price_unit: new.price_unit,
        }
    }

    pub fn apply(&mut self, update: UpdateService) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(price_unit) = update.price_unit {
            self.price_unit = price_unit;
        }
    }
}

impl Review {
    pub fn new(user_id: Uuid, rating: i32, comment: Option<String>) -> Result<Self, String> {
        if !(1..=5).contains(&rating) {
            return Err("Rating must be between 1 and 5".to_string());
        }

        Ok(Self {
            user_id,
            rating,
            comment,
            date: Utc::now(),
        })
    }
}
