use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Completed,
    Refunded,
}

// References to event/vendor/service are advisory; nothing checks them at
// write time and a booking can outlive the rows it points at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub vendor_id: Uuid,
    pub service_id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub event_id: Uuid,
    pub vendor_id: Uuid,
    pub service_id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub amount: f64,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(user_id: Uuid, create: CreateBooking) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            event_id: create.event_id,
            vendor_id: create.vendor_id,
            service_id: create.service_id,
            booking_date: create.booking_date,
            amount: create.amount,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            special_requirements: create.special_requirements,
            notes: create.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateBooking) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(special_requirements) = update.special_requirements {
            self.special_requirements = Some(special_requirements);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
    }
}
