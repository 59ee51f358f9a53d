use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "event_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Conference,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Conference => "conference",
            EventType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "event_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Planning,
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub expected_attendees: i32,
    pub budget: f64,

    // Set by the owner, never derived from the date.
    pub status: EventStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub expected_attendees: i32,
    pub budget: f64,
    #[serde(default)]
    pub status: EventStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub expected_attendees: Option<i32>,
    pub budget: Option<f64>,
    pub status: Option<EventStatus>,
}

impl Event {
    pub fn new(user_id: Uuid, create: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: create.title,
            description: create.description,
            event_type: create.event_type,
            date: create.date,
            time: create.time,
            location: create.location,
            expected_attendees: create.expected_attendees,
            budget: create.budget,
            status: create.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(event_type) = update.event_type {
            self.event_type = event_type;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(expected_attendees) = update.expected_attendees {
            self.expected_attendees = expected_attendees;
        }
        if let Some(budget) = update.budget {
            self.budget = budget;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(user_id: Uuid) -> Event {
        Event::new(
            user_id,
            CreateEvent {
                title: "Summer Gala".to_string(),
                description: "Annual fundraiser".to_string(),
                event_type: EventType::Corporate,
                date: Utc::now(),
                time: "18:00".to_string(),
                location: "Riverside Hall".to_string(),
                expected_attendees: 120,
                budget: 25_000.0,
                status: EventStatus::default(),
            },
        )
    }

    #[test]
    fn test_event_defaults_to_planning() {
        let event = sample_event(Uuid::new_v4());
        assert_eq!(event.status, EventStatus::Planning);
    }

    #[test]
    fn test_apply_updates_only_provided_fields() {
        let mut event = sample_event(Uuid::new_v4());
        event.apply(UpdateEvent {
            title: None,
            description: None,
            event_type: None,
            date: None,
            time: None,
            location: Some("Harbor Pavilion".to_string()),
            expected_attendees: None,
            budget: Some(30_000.0),
            status: Some(EventStatus::Upcoming),
        });

        assert_eq!(event.title, "Summer Gala");
        assert_eq!(event.location, "Harbor Pavilion");
        assert_eq!(event.budget, 30_000.0);
        assert_eq!(event.status, EventStatus::Upcoming);
    }
}
