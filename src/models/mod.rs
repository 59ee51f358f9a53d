pub mod booking;
pub mod event;
pub mod user;
pub mod vendor;

pub use booking::{Booking, BookingStatus, PaymentStatus};
pub use event::{Event, EventStatus, EventType};
pub use user::{Role, User};
pub use vendor::{PriceUnit, Review, Service, ServiceType, Vendor};
