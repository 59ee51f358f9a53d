pub mod profile;
pub mod reviews;
pub mod services;

pub use profile::{create_vendor, delete_vendor, get_vendor, list_vendors, update_vendor};
pub use reviews::add_review;
pub use services::{add_service, delete_service, update_service};
