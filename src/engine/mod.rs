pub mod prompt;
pub mod reply;
pub mod snapshot;
pub mod vendor_types;

pub use snapshot::{MarketPrice, PastVendorPreference, VendorSnapshot};
pub use vendor_types::vendor_types_for_event;
