pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::device_category::DeviceCategory;
pub use models::identity_field::IdentityField;
pub use models::identity_record::IdentityRecord;
pub use models::new_identity::NewIdentity;
pub use models::rank_tier::RankTier;
pub use models::score_entry::ScoreEntry;

#[cfg(test)]
mod tests;
