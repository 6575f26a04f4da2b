pub mod device_category;
pub mod identity_field;
pub mod identity_record;
pub mod new_identity;
pub mod rank_tier;
pub mod score_entry;
