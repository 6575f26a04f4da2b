mod device_category;
mod identity_field;
mod new_identity;
mod rank_tier;
mod score_entry;
