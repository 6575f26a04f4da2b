pub mod store_factory;
pub mod store_handle;
