pub mod error;
pub mod repositories;
pub mod schema;
pub mod store;

pub use error::{DbError, Result};
pub use repositories::credential_repository::CredentialRepository;
pub use schema::schema_manager::{SCHEMA_VERSION, STORE_NAME, SchemaManager};
pub use store::store_factory::StoreFactory;
pub use store::store_handle::StoreHandle;
