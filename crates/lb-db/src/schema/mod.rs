pub mod schema_manager;
