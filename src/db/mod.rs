pub mod database_service;
pub mod item;
pub mod schema;
