pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod schema;
pub mod serializer;
pub mod validation;
