pub mod aggregation_service;
pub mod database;
pub mod query_service;
pub mod seed_loader;
