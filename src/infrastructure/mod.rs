pub mod in_memory_activity_repository;
pub mod seed_catalog;
