//! SeaORM-backed data access functions used by repository implementations.

pub mod word_service;
