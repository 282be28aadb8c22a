//! Service layer providing dictionary CRUD on top of models.
//! - Separates business rules (headword validation, duplicate detection) from data access.
//! - Owns the domain view of an entry (`Entry`, `EntryFields`) and its mapping to the storage record.
//! - Provides clear error types and documented interfaces.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod word;
