//! Migrator for the dictionary store.
//! The unique headword index is applied after the table exists.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_words;
mod m20250101_000002_add_word_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_words::Migration),
            Box::new(m20250101_000002_add_word_index::Migration),
        ]
    }
}
