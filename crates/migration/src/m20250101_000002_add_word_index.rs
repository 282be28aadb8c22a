//! Unique index on `words.word`: the headword is the lookup key and must not repeat.
use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_words::Words;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_words_word")
                    .table(Words::Table)
                    .col(Words::Word)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_words_word").table(Words::Table).to_owned())
            .await
    }
}
