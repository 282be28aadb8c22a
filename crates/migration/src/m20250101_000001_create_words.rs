//! Create `words` table.
//!
//! One row per dictionary entry. `id` is AUTOINCREMENT so identifiers are never
//! reused after a delete; every attribute besides `word` defaults to ''.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Words::Table)
                    .if_not_exists()
                    .col(pk_auto(Words::Id))
                    .col(string(Words::Word).not_null())
                    .col(text(Words::Plural).default(""))
                    .col(text(Words::Latin).default(""))
                    .col(text(Words::Ipa).default(""))
                    .col(text(Words::Definition).default(""))
                    .col(text(Words::English).default(""))
                    .col(text(Words::Kurmanji).default(""))
                    .col(text(Words::Arabic).default(""))
                    .col(text(Words::Farsi).default(""))
                    .col(text(Words::Phrase).default(""))
                    .col(text(Words::Note).default(""))
                    .col(text(Words::Synonyms).default(""))
                    .col(text(Words::Antonyms).default(""))
                    .col(text(Words::Example).default(""))
                    .col(text(Words::Regional).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Words::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Words {
    Table,
    Id,
    Word,
    Plural,
    Latin,
    Ipa,
    Definition,
    English,
    Kurmanji,
    Arabic,
    Farsi,
    Phrase,
    Note,
    Synonyms,
    Antonyms,
    Example,
    Regional,
}
