use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One dictionary entry. `id` and the unique `word` are owned here; every other
/// column is free-form text stored as '' when empty.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "words")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub word: String,
    pub plural: String,
    pub latin: String,
    pub ipa: String,
    pub definition: String,
    pub english: String,
    pub kurmanji: String,
    pub arabic: String,
    pub farsi: String,
    pub phrase: String,
    pub note: String,
    pub synonyms: String,
    pub antonyms: String,
    pub example: String,
    pub regional: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_word(w: &str) -> Result<(), errors::ModelError> {
    if w.trim().is_empty() {
        return Err(errors::ModelError::Validation("word must not be empty".into()));
    }
    Ok(())
}

/// All rows in primary key order.
pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Insert after validating the headword; a unique index hit surfaces as `Duplicate`.
pub async fn insert<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, errors::ModelError> {
    if let sea_orm::ActiveValue::Set(w) | sea_orm::ActiveValue::Unchanged(w) = &am.word {
        validate_word(w)?;
    } else {
        return Err(errors::ModelError::Validation("word is required".into()));
    }
    Ok(am.insert(db).await?)
}
