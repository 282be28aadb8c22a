use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use models::word::{self, Column as WordColumn, Entity as WordEntity};
use crate::errors::ServiceError;
use crate::word::domain::{Entry, EntryFields};

/// List every entry in the store's natural order.
pub async fn list_words(db: &DatabaseConnection) -> Result<Vec<Entry>, ServiceError> {
    let rows = word::all(db).await?;
    Ok(rows.into_iter().map(Entry::from).collect())
}

/// Get an entry by id.
pub async fn get_word(db: &DatabaseConnection, id: i32) -> Result<Option<Entry>, ServiceError> {
    let found = WordEntity::find_by_id(id).one(db).await?;
    Ok(found.map(Entry::from))
}

/// Create an entry with a single INSERT; the unique headword index rejects duplicates.
pub async fn create_word(db: &DatabaseConnection, fields: EntryFields) -> Result<Entry, ServiceError> {
    let created = word::insert(db, fields.into_active_model()).await?;
    Ok(created.into())
}

/// Replace every attribute of an existing entry with a single UPDATE; the id is preserved.
pub async fn update_word(db: &DatabaseConnection, id: i32, fields: EntryFields) -> Result<Entry, ServiceError> {
    word::validate_word(&fields.word)?;
    let mut am = word::ActiveModel::default();
    fields.clone().apply_to(&mut am);
    let res = WordEntity::update_many()
        .set(am)
        .filter(WordColumn::Id.eq(id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Word"));
    }
    Ok(Entry { id, fields })
}

/// Delete an entry permanently.
pub async fn delete_word(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = WordEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Word"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn kurd() -> EntryFields {
        EntryFields {
            word: "kurd".into(),
            latin: "kurd".into(),
            definition: "a person".into(),
            english: "Kurd".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn word_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_word(&db, kurd()).await?;
        assert_eq!(a.id, 1);
        let found = get_word(&db, a.id).await?.unwrap();
        assert_eq!(found, a);

        let mut replacement = EntryFields::new("kurd");
        replacement.english = "Kurdish person".into();
        let updated = update_word(&db, a.id, replacement.clone()).await?;
        assert_eq!(updated.id, a.id);
        // wholesale replace: fields not sent are cleared
        assert_eq!(updated.fields, replacement);
        assert_eq!(updated.fields.latin, "");

        let list_all = list_words(&db).await?;
        assert_eq!(list_all, vec![updated]);

        delete_word(&db, a.id).await?;
        assert!(get_word(&db, a.id).await?.is_none());
        assert!(list_words(&db).await?.is_empty());

        let again = delete_word(&db, a.id).await;
        assert!(matches!(again, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_leaves_existing_untouched() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let original = create_word(&db, kurd()).await?;
        let mut other = EntryFields::new("kurd");
        other.english = "overwritten?".into();
        let dup = create_word(&db, other).await;
        assert!(matches!(dup, Err(ServiceError::Duplicate(_))));

        assert_eq!(list_words(&db).await?, vec![original]);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_mutates_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_word(&db, kurd()).await?;
        let res = update_word(&db, a.id + 100, EntryFields::new("ghost")).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        let res = delete_word(&db, a.id + 100).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        assert_eq!(list_words(&db).await?, vec![a]);
        Ok(())
    }

    #[tokio::test]
    async fn renaming_onto_existing_headword_is_duplicate() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_word(&db, EntryFields::new("av")).await?;
        let b = create_word(&db, EntryFields::new("nan")).await?;
        let res = update_word(&db, b.id, EntryFields::new("av")).await;
        assert!(matches!(res, Err(ServiceError::Duplicate(_))));

        assert_eq!(list_words(&db).await?, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_blank_headword() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_word(&db, EntryFields::new("av")).await?;
        let res = update_word(&db, a.id, EntryFields::new("")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(get_word(&db, a.id).await?, Some(a));
        Ok(())
    }

    /// File-backed store with a real pool, so writers race on separate connections.
    async fn file_db() -> Result<(DatabaseConnection, std::path::PathBuf), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("dict-svc-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        let url = format!("sqlite://{}?mode=rwc", dir.join("words.db").display());
        let db = models::db::connect_and_migrate(&configs::DatabaseConfig::with_url(url)).await?;
        Ok((db, dir))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_of_distinct_words_all_succeed() -> Result<(), anyhow::Error> {
        let (db, dir) = file_db().await?;

        let handles: Vec<_> = (0..40)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move { create_word(&db, EntryFields::new(format!("w{i}"))).await })
            })
            .collect();
        for h in handles {
            h.await??;
        }
        assert_eq!(list_words(&db).await?.len(), 40);

        db.close().await?;
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_of_same_word_yield_one_entry() -> Result<(), anyhow::Error> {
        let (db, dir) = file_db().await?;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move { create_word(&db, EntryFields::new("same")).await })
            })
            .collect();
        let (mut created, mut duplicates) = (0, 0);
        for h in handles {
            match h.await? {
                Ok(_) => created += 1,
                Err(ServiceError::Duplicate(_)) => duplicates += 1,
                Err(e) => return Err(e.into()),
            }
        }
        assert_eq!((created, duplicates), (1, 19));
        assert_eq!(list_words(&db).await?.len(), 1);

        db.close().await?;
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_never_fail_with_storage_errors() -> Result<(), anyhow::Error> {
        let (db, dir) = file_db().await?;
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(create_word(&db, EntryFields::new(format!("w{i}"))).await?.id);
        }

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let db = db.clone();
                tokio::spawn(async move {
                    let mut fields = EntryFields::new(format!("w{}", id - 1));
                    fields.english = "edited".into();
                    update_word(&db, id, fields).await
                })
            })
            .collect();
        for h in handles {
            h.await??;
        }
        assert!(list_words(&db).await?.iter().all(|e| e.fields.english == "edited"));

        db.close().await?;
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
