use models::word;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Mutable attributes of an entry: everything except its identifier.
/// Absent attributes are empty strings, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFields {
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

/// A stored entry (business view), serialised flat: `id` next to the attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i32,
    #[serde(flatten)]
    pub fields: EntryFields,
}

impl EntryFields {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into(), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        word::validate_word(&self.word)?;
        Ok(())
    }

    /// Storage record for a new row; the id is left for the store to assign.
    pub fn into_active_model(self) -> word::ActiveModel {
        let mut am = word::ActiveModel { id: NotSet, ..Default::default() };
        self.apply_to(&mut am);
        am
    }

    /// Overwrite every attribute of `am`. The id is untouched.
    pub fn apply_to(self, am: &mut word::ActiveModel) {
        am.word = Set(self.word);
        am.plural = Set(self.plural);
        am.latin = Set(self.latin);
        am.ipa = Set(self.ipa);
        am.definition = Set(self.definition);
        am.english = Set(self.english);
        am.kurmanji = Set(self.kurmanji);
        am.arabic = Set(self.arabic);
        am.farsi = Set(self.farsi);
        am.phrase = Set(self.phrase);
        am.note = Set(self.note);
        am.synonyms = Set(self.synonyms);
        am.antonyms = Set(self.antonyms);
        am.example = Set(self.example);
        am.regional = Set(self.regional);
    }
}

impl From<word::Model> for Entry {
    fn from(m: word::Model) -> Self {
        Entry {
            id: m.id,
            fields: EntryFields {
                word: m.word,
                plural: m.plural,
                latin: m.latin,
                ipa: m.ipa,
                definition: m.definition,
                english: m.english,
                kurmanji: m.kurmanji,
                arabic: m.arabic,
                farsi: m.farsi,
                phrase: m.phrase,
                note: m.note,
                synonyms: m.synonyms,
                antonyms: m.antonyms,
                example: m.example,
                regional: m.regional,
            },
        }
    }
}
