use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Ack;
use serde::{Deserialize, Serialize};
use service::word::domain::{Entry, EntryFields};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

/// Request body for create and update. `word` is required; every other
/// attribute may be missing or null and is then stored as "".
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WordPayload {
    pub word: String,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub latin: Option<String>,
    #[serde(default)]
    pub ipa: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub kurmanji: Option<String>,
    #[serde(default)]
    pub arabic: Option<String>,
    #[serde(default)]
    pub farsi: Option<String>,
    #[serde(default)]
    pub phrase: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub antonyms: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub regional: Option<String>,
}

impl From<WordPayload> for EntryFields {
    fn from(p: WordPayload) -> Self {
        EntryFields {
            word: p.word,
            plural: p.plural.unwrap_or_default(),
            latin: p.latin.unwrap_or_default(),
            ipa: p.ipa.unwrap_or_default(),
            definition: p.definition.unwrap_or_default(),
            english: p.english.unwrap_or_default(),
            kurmanji: p.kurmanji.unwrap_or_default(),
            arabic: p.arabic.unwrap_or_default(),
            farsi: p.farsi.unwrap_or_default(),
            phrase: p.phrase.unwrap_or_default(),
            note: p.note.unwrap_or_default(),
            synonyms: p.synonyms.unwrap_or_default(),
            antonyms: p.antonyms.unwrap_or_default(),
            example: p.example.unwrap_or_default(),
            regional: p.regional.unwrap_or_default(),
        }
    }
}

#[utoipa::path(
    get, path = "/words/", tag = "words",
    responses(
        (status = 200, description = "All entries", body = [crate::openapi::EntryDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Entry>>, JsonApiError> {
    let list = state.words.list().await?;
    info!(count = list.len(), "list words");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/words/", tag = "words",
    request_body = crate::openapi::WordPayloadDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EntryDoc),
        (status = 400, description = "Word already exists", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), JsonApiError> {
    let Json(input) = payload?;
    info!(word = %input.word, "word_create_request");
    let created = state.words.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/words/{id}", tag = "words",
    params(("id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EntryDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Entry>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.words.get(id).await?))
}

#[utoipa::path(
    put, path = "/words/{id}", tag = "words",
    params(("id" = i32, Path, description = "Entry ID")),
    request_body = crate::openapi::WordPayloadDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EntryDoc),
        (status = 400, description = "Word already exists", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<Json<Entry>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let updated = state.words.update(id, input.into()).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/words/{id}", tag = "words",
    params(("id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Ack>, JsonApiError> {
    let Path(id) = id?;
    state.words.delete(id).await?;
    Ok(Json(Ack::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_nulls_and_gaps_become_empty() {
        let p: WordPayload = serde_json::from_value(serde_json::json!({
            "id": 3,
            "word": "kurd",
            "english": "Kurd",
            "ipa": null
        }))
        .unwrap();
        let fields = EntryFields::from(p);
        assert_eq!(fields.word, "kurd");
        assert_eq!(fields.english, "Kurd");
        assert_eq!(fields.ipa, "");
        assert_eq!(fields.regional, "");
    }

    #[test]
    fn payload_requires_word() {
        let res = serde_json::from_value::<WordPayload>(serde_json::json!({"english": "Kurd"}));
        assert!(res.is_err());
    }
}
