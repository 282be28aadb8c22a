use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct LivenessResponse { pub message: String }

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: String }

#[derive(ToSchema)]
pub struct AckDoc { pub ok: bool }

#[derive(utoipa::ToSchema)]
pub struct WordPayloadDoc {
    pub word: String,
    pub plural: Option<String>,
    pub latin: Option<String>,
    pub ipa: Option<String>,
    pub definition: Option<String>,
    pub english: Option<String>,
    pub kurmanji: Option<String>,
    pub arabic: Option<String>,
    pub farsi: Option<String>,
    pub phrase: Option<String>,
    pub note: Option<String>,
    pub synonyms: Option<String>,
    pub antonyms: Option<String>,
    pub example: Option<String>,
    pub regional: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct EntryDoc {
    pub id: i32,
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

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::words::list,
        crate::routes::words::create,
        crate::routes::words::get,
        crate::routes::words::update,
        crate::routes::words::delete,
    ),
    components(
        schemas(
            LivenessResponse,
            HealthResponse,
            ErrorDoc,
            AckDoc,
            WordPayloadDoc,
            EntryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "words")
    )
)]
pub struct ApiDoc;
