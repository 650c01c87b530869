//! Flashcard endpoint
//!
//! - POST /generate_flashcards - Turn a subject and notes into up to five cards

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::core::demo::StudyRequest;
use crate::core::flashcards::{
    FlashcardResponse, GENERATE_FLASHCARDS_PATH, MISSING_FIELDS_MESSAGE, flashcards_for,
};

#[derive(Debug, thiserror::Error)]
pub enum FlashcardApiError {
    #[error("Invalid flashcard request")]
    InvalidBody(#[from] JsonRejection),
    #[error("{MISSING_FIELDS_MESSAGE}")]
    MissingFields,
}

impl IntoResponse for FlashcardApiError {
    fn into_response(self) -> Response {
        let body = FlashcardResponse::rejected(self.to_string());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Create the flashcard API router
pub fn flashcard_router() -> Router {
    Router::new().route(GENERATE_FLASHCARDS_PATH, post(generate_flashcards_handler))
}

/// POST /generate_flashcards
async fn generate_flashcards_handler(
    payload: Result<Json<StudyRequest>, JsonRejection>,
) -> Result<Json<FlashcardResponse>, FlashcardApiError> {
    let Json(body) = payload.inspect_err(|rejection| {
        tracing::warn!("Rejected flashcard body: {}", rejection.body_text());
    })?;

    let request = StudyRequest::from_form(body.subject.trim(), &body.notes)
        .map_err(|_| FlashcardApiError::MissingFields)?;

    let cards = flashcards_for(&request.subject, &request.notes);
    tracing::info!(
        "Generated {} flashcards for {} ({} chars of notes)",
        cards.len(),
        request.subject,
        request.notes.len()
    );

    Ok(Json(FlashcardResponse::cards(cards)))
}
