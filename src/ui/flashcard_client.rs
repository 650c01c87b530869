//! Browser side of `POST /generate_flashcards`.

use crate::core::demo::StudyRequest;
use crate::core::flashcards::{Flashcard, FlashcardError};

pub async fn generate_flashcards(request: &StudyRequest) -> Result<Vec<Flashcard>, FlashcardError> {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::flashcards::{FlashcardResponse, GENERATE_FLASHCARDS_PATH};
        use gloo_net::http::Request;

        let response = Request::post(GENERATE_FLASHCARDS_PATH)
            .json(request)
            .map_err(|err| {
                leptos::logging::error!("Flashcard error: {}", err);
                FlashcardError::Network
            })?
            .send()
            .await
            .map_err(|err| {
                leptos::logging::error!("Flashcard error: {}", err);
                FlashcardError::Network
            })?;

        let http_ok = response.ok();
        let body = response.json::<FlashcardResponse>().await.map_err(|err| {
            leptos::logging::error!("Flashcard error: unreadable response: {}", err);
            FlashcardError::Network
        })?;

        body.into_cards(http_ok)
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(FlashcardError::Network)
    }
}
