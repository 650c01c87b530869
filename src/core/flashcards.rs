//! Flashcards generated from a subject and a block of notes.
//!
//! Notes already written as `Q...:` / `A:` lines become cards directly. Any
//! other notes get the generic question set for the subject.

use serde::{Deserialize, Serialize};

/// Endpoint that turns notes into flashcards
pub const GENERATE_FLASHCARDS_PATH: &str = "/generate_flashcards";

/// Upper bound on cards per request
pub const MAX_FLASHCARDS: usize = 5;

pub const MISSING_FIELDS_MESSAGE: &str = "Subject and notes are required";

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate flashcards";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Reply of `POST /generate_flashcards`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardResponse {
    #[serde(default)]
    pub questions: Vec<Flashcard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FlashcardResponse {
    pub fn cards(questions: Vec<Flashcard>) -> Self {
        Self {
            questions,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            questions: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Cards from a 2xx reply, otherwise the server's message
    pub fn into_cards(self, http_ok: bool) -> Result<Vec<Flashcard>, FlashcardError> {
        match self.error.filter(|message| !message.is_empty()) {
            None if http_ok => Ok(self.questions),
            Some(message) => Err(FlashcardError::Rejected(message)),
            None => Err(FlashcardError::Rejected(GENERATION_FAILED_MESSAGE.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlashcardError {
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please check your connection and try again.")]
    Network,
}

/// Read `Q...: question` / `A: answer` lines into cards, keeping at most
/// [`MAX_FLASHCARDS`]. An answer line before any question is ignored.
pub fn parse_questions(text: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut current: Option<Flashcard> = None;

    for line in text.lines().map(str::trim) {
        if line.starts_with('Q') {
            if let Some((_, question)) = line.split_once(':') {
                cards.extend(current.take());
                current = Some(Flashcard::new(question.trim(), ""));
                continue;
            }
        }

        if let Some(answer) = line.strip_prefix("A:") {
            if let Some(card) = current.as_mut() {
                card.answer = answer.trim().to_string();
            }
        }
    }

    cards.extend(current);
    cards.truncate(MAX_FLASHCARDS);
    cards
}

/// Generic questions about `subject`, used when the notes carry none
pub fn fallback_flashcards(subject: &str) -> Vec<Flashcard> {
    vec![
        Flashcard::new(
            format!("What is the main topic discussed in the {subject} notes?"),
            "The notes cover various aspects of the subject matter.",
        ),
        Flashcard::new(
            format!("How does {subject} relate to real-world applications?"),
            "The subject has practical applications in various fields.",
        ),
        Flashcard::new(
            format!("What are the key concepts in {subject}?"),
            "Key concepts include fundamental principles and theories.",
        ),
        Flashcard::new(
            format!("Why is {subject} important for students?"),
            "It provides essential knowledge and skills for academic success.",
        ),
        Flashcard::new(
            format!("What methods are used in {subject}?"),
            "Various scientific and analytical methods are employed.",
        ),
    ]
}

pub fn flashcards_for(subject: &str, notes: &str) -> Vec<Flashcard> {
    let parsed = parse_questions(notes);
    if parsed.is_empty() {
        fallback_flashcards(subject)
    } else {
        parsed
    }
}
