//! Sample content and checks for the flashcard demo form on the home page.

use serde::{Deserialize, Serialize};

/// How long the generate button pulses after the demo fills the form
pub const PULSE_MS: u32 = 4000;

/// Id of the section the demo scrolls to
pub const SUBJECTS_SECTION_ID: &str = "subjects";

pub const SUBJECTS: [&str; 6] = [
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "History",
    "Geography",
];

pub const DEMO_SUBJECT: &str = "Biology";

pub const DEMO_NOTES: &str = "Photosynthesis is the process by which plants convert sunlight into energy.

Key components:
- Chloroplasts contain chlorophyll
- Light-dependent reactions occur in thylakoids
- Calvin cycle happens in the stroma
- Produces glucose and oxygen
- Requires carbon dioxide and water";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudyFormError {
    #[error("Please select a subject and enter your notes.")]
    Incomplete,
}

/// Subject and notes ready for flashcard generation. Also the body of
/// `POST /generate_flashcards`, where missing fields read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyRequest {
    pub subject: String,
    pub notes: String,
}

impl StudyRequest {
    /// Both a subject and non-blank notes are required; notes are trimmed.
    pub fn from_form(subject: &str, notes: &str) -> Result<Self, StudyFormError> {
        let notes = notes.trim();
        if subject.is_empty() || notes.is_empty() {
            return Err(StudyFormError::Incomplete);
        }

        Ok(Self {
            subject: subject.to_string(),
            notes: notes.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_subject_is_offered() {
        assert!(SUBJECTS.contains(&DEMO_SUBJECT));
        assert!(DEMO_NOTES.starts_with("Photosynthesis"));
    }

    #[test]
    fn test_form_requires_subject_and_notes() {
        assert_eq!(
            StudyRequest::from_form("", "notes"),
            Err(StudyFormError::Incomplete)
        );
        assert_eq!(
            StudyRequest::from_form("Biology", "   \n "),
            Err(StudyFormError::Incomplete)
        );
    }

    #[test]
    fn test_form_trims_notes() {
        let request = StudyRequest::from_form(DEMO_SUBJECT, "  cells  ").unwrap();
        assert_eq!(request.subject, "Biology");
        assert_eq!(request.notes, "cells");
    }

    #[test]
    fn test_missing_body_fields_read_as_empty() {
        let request: StudyRequest = serde_json::from_str(r#"{"subject":"Physics"}"#).unwrap();
        assert_eq!(request.notes, "");
        assert_eq!(
            StudyRequest::from_form(&request.subject, &request.notes),
            Err(StudyFormError::Incomplete)
        );
    }
}
