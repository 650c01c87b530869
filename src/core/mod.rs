//! Core models and rules for the study buddy premium flow
//!
//! Everything here is plain Rust shared by the server and the browser bundle;
//! DOM and network glue lives in `crate::ui`.

pub mod analytics;
pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod demo;
pub mod feature_hints;
#[cfg(feature = "ssr")]
pub mod flashcard_api;
pub mod flashcards;
pub mod modal;
pub mod notification;
pub mod payment;
#[cfg(feature = "ssr")]
pub mod payment_api;
pub mod phone;
pub mod plan;
pub mod wizard;

pub use analytics::AnalyticsEvent;
pub use flashcards::{Flashcard, FlashcardError, FlashcardResponse};
pub use modal::{ModalPhase, PaymentModalState};
pub use notification::{Notification, NotificationItem, NotificationSlot, Severity};
pub use payment::{
    CheckoutError, PayButtonState, PaymentMethod, PaymentOutcome, PaymentRequest,
    PaymentResponse, prepare_payment,
};
pub use phone::{PhoneFieldCopy, PhoneStatus, check_phone, submit_allowed};
pub use plan::{Plan, PlanSelection};
pub use wizard::{VerificationWizard, WizardError};
