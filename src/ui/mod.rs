//! Browser-facing components and helpers.

pub mod analytics;
pub mod browser;
pub mod flashcard_client;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod payment_client;
pub mod payment_modal;
pub mod reveal;
pub mod verification;

pub use notifications::{NotificationsContainer, provide_notifications, use_notifications};
pub use pages::{HomePage, NotFoundPage, PaymentSuccessPage, PremiumPage};
pub use payment_modal::PaymentModal;
