//! Application pages
//!
//! - Home page (study form, demo, verification wizard)
//! - Premium page (pricing and payment modal)
//! - Payment success page
//! - Not found page

mod home;
mod not_found;
mod payment_success;
mod premium;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use payment_success::PaymentSuccessPage;
pub use premium::PremiumPage;
