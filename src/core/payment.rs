//! Payment request/response types shared by the browser and the server.
//!
//! The browser builds a [`PaymentRequest`] with [`prepare_payment`], posts it to
//! [`CREATE_PAYMENT_PATH`] and turns the reply into a [`PaymentOutcome`].

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::str::FromStr;

use super::notification::{Notification, Severity};
use super::plan::{Plan, PlanSelection};

/// Endpoint that issues a checkout link
pub const CREATE_PAYMENT_PATH: &str = "/create_payment";

/// Local page shown after a simulated payment
pub const PAYMENT_SUCCESS_PATH: &str = "/payment_success";

/// Delay before following a gateway redirect, so the toast is readable
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Delay before moving to the local success page
pub const SIMULATED_SUCCESS_DELAY_MS: u32 = 2000;

pub const DEFAULT_REJECTION_MESSAGE: &str = "Payment initialization failed. Please try again.";

/// Channel the user pays with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Mobile money, needs a phone number
    #[display("mpesa")]
    Mpesa,
    #[display("card")]
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Mpesa, PaymentMethod::Card];

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "M-PESA",
            PaymentMethod::Card => "Card",
        }
    }

    pub fn requires_phone(&self) -> bool {
        matches!(self, PaymentMethod::Mpesa)
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mpesa" => Ok(PaymentMethod::Mpesa),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(CheckoutError::MissingMethod),
        }
    }
}

/// Body of `POST /create_payment`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: u32,
    pub plan: Plan,
    pub payment_method: PaymentMethod,
    pub phone_number: String,
}

/// Reply of `POST /create_payment`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl PaymentResponse {
    pub fn checkout(payment_url: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            success: true,
            payment_url: Some(payment_url.into()),
            error: None,
            reference: Some(reference.into()),
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Interpret the reply. Anything other than a 2xx with `success: true` fails.
    pub fn into_outcome(self, http_ok: bool) -> Result<PaymentOutcome, CheckoutError> {
        if http_ok && self.success {
            return Ok(match self.payment_url.filter(|url| !url.is_empty()) {
                Some(url) => PaymentOutcome::Redirect(url),
                None => PaymentOutcome::Simulated,
            });
        }

        let message = self
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        Err(CheckoutError::Rejected(message))
    }
}

/// Successful result of a submission; navigation is always pending afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Gateway issued a hosted checkout URL
    Redirect(String),
    /// Server accepted without a URL (demo mode)
    Simulated,
}

impl PaymentOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            PaymentOutcome::Redirect(_) => "Redirecting to payment gateway...",
            PaymentOutcome::Simulated => "Payment successful! Redirecting to success page...",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PaymentOutcome::Redirect(_) => Severity::Info,
            PaymentOutcome::Simulated => Severity::Success,
        }
    }

    pub fn destination(&self) -> &str {
        match self {
            PaymentOutcome::Redirect(url) => url,
            PaymentOutcome::Simulated => PAYMENT_SUCCESS_PATH,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            PaymentOutcome::Redirect(_) => REDIRECT_DELAY_MS,
            PaymentOutcome::Simulated => SIMULATED_SUCCESS_DELAY_MS,
        }
    }
}

/// Every way a checkout attempt can end without navigation
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Please select a payment method.")]
    MissingMethod,
    #[error("Please enter your phone number for M-PESA payment.")]
    MissingPhone,
    /// Server answered but refused; carries its message or the fallback
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please check your connection and try again.")]
    Network,
}

/// Run the client-side preconditions and build the request body.
pub fn prepare_payment(
    selection: PlanSelection,
    method: Option<PaymentMethod>,
    phone_number: &str,
) -> Result<PaymentRequest, CheckoutError> {
    let method = method.ok_or(CheckoutError::MissingMethod)?;

    if method.requires_phone() && phone_number.is_empty() {
        return Err(CheckoutError::MissingPhone);
    }

    Ok(PaymentRequest {
        amount: selection.amount(),
        plan: selection.plan(),
        payment_method: method,
        phone_number: phone_number.to_string(),
    })
}

/// State of the pay button across one submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayButtonState {
    #[default]
    Idle,
    /// Request in flight
    Processing,
    /// Navigation scheduled, button stays disabled
    Redirecting,
}

impl PayButtonState {
    pub fn is_idle(&self) -> bool {
        matches!(self, PayButtonState::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayButtonState::Idle => "Pay Securely",
            PayButtonState::Processing => "Processing...",
            PayButtonState::Redirecting => "Redirecting...",
        }
    }

    /// State after the request settles
    pub fn settle<T>(result: &Result<T, CheckoutError>) -> Self {
        match result {
            Ok(_) => PayButtonState::Redirecting,
            Err(_) => PayButtonState::Idle,
        }
    }
}

/// Where one pay-button click ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutReport {
    pub button: PayButtonState,
    pub notification: Notification,
    /// Navigation to schedule, only on success
    pub outcome: Option<PaymentOutcome>,
}

impl CheckoutReport {
    fn settled(result: Result<PaymentOutcome, CheckoutError>) -> Self {
        let button = PayButtonState::settle(&result);
        match result {
            Ok(outcome) => Self {
                button,
                notification: Notification::new(outcome.message(), outcome.severity()),
                outcome: Some(outcome),
            },
            Err(err) => Self {
                button,
                notification: Notification::error(err.to_string()),
                outcome: None,
            },
        }
    }
}

/// Run one pay-button click.
///
/// Returns `None` without doing anything while a previous click is still in
/// flight or redirecting. A failed precondition never calls `send`. Otherwise
/// `on_state` sees `Processing` before the request and the settled state after.
pub async fn checkout<F, Fut>(
    button: PayButtonState,
    selection: PlanSelection,
    method: Option<PaymentMethod>,
    phone_number: &str,
    mut on_state: impl FnMut(PayButtonState),
    send: F,
) -> Option<CheckoutReport>
where
    F: FnOnce(PaymentRequest) -> Fut,
    Fut: Future<Output = Result<PaymentOutcome, CheckoutError>>,
{
    if !button.is_idle() {
        return None;
    }

    let request = match prepare_payment(selection, method, phone_number) {
        Ok(request) => request,
        Err(err) => return Some(CheckoutReport::settled(Err(err))),
    };

    on_state(PayButtonState::Processing);
    let report = CheckoutReport::settled(send(request).await);
    on_state(report.button);

    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_method_blocks_submission() {
        let result = prepare_payment(PlanSelection::default(), None, "254712345678");
        assert_eq!(result, Err(CheckoutError::MissingMethod));
    }

    #[test]
    fn test_mpesa_without_phone_blocks_submission() {
        let result = prepare_payment(PlanSelection::default(), Some(PaymentMethod::Mpesa), "");
        assert_eq!(result, Err(CheckoutError::MissingPhone));
    }

    #[test]
    fn test_card_without_phone_is_sent() {
        let request =
            prepare_payment(PlanSelection::new(Plan::Monthly), Some(PaymentMethod::Card), "")
                .unwrap();
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert_eq!(request.phone_number, "");
        assert_eq!(request.amount, 1000);
    }

    #[test]
    fn test_request_wire_format() {
        let request = prepare_payment(
            PlanSelection::new(Plan::Annual),
            Some(PaymentMethod::Mpesa),
            "254712345678",
        )
        .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount": 10000,
                "plan": "annual",
                "payment_method": "mpesa",
                "phone_number": "254712345678"
            })
        );
    }

    #[test]
    fn test_redirect_outcome() {
        let response: PaymentResponse =
            serde_json::from_str(r#"{"success":true,"payment_url":"https://pay.example/x"}"#)
                .unwrap();
        let outcome = response.into_outcome(true).unwrap();

        assert_eq!(outcome, PaymentOutcome::Redirect("https://pay.example/x".into()));
        assert_eq!(outcome.destination(), "https://pay.example/x");
        assert_eq!(outcome.severity(), Severity::Info);
        assert_eq!(outcome.delay_ms(), 1500);
    }

    #[test]
    fn test_success_without_url_is_simulated() {
        for body in [r#"{"success":true}"#, r#"{"success":true,"payment_url":""}"#] {
            let response: PaymentResponse = serde_json::from_str(body).unwrap();
            let outcome = response.into_outcome(true).unwrap();
            assert_eq!(outcome, PaymentOutcome::Simulated);
            assert_eq!(outcome.destination(), PAYMENT_SUCCESS_PATH);
            assert_eq!(outcome.severity(), Severity::Success);
            assert_eq!(outcome.delay_ms(), 2000);
        }
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let response = PaymentResponse::rejected("Card declined");
        assert_eq!(
            response.into_outcome(true),
            Err(CheckoutError::Rejected("Card declined".into()))
        );
    }

    #[test]
    fn test_rejection_falls_back_to_generic_message() {
        let response: PaymentResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = response.into_outcome(true).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_REJECTION_MESSAGE);

        let err = PaymentResponse::rejected("").into_outcome(false).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_REJECTION_MESSAGE);
    }

    #[test]
    fn test_non_2xx_fails_even_when_success_flag_set() {
        let response = PaymentResponse::checkout("https://pay.example/x", "REF");
        assert!(matches!(
            response.into_outcome(false),
            Err(CheckoutError::Rejected(_))
        ));
    }

    #[test]
    fn test_button_settles_by_outcome() {
        let ok: Result<PaymentOutcome, CheckoutError> = Ok(PaymentOutcome::Simulated);
        let network: Result<PaymentOutcome, CheckoutError> = Err(CheckoutError::Network);
        let rejected: Result<PaymentOutcome, CheckoutError> =
            Err(CheckoutError::Rejected("no".into()));

        assert_eq!(PayButtonState::settle(&ok), PayButtonState::Redirecting);
        assert_eq!(PayButtonState::settle(&network), PayButtonState::Idle);
        assert_eq!(PayButtonState::settle(&rejected), PayButtonState::Idle);
        assert_eq!(PayButtonState::Idle.label(), "Pay Securely");
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("mpesa".parse::<PaymentMethod>(), Ok(PaymentMethod::Mpesa));
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert!("paypal".parse::<PaymentMethod>().is_err());
        assert!(PaymentMethod::Mpesa.requires_phone());
        assert!(!PaymentMethod::Card.requires_phone());
    }
}
