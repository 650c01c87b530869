//! Checkout link endpoint
//!
//! - POST /create_payment - Validate a plan purchase and return a hosted checkout URL
//!
//! The endpoint only issues a reference and the gateway URL for it. It does
//! not contact the gateway or record anything.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::payment::{CREATE_PAYMENT_PATH, PaymentRequest, PaymentResponse};
use crate::core::phone::check_phone;

/// Prefix of every payment reference
pub const REFERENCE_PREFIX: &str = "AI_STUDY_BUDDY_";

/// Payment API state
#[derive(Clone)]
pub struct PaymentApiState {
    pub config: Config,
}

impl PaymentApiState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Reasons a checkout request is refused
#[derive(Debug, thiserror::Error)]
pub enum PaymentApiError {
    #[error("Invalid payment request")]
    InvalidBody(#[from] JsonRejection),
    #[error("Amount does not match the selected plan")]
    AmountMismatch,
    #[error("A valid M-PESA phone number is required")]
    InvalidPhone,
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let body = PaymentResponse::rejected(self.to_string());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Create the payment API router
pub fn payment_router(state: PaymentApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(CREATE_PAYMENT_PATH, post(create_payment_handler))
        .with_state(state)
}

/// Reference embedded in the checkout URL, unique per second
pub fn payment_reference(now: DateTime<Utc>) -> String {
    format!("{}{}", REFERENCE_PREFIX, now.format("%Y%m%d%H%M%S"))
}

/// Check that the request matches what the page could have produced
pub fn validate_request(request: &PaymentRequest) -> Result<(), PaymentApiError> {
    if request.amount != request.plan.amount() {
        return Err(PaymentApiError::AmountMismatch);
    }

    if request.payment_method.requires_phone() && !check_phone(&request.phone_number).is_valid()
    {
        return Err(PaymentApiError::InvalidPhone);
    }

    Ok(())
}

/// POST /create_payment
async fn create_payment_handler(
    State(state): State<Arc<PaymentApiState>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, PaymentApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::warn!("Rejected payment body: {}", rejection.body_text());
    })?;

    validate_request(&request).inspect_err(|err| {
        tracing::warn!(
            "Rejected {} payment via {}: {}",
            request.plan,
            request.payment_method,
            err
        );
    })?;

    let reference = payment_reference(Utc::now());
    let payment_url = state.config.checkout_url(&reference);

    tracing::info!(
        "Issued checkout {} for {} plan ({} KES) via {}",
        reference,
        request.plan,
        request.amount,
        request.payment_method
    );

    Ok(Json(PaymentResponse::checkout(payment_url, reference)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payment::PaymentMethod;
    use crate::core::plan::Plan;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::TimeZone;
    use tower::ServiceExt;

    fn app() -> Router {
        payment_router(PaymentApiState::new(Config {
            checkout_base_url: "https://pay.example/pay".to_string(),
            gateway_api_key: None,
            gateway_publishable_key: None,
            secret_key: None,
        }))
    }

    async fn post_json(body: &str) -> (StatusCode, PaymentResponse) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CREATE_PAYMENT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_payment_reference_format() {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(payment_reference(now), "AI_STUDY_BUDDY_20250309140507");
    }

    #[test]
    fn test_validate_request() {
        let mut request = PaymentRequest {
            amount: 10000,
            plan: Plan::Annual,
            payment_method: PaymentMethod::Mpesa,
            phone_number: "254712345678".to_string(),
        };
        assert!(validate_request(&request).is_ok());

        request.amount = 1000;
        assert!(matches!(
            validate_request(&request),
            Err(PaymentApiError::AmountMismatch)
        ));

        request.amount = 10000;
        request.phone_number = "0712345678".to_string();
        assert!(matches!(
            validate_request(&request),
            Err(PaymentApiError::InvalidPhone)
        ));

        request.payment_method = PaymentMethod::Card;
        assert!(validate_request(&request).is_ok());
    }

    #[tokio::test]
    async fn test_create_payment_returns_checkout_url() {
        let (status, body) = post_json(
            r#"{"amount":10000,"plan":"annual","payment_method":"mpesa","phone_number":"254712345678"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        let reference = body.reference.unwrap();
        assert!(reference.starts_with(REFERENCE_PREFIX));
        assert_eq!(
            body.payment_url.unwrap(),
            format!("https://pay.example/pay/{reference}")
        );
    }

    #[tokio::test]
    async fn test_card_without_phone_is_accepted() {
        let (status, body) =
            post_json(r#"{"amount":1000,"plan":"monthly","payment_method":"card","phone_number":""}"#)
                .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
    }

    #[tokio::test]
    async fn test_amount_mismatch_is_rejected() {
        let (status, body) = post_json(
            r#"{"amount":1,"plan":"annual","payment_method":"card","phone_number":""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(
            body.error.as_deref(),
            Some("Amount does not match the selected plan")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_as_json() {
        let (status, body) = post_json(r#"{"plan":"weekly"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Invalid payment request"));
    }
}
