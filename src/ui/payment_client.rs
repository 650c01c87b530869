//! Browser side of `POST /create_payment`.

use crate::core::payment::{CheckoutError, PaymentOutcome, PaymentRequest};

/// Send one checkout request and interpret the reply.
///
/// A request that never completes, or a reply that is not the expected JSON,
/// is a [`CheckoutError::Network`].
pub async fn send_payment(request: &PaymentRequest) -> Result<PaymentOutcome, CheckoutError> {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::payment::{CREATE_PAYMENT_PATH, PaymentResponse};
        use gloo_net::http::Request;

        let response = Request::post(CREATE_PAYMENT_PATH)
            .json(request)
            .map_err(|err| {
                leptos::logging::error!("Payment error: {}", err);
                CheckoutError::Network
            })?
            .send()
            .await
            .map_err(|err| {
                leptos::logging::error!("Payment error: {}", err);
                CheckoutError::Network
            })?;

        let http_ok = response.ok();
        let body = response.json::<PaymentResponse>().await.map_err(|err| {
            leptos::logging::error!("Payment error: unreadable response: {}", err);
            CheckoutError::Network
        })?;

        body.into_outcome(http_ok)
    }
    #[cfg(feature = "ssr")]
    {
        let _ = request;
        Err(CheckoutError::Network)
    }
}
