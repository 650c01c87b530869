//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Hosted checkout used when `CHECKOUT_BASE_URL` is not set
pub const DEFAULT_CHECKOUT_BASE_URL: &str = "https://pay.intasend.com/pay";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted checkout page; the payment reference is appended
    pub checkout_base_url: String,

    /// Payment gateway secret key
    pub gateway_api_key: Option<String>,

    /// Payment gateway publishable key
    pub gateway_publishable_key: Option<String>,

    /// Secret key for signing cookies, etc.
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            checkout_base_url: std::env::var("CHECKOUT_BASE_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_CHECKOUT_BASE_URL.to_string()),
            gateway_api_key: std::env::var("INTASEND_API_KEY").ok(),
            gateway_publishable_key: std::env::var("INTASEND_PUBLISHABLE_KEY").ok(),
            secret_key: std::env::var("SECRET_KEY").ok(),
        }
    }

    /// Check if the gateway secret key is configured
    pub fn has_gateway_key(&self) -> bool {
        self.gateway_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if the gateway publishable key is configured
    pub fn has_publishable_key(&self) -> bool {
        self.gateway_publishable_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Check if secret key is configured
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Checkout URL for a payment reference
    pub fn checkout_url(&self, reference: &str) -> String {
        format!("{}/{}", self.checkout_base_url.trim_end_matches('/'), reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(checkout_base_url: &str) -> Config {
        Config {
            checkout_base_url: checkout_base_url.to_string(),
            gateway_api_key: None,
            gateway_publishable_key: None,
            secret_key: None,
        }
    }

    #[test]
    fn test_config_with_no_keys() {
        let config = config(DEFAULT_CHECKOUT_BASE_URL);

        assert!(!config.has_gateway_key());
        assert!(!config.has_publishable_key());
        assert!(!config.has_secret_key());
    }

    #[test]
    fn test_has_gateway_key() {
        let mut config = config(DEFAULT_CHECKOUT_BASE_URL);
        config.gateway_api_key = Some(String::new());
        assert!(!config.has_gateway_key());

        config.gateway_api_key = Some("ISSecretKey_test".to_string());
        assert!(config.has_gateway_key());
    }

    #[test]
    fn test_has_secret_key() {
        let mut config = config(DEFAULT_CHECKOUT_BASE_URL);
        config.secret_key = Some("secret".to_string());
        assert!(config.has_secret_key());
    }

    #[test]
    fn test_checkout_url() {
        let config = config("https://pay.example/checkout/");
        assert_eq!(
            config.checkout_url("AI_STUDY_BUDDY_20250101120000"),
            "https://pay.example/checkout/AI_STUDY_BUDDY_20250101120000"
        );
    }
}
