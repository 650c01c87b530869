//! Named analytics events for the premium page.

use serde_json::{Map, Value};

use super::payment::PaymentMethod;

/// Fire-and-forget event forwarded to the page's analytics hook
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn page_view() -> Self {
        Self::new("premium_page_view")
    }

    pub fn pricing_card_clicked(plan_type: &str) -> Self {
        Self::new("pricing_card_clicked").with("plan_type", plan_type.to_lowercase())
    }

    pub fn payment_method_selected(method: PaymentMethod) -> Self {
        Self::new("payment_method_selected").with("method", method.to_string())
    }

    pub fn payment_initiated(plan_type: &str, amount: u32) -> Self {
        Self::new("payment_initiated")
            .with("plan_type", plan_type.to_lowercase())
            .with("amount", amount)
    }

    pub fn faq_item_clicked(question: &str) -> Self {
        Self::new("faq_item_clicked").with("question", question)
    }

    /// Properties plus the page path, as sent to the tracking hook
    pub fn payload(&self, page_location: &str) -> Value {
        let mut properties = self.properties.clone();
        properties.insert("page_location".to_string(), Value::from(page_location));
        Value::Object(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_adds_page_location() {
        let event = AnalyticsEvent::pricing_card_clicked("Annual");
        assert_eq!(
            event.payload("/premium"),
            json!({"plan_type": "annual", "page_location": "/premium"})
        );
    }

    #[test]
    fn test_page_view_has_no_properties() {
        let event = AnalyticsEvent::page_view();
        assert_eq!(event.name, "premium_page_view");
        assert_eq!(event.payload("/premium"), json!({"page_location": "/premium"}));
    }

    #[test]
    fn test_payment_events() {
        let initiated = AnalyticsEvent::payment_initiated("Monthly", 1000);
        assert_eq!(initiated.properties["amount"], json!(1000));
        assert_eq!(initiated.properties["plan_type"], json!("monthly"));

        let selected = AnalyticsEvent::payment_method_selected(PaymentMethod::Mpesa);
        assert_eq!(selected.properties["method"], json!("mpesa"));
    }

    #[test]
    fn test_page_location_overrides_property() {
        let event = AnalyticsEvent::new("custom").with("page_location", "stale");
        assert_eq!(event.payload("/now")["page_location"], json!("/now"));
    }
}
