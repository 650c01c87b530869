//! Forwards analytics events to the page's global `gtag` function if present.

use crate::core::AnalyticsEvent;
use crate::ui::browser;

/// Best-effort tracking; without a `gtag` hook the event is only logged.
pub fn track(event: AnalyticsEvent) {
    let payload = event.payload(&browser::current_path());
    leptos::logging::log!("Premium event tracked: {} {}", event.name, payload);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::{JsCast, JsValue};
        use serde::Serialize;

        let Some(window) = leptos::web_sys::window() else {
            return;
        };
        let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(gtag) = hook.dyn_ref::<js_sys::Function>() else {
            return;
        };

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match payload.serialize(&serializer) {
            Ok(properties) => {
                let result = gtag.call3(
                    &JsValue::NULL,
                    &JsValue::from_str("event"),
                    &JsValue::from_str(event.name),
                    &properties,
                );
                if let Err(err) = result {
                    leptos::logging::warn!("gtag call failed: {:?}", err);
                }
            }
            Err(err) => {
                leptos::logging::warn!("Could not encode analytics payload: {}", err);
            }
        }
    }
}
