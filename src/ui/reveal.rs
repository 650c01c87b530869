//! Scroll reveal: elements start hidden and fade in the first time they
//! become visible. Revealed elements are no longer observed.

/// Hide every element matching `selector` and reveal it on first intersection
pub fn reveal_on_scroll(selector: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Err(err) = client::observe(selector) {
            leptos::logging::warn!("Scroll reveal unavailable: {:?}", err);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = selector;
    }
}

#[cfg(not(feature = "ssr"))]
mod client {
    use crate::core::animation::{
        HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION,
        REVEALED_OPACITY, REVEALED_TRANSFORM,
    };
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use leptos::web_sys::{
        self, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    pub(super) fn observe(selector: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    if let Some(element) = target.dyn_ref::<HtmlElement>() {
                        let style = element.style();
                        let _ = style.set_property("opacity", REVEALED_OPACITY);
                        let _ = style.set_property("transform", REVEALED_TRANSFORM);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // Lives as long as the page
        callback.forget();

        let nodes = document.query_selector_all(selector)?;
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };

            let style = element.style();
            style.set_property("opacity", HIDDEN_OPACITY)?;
            style.set_property("transform", HIDDEN_TRANSFORM)?;
            style.set_property("transition", REVEAL_TRANSITION)?;
            observer.observe(&element);
        }

        Ok(())
    }
}
