//! Thin wrappers over the browser APIs the pages need.
//!
//! Each helper is a no-op during server rendering so components can call them
//! from event handlers without their own `cfg` blocks.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Run `f` once after `ms` milliseconds. Never cancelled.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            f();
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ms, f);
    }
}

/// Path of the current page, empty on the server
pub fn current_path() -> String {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                return path;
            }
        }
    }
    String::new()
}

/// Full page navigation to `url`
pub fn navigate_to(url: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                leptos::logging::error!("Navigation to {} failed: {:?}", url, err);
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = url;
    }
}

/// Blocking `alert()` dialog
pub fn alert(message: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
    }
}

/// Smooth-scroll the element with `id` into view
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
