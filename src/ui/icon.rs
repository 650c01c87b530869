use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icons::path(name) />
        </svg>
    }
}

/// Icon names and their SVG path data
pub mod icons {
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const EXCLAMATION_CIRCLE: &str = "exclamation-circle";
    pub const EXCLAMATION_TRIANGLE: &str = "exclamation-triangle";
    pub const INFO_CIRCLE: &str = "info-circle";
    pub const X: &str = "x";
    pub const LOCK: &str = "lock";
    pub const SPINNER: &str = "spinner";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const PHONE: &str = "phone";
    pub const CARD: &str = "card";
    pub const SPARKLES: &str = "sparkles";

    /// Path data for `name`; unknown names get the info icon
    pub fn path(name: &str) -> &'static str {
        match name {
            CHECK => "M5 13l4 4L19 7",
            CHECK_CIRCLE => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            EXCLAMATION_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            EXCLAMATION_TRIANGLE => {
                "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
            }
            X => "M6 18L18 6M6 6l12 12",
            LOCK => {
                "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"
            }
            SPINNER => "M12 3a9 9 0 109 9",
            CHEVRON_DOWN => "M19 9l-7 7-7-7",
            PHONE => {
                "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z"
            }
            CARD => {
                "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z"
            }
            SPARKLES => {
                "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"
            }
            _ => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::Severity;

        #[test]
        fn test_every_severity_has_an_icon() {
            let info = path(INFO_CIRCLE);
            assert_eq!(path(Severity::Info.icon()), info);
            for severity in [Severity::Success, Severity::Error, Severity::Warning] {
                assert_ne!(path(severity.icon()), info, "{severity}");
            }
        }

        #[test]
        fn test_unknown_name_falls_back_to_info() {
            assert_eq!(path("does-not-exist"), path(INFO_CIRCLE));
        }
    }
}
