//! Site header and footer shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav">
                <A href="/" attr:class="brand">
                    <Icon name=icons::SPARKLES class="icon-brand" />
                    <span>"AI Study Buddy"</span>
                </A>
                <div class="nav-links">
                    <A href="/" attr:class="nav-link">"Home"</A>
                    <A href="/premium" attr:class="nav-link nav-link-premium">"Premium"</A>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-title">"AI Study Buddy"</span>
                    <p>"Turn your notes into flashcards, quizzes and summaries in seconds."</p>
                </div>
                <ul class="footer-links">
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/premium">"Premium"</A></li>
                </ul>
            </div>
            <div class="footer-bottom">
                <span>"© 2026 AI Study Buddy. Payments via M-PESA and card."</span>
            </div>
        </footer>
    }
}
