//! 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="not-found-body">
                <Icon name=icons::EXCLAMATION_CIRCLE class="icon-xl" />

                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                <div class="hero-actions">
                    <A href="/" attr:class="btn-primary">"Go Home"</A>
                    <A href="/premium" attr:class="btn-secondary">"See Premium"</A>
                </div>
            </div>
        </div>
    }
}
