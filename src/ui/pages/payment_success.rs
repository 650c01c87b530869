//! Landing page after a completed or simulated checkout.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, SiteHeader};

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let reference = move || query.with(|q| q.get("reference"));

    view! {
        <Title text="Payment received - AI Study Buddy" />

        <div class="page">
            <SiteHeader />

            <section class="hero payment-success">
                <Icon name=icons::CHECK_CIRCLE class="icon-xl icon-success" />
                <h1>"Welcome to Premium!"</h1>
                <p class="hero-subtitle">
                    "Your payment was received. Premium features are now unlocked."
                </p>
                {move || {
                    reference()
                        .map(|reference| {
                            view! { <p class="payment-reference">"Reference: " {reference}</p> }
                        })
                }}
                <div class="hero-actions">
                    <A href="/" attr:class="btn-primary">"Start studying"</A>
                </div>
            </section>

            <Footer />
        </div>
    }
}
