//! Premium page
//!
//! Pricing tiers, how-it-works steps, the plan comparison table and the FAQ.
//! Choosing a paid tier opens the payment modal with that plan's selection.
//! On mount the page reports a page view and starts the scroll reveal.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::analytics::AnalyticsEvent;
use crate::core::animation::{CardHover, REVEAL_SELECTOR, entrance_delay};
use crate::core::feature_hints::feature_hint;
use crate::core::{PaymentModalState, Plan, PlanSelection};
use crate::ui::analytics::track;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, SiteHeader};
use crate::ui::payment_modal::{PaymentModal, open_payment_modal};
use crate::ui::reveal::reveal_on_scroll;

/// One pricing card. `plan` is `None` for the free tier.
struct PricingTier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    badge: Option<&'static str>,
    features: &'static [&'static str],
    plan: Option<Plan>,
}

static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Free",
        price: "KES 0",
        period: "forever",
        badge: None,
        features: &[
            "10 flashcards per day",
            "Basic quizzes",
            "Summaries for short notes",
        ],
        plan: None,
    },
    PricingTier {
        name: "Monthly",
        price: "KES 1,000",
        period: "/month",
        badge: Some("Most Popular"),
        features: &[
            "Unlimited flashcards",
            "Progress Analytics",
            "Priority AI processing",
            "PDF export",
            "Study Schedules",
        ],
        plan: Some(Plan::Monthly),
    },
    PricingTier {
        name: "Annual",
        price: "KES 10,000",
        period: "/year",
        badge: Some("Save 17%"),
        features: &[
            "Everything in Monthly",
            "Unlimited flashcards",
            "Progress Analytics",
            "Priority AI processing",
            "PDF export",
            "Study Schedules",
        ],
        plan: Some(Plan::Annual),
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Choose a plan", "Pick monthly or annual billing."),
    (
        "Pay with M-PESA or card",
        "Confirm the prompt on your phone or enter your card on the secure checkout page.",
    ),
    (
        "Start studying",
        "Premium features unlock as soon as the payment is confirmed.",
    ),
];

const COMPARISON: [(&str, &str, &str); 5] = [
    ("Flashcards", "10 per day", "Unlimited"),
    ("Progress analytics", "-", "Included"),
    ("AI processing", "Standard queue", "Priority queue"),
    ("PDF export", "-", "Included"),
    ("Study schedules", "-", "Included"),
];

const FAQS: [(&str, &str); 4] = [
    (
        "How do I pay with M-PESA?",
        "Choose M-PESA in the payment dialog and enter your number as 2547XXXXXXXX or 2541XXXXXXXX. You will be sent to the checkout page to confirm.",
    ),
    (
        "Can I pay by card?",
        "Yes. Choose Card and you will be redirected to a secure checkout page. The phone number is optional.",
    ),
    (
        "Can I cancel at any time?",
        "Yes. Your premium access stays active until the end of the period you paid for.",
    ),
    (
        "Is my payment information safe?",
        "Payments are handled by our payment partner. We never see or store your card details or M-PESA PIN.",
    ),
];

#[component]
pub fn PremiumPage() -> impl IntoView {
    let modal = RwSignal::new(PaymentModalState::default());

    // Runs once after hydration
    Effect::new(move |_| {
        track(AnalyticsEvent::page_view());
        reveal_on_scroll(REVEAL_SELECTOR);
    });

    view! {
        <SeoMeta />
        <PremiumStyles />

        <div class="page premium-page">
            <SiteHeader />

            <section class="hero premium-hero">
                <h1>"Study smarter with Premium"</h1>
                <p class="hero-subtitle">
                    "Unlimited flashcards, progress analytics and priority AI processing."
                </p>
            </section>

            <PricingSection modal=modal />
            <StepsSection />
            <ComparisonSection />
            <FaqSection />

            <Footer />
        </div>

        <PaymentModal state=modal />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Premium - AI Study Buddy" />
        <Meta name="description" content="Upgrade to AI Study Buddy Premium. Pay with M-PESA or card, monthly or annually." />
        <Meta property="og:title" content="AI Study Buddy Premium" />
        <Meta property="og:type" content="website" />
        <Link rel="canonical" href="/premium" />
    }
}

#[component]
fn PricingSection(modal: RwSignal<PaymentModalState>) -> impl IntoView {
    view! {
        <section id="pricing" class="section">
            <h2 class="section-title">"Choose your plan"</h2>
            <div class="pricing-grid">
                {TIERS
                    .iter()
                    .enumerate()
                    .map(|(index, tier)| view! { <PricingCard tier=tier index=index modal=modal /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    tier: &'static PricingTier,
    index: usize,
    modal: RwSignal<PaymentModalState>,
) -> impl IntoView {
    let hover = RwSignal::new(CardHover::Resting);

    view! {
        <div
            class="pricing-card animate-in"
            class:featured=tier.badge.is_some()
            style:animation-delay=entrance_delay(index)
            style:transform=move || hover.get().transform()
            on:mouseenter=move |_| hover.set(CardHover::Lifted)
            on:mouseleave=move |_| hover.set(CardHover::Resting)
            on:click=move |_| track(AnalyticsEvent::pricing_card_clicked(tier.name))
        >
            {tier.badge.map(|badge| view! { <div class="pricing-badge">{badge}</div> })}

            <h3>{tier.name}</h3>
            <div class="price">
                <span class="price-amount">{tier.price}</span>
                <span class="price-period">{tier.period}</span>
            </div>

            <ul class="feature-list">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li title=feature_hint(feature)>
                                <Icon name=icons::CHECK class="icon-sm icon-check" />
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            {match tier.plan {
                Some(plan) => {
                    view! {
                        <button
                            class="btn-premium"
                            on:click=move |_| {
                                track(AnalyticsEvent::payment_initiated(plan.title(), plan.amount()));
                                open_payment_modal(modal, PlanSelection::new(plan));
                            }
                        >
                            {format!("Get {}", plan.title())}
                        </button>
                    }
                        .into_any()
                }
                None => view! { <A href="/" attr:class="btn-free">"Keep studying free"</A> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StepsSection() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section-title">"How it works"</h2>
            <div class="steps-grid">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, (title, body))| {
                        view! {
                            <div class="step-card">
                                <div class="step-number">{index + 1}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ComparisonSection() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section-title">"Free vs Premium"</h2>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Feature"</th>
                        <th>"Free"</th>
                        <th>"Premium"</th>
                    </tr>
                </thead>
                <tbody>
                    {COMPARISON
                        .iter()
                        .map(|(feature, free, premium)| {
                            view! {
                                <tr>
                                    <td>{*feature}</td>
                                    <td>{*free}</td>
                                    <td class="premium-cell">{*premium}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <h2 class="section-title">"Frequently Asked Questions"</h2>
            <div class="faq-list">
                {FAQS
                    .iter()
                    .map(|(question, answer)| view! { <FaqItem question=*question answer=*answer /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// FAQ accordion item; every click is reported with its question
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div
            class="faq-item"
            class:open=move || is_open.get()
            on:click=move |_| {
                track(AnalyticsEvent::faq_item_clicked(question));
                set_is_open.update(|v| *v = !*v);
            }
        >
            <div class="faq-question" aria-expanded=move || is_open.get().to_string()>
                <h3>{question}</h3>
                <Icon name=icons::CHEVRON_DOWN class="icon-sm faq-chevron" />
            </div>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}

/// Entrance animation for the pricing cards
#[component]
fn PremiumStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes fadeInUp {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .animate-in {
                animation: fadeInUp 0.6s ease backwards;
            }
            "#
        </style>
    }
}
