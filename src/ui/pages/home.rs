//! Home page with the flashcard study form, the guided demo and the account
//! verification entry point.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::demo::{
    DEMO_NOTES, DEMO_SUBJECT, PULSE_MS, SUBJECTS, SUBJECTS_SECTION_ID, StudyRequest,
};
use crate::core::flashcards::Flashcard;
use crate::ui::browser;
use crate::ui::flashcard_client::generate_flashcards;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, SiteHeader};
use crate::ui::notifications::use_notifications;
use crate::ui::verification::VerificationModal;

#[component]
pub fn HomePage() -> impl IntoView {
    let notifier = use_notifications();

    let subject = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let pulsing = RwSignal::new(false);
    let verification_open = RwSignal::new(false);
    let generating = RwSignal::new(false);
    let cards = RwSignal::new(Vec::<Flashcard>::new());

    let get_started = move |_| browser::scroll_to_section(SUBJECTS_SECTION_ID);

    let watch_demo = move |_| {
        subject.set(DEMO_SUBJECT.to_string());
        notes.set(DEMO_NOTES.to_string());
        browser::scroll_to_section(SUBJECTS_SECTION_ID);

        pulsing.set(true);
        browser::after(PULSE_MS, move || {
            let _ = pulsing.try_set(false);
        });
    };

    let generate = move |_| {
        if generating.get_untracked() {
            return;
        }

        let request =
            match StudyRequest::from_form(&subject.get_untracked(), &notes.get_untracked()) {
                Ok(request) => request,
                Err(err) => {
                    browser::alert(&err.to_string());
                    return;
                }
            };

        generating.set(true);
        spawn_local(async move {
            match generate_flashcards(&request).await {
                Ok(generated) => {
                    leptos::logging::log!(
                        "Generated {} flashcards for {}",
                        generated.len(),
                        request.subject
                    );
                    notifier.success(format!(
                        "Generated {} flashcards for {}",
                        generated.len(),
                        request.subject
                    ));
                    let _ = cards.try_set(generated);
                }
                Err(err) => notifier.error(err.to_string()),
            }
            let _ = generating.try_set(false);
        });
    };

    view! {
        <Title text="AI Study Buddy - Flashcards, quizzes and summaries from your notes" />
        <Meta name="description" content="Paste your notes and get flashcards, quizzes and summaries in seconds." />

        <div class="page home-page">
            <SiteHeader />

            <section class="hero">
                <h1>"Your AI Study Buddy"</h1>
                <p class="hero-subtitle">
                    "Paste your notes and get flashcards, quizzes and summaries in seconds."
                </p>
                <div class="hero-actions">
                    <button class="btn-primary" on:click=get_started>"Get Started"</button>
                    <button class="btn-secondary" on:click=watch_demo>"Watch Demo"</button>
                    <button class="btn-link" on:click=move |_| verification_open.set(true)>
                        "Secure your account"
                    </button>
                </div>
            </section>

            <section id=SUBJECTS_SECTION_ID class="section">
                <h2 class="section-title">"What are you studying?"</h2>
                <div class="study-form">
                    <div class="form-group">
                        <label for="subject-select">"Subject"</label>
                        <select
                            id="subject-select"
                            class="input"
                            prop:value=move || subject.get()
                            on:change=move |ev| subject.set(event_target_value(&ev))
                        >
                            <option value="">"Select a subject"</option>
                            {SUBJECTS
                                .iter()
                                .map(|name| view! { <option value=*name>{*name}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="notes-input">"Your notes"</label>
                        <textarea
                            id="notes-input"
                            class="input"
                            rows="8"
                            placeholder="Paste or type your notes here..."
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button
                        id="generate-btn"
                        class="btn-primary"
                        class:pulse=move || pulsing.get()
                        disabled=move || generating.get()
                        on:click=generate
                    >
                        <Icon name=icons::SPARKLES class="icon-sm" />
                        <span>
                            {move || {
                                if generating.get() { "Generating..." } else { "Generate study materials" }
                            }}
                        </span>
                    </button>
                </div>

                <Show when=move || cards.with(|c| !c.is_empty())>
                    <div class="flashcards">
                        <For
                            each=move || cards.get().into_iter().enumerate()
                            key=|(index, card)| (*index, card.question.clone())
                            children=|(_, card)| view! { <FlashcardView card=card /> }
                        />
                    </div>
                </Show>
            </section>

            <section class="section">
                <h2 class="section-title">"How it works"</h2>
                <div class="steps-grid">
                    <div class="step-card">
                        <div class="step-number">"1"</div>
                        <h3>"Pick a subject"</h3>
                        <p>"Tell us what you are studying."</p>
                    </div>
                    <div class="step-card">
                        <div class="step-number">"2"</div>
                        <h3>"Add your notes"</h3>
                        <p>"Paste lecture notes or a textbook passage."</p>
                    </div>
                    <div class="step-card">
                        <div class="step-number">"3"</div>
                        <h3>"Study"</h3>
                        <p>"Review flashcards, take quizzes and read summaries."</p>
                    </div>
                </div>
            </section>

            <section class="section cta">
                <h2>"Need more?"</h2>
                <p>"Premium unlocks unlimited flashcards, analytics and PDF export."</p>
                <A href="/premium" attr:class="btn-premium">"See Premium plans"</A>
            </section>

            <Footer />
        </div>

        <VerificationModal open=verification_open />
    }
}

/// Question card; clicking flips it to show the answer
#[component]
fn FlashcardView(card: Flashcard) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);
    let Flashcard { question, answer } = card;

    view! {
        <div
            class="flashcard"
            class:flipped=move || flipped.get()
            on:click=move |_| set_flipped.update(|v| *v = !*v)
        >
            <p class="flashcard-question">{question}</p>
            <Show
                when=move || flipped.get()
                fallback=|| view! { <p class="flashcard-hint">"Click to reveal the answer"</p> }
            >
                <p class="flashcard-answer">{answer.clone()}</p>
            </Show>
        </div>
    }
}
