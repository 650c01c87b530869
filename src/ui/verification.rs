//! Account verification wizard shown from the home page.

use leptos::prelude::*;

use crate::core::VerificationWizard;
use crate::core::wizard::VERIFICATION_STEPS;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn VerificationModal(
    /// Whether the wizard is visible
    open: RwSignal<bool>,
) -> impl IntoView {
    let wizard = RwSignal::new(VerificationWizard::new(VERIFICATION_STEPS.len()));
    let email = RwSignal::new(String::new());

    let next = move |_| {
        let result = wizard.try_update(|w| w.next(&email.get_untracked()));
        if let Some(Err(err)) = result {
            browser::alert(&err.to_string());
        }
    };
    let prev = move |_| {
        wizard.update(|w| {
            w.prev();
        });
    };
    let finish = move |_| {
        open.set(false);
        wizard.update(|w| w.reset());
    };

    view! {
        <div
            id="security-modal"
            class="modal"
            style=move || if open.get() { "display: flex;" } else { "display: none;" }
            role="dialog"
            aria-modal="true"
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Secure your account"</h2>
                    <span class="step-counter">
                        {move || wizard.with(|w| format!("Step {} of {}", w.step() + 1, w.len()))}
                    </span>
                </div>

                {VERIFICATION_STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let first = index == 0;
                        let last = index + 1 == VERIFICATION_STEPS.len();

                        view! {
                            <div
                                class="verification-step"
                                class:active=move || wizard.with(|w| w.is_active(index))
                            >
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>

                                {first.then(|| view! {
                                    <input
                                        id="user-email"
                                        type="email"
                                        class="input"
                                        placeholder="you@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                })}

                                {last.then(|| view! {
                                    <div class="verification-done">
                                        <Icon name=icons::CHECK_CIRCLE class="icon-lg" />
                                    </div>
                                })}

                                <div class="step-actions">
                                    {(!first).then(|| view! {
                                        <button class="btn-secondary prev-step" on:click=prev>"Back"</button>
                                    })}
                                    {if last {
                                        view! {
                                            <button class="btn-primary finish-step" on:click=finish>"Finish"</button>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <button class="btn-primary next-step" on:click=next>"Next"</button>
                                        }.into_any()
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
