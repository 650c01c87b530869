//! Payment modal
//!
//! Shows the amount for the selected plan, the payment method choice and the
//! M-PESA phone field, and runs one checkout request per click on the pay
//! button. The button stays disabled while a request is in flight and after a
//! redirect has been scheduled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::analytics::AnalyticsEvent;
use crate::core::modal::{MODAL_CLOSE_DELAY_MS, MODAL_FADE_IN_DELAY_MS};
use crate::core::payment::checkout;
use crate::core::{
    PayButtonState, PaymentMethod, PaymentModalState, PhoneFieldCopy, PlanSelection, check_phone,
    submit_allowed,
};
use crate::ui::analytics::track;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::payment_client::send_payment;

#[component]
pub fn PaymentModal(
    /// Phase and plan selection, opened by the pricing cards
    state: RwSignal<PaymentModalState>,
) -> impl IntoView {
    let notifier = use_notifications();

    let method = RwSignal::new(None::<PaymentMethod>);
    let phone = RwSignal::new(String::new());
    let pay_state = RwSignal::new(PayButtonState::Idle);

    let phone_status = Memo::new(move |_| phone.with(|p| check_phone(p)));
    let field_copy = Memo::new(move |_| PhoneFieldCopy::for_method(method.get()));
    let pay_disabled = Memo::new(move |_| {
        !pay_state.get().is_idle() || !submit_allowed(method.get(), phone_status.get())
    });

    let close = move || {
        if state.try_update(|s| s.begin_close()).unwrap_or(false) {
            browser::after(MODAL_CLOSE_DELAY_MS, move || {
                let _ = state.try_update(|s| s.finish_close());
            });
        }
    };

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if closes_on_key(state, &ev.key()) {
                close();
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    let submit = move |_| {
        let button = pay_state.get_untracked();
        let selection = state.with_untracked(|s| s.selection());
        let method = method.get_untracked();
        let phone = phone.get_untracked();

        spawn_local(async move {
            let on_state = move |next| {
                let _ = pay_state.try_set(next);
            };
            let send = |request| async move { send_payment(&request).await };

            let Some(report) = checkout(button, selection, method, &phone, on_state, send).await
            else {
                return;
            };

            notifier.notify(report.notification);
            if let Some(outcome) = report.outcome {
                let destination = outcome.destination().to_string();
                browser::after(outcome.delay_ms(), move || {
                    browser::navigate_to(&destination);
                });
            }
        });
    };

    view! {
        <div
            id="payment-modal"
            class="modal"
            style=move || state.with(|s| s.phase().style())
            on:click=move |ev| {
                #[cfg(not(feature = "ssr"))]
                {
                    // Only clicks on the backdrop itself, not bubbled from the dialog
                    if ev.target() == ev.current_target() {
                        close();
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = ev;
                }
            }
            role="dialog"
            aria-modal="true"
            aria-labelledby="payment-modal-title"
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="payment-modal-title">"Complete your upgrade"</h2>
                    <button
                        class="btn-icon"
                        on:click=move |_| close()
                        aria-label="Close payment dialog"
                    >
                        <Icon name=icons::X />
                    </button>
                </div>

                <div class="payment-summary">
                    <div class="summary-row">
                        <span>{move || state.with(|s| format!("Premium ({})", s.selection().plan().title()))}</span>
                        <span id="payment-amount">{move || state.with(|s| s.selection().display_amount())}</span>
                    </div>
                    <div class="summary-row summary-total">
                        <span>"Total"</span>
                        <span id="payment-total">{move || state.with(|s| s.selection().display_amount())}</span>
                    </div>
                </div>

                <fieldset class="payment-options">
                    <legend>"Payment method"</legend>
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="payment-option">
                                    <input
                                        type="radio"
                                        name="payment-method"
                                        value=option.to_string()
                                        prop:checked=move || method.get() == Some(option)
                                        on:change=move |_| {
                                            method.set(Some(option));
                                            track(AnalyticsEvent::payment_method_selected(option));
                                        }
                                    />
                                    <Icon
                                        name=if option.requires_phone() { icons::PHONE } else { icons::CARD }
                                        class="payment-icon"
                                    />
                                    <span>{option.display_name()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>

                <div class="form-group">
                    <label for="phone-number">{move || field_copy.get().label}</label>
                    <input
                        id="phone-number"
                        type="tel"
                        inputmode="numeric"
                        class="input"
                        placeholder=move || field_copy.get().placeholder
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        style:border-color=move || phone_status.get().border_color().unwrap_or_default()
                    />
                    {move || {
                        phone_status
                            .get()
                            .error_message()
                            .map(|message| view! { <div class="field-error">{message}</div> })
                    }}
                </div>

                <button
                    id="pay-button"
                    class="btn-pay"
                    disabled=move || pay_disabled.get()
                    on:click=submit
                >
                    {move || {
                        let current = pay_state.get();
                        if current.is_idle() {
                            view! { <Icon name=icons::LOCK class="icon-sm" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::SPINNER class="icon-sm icon-spin" /> }.into_any()
                        }
                    }}
                    <span>{move || pay_state.get().label()}</span>
                </button>

                <p class="payment-note">
                    "Payments are processed securely by our payment partner."
                </p>
            </div>
        </div>
    }
}

/// Show the modal for `selection` and start its fade-in
pub fn open_payment_modal(state: RwSignal<PaymentModalState>, selection: PlanSelection) {
    state.update(|s| s.open(selection));
    browser::after(MODAL_FADE_IN_DELAY_MS, move || {
        let _ = state.try_update(|s| s.finish_open());
    });
}

/// Whether a key press should close the modal. False once the modal's page is
/// gone, since the window listener can still fire after the signal is disposed.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn closes_on_key(state: RwSignal<PaymentModalState>, key: &str) -> bool {
    key == "Escape" && state.try_with_untracked(|s| s.is_open()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Plan;

    #[test]
    fn test_escape_closes_open_modal() {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(PaymentModalState::default()));

        assert!(!closes_on_key(state, "Escape"));

        state.update(|s| s.open(PlanSelection::new(Plan::Annual)));
        assert!(closes_on_key(state, "Escape"));
        assert!(!closes_on_key(state, "Enter"));
    }

    #[test]
    fn test_escape_after_page_unmount_is_ignored() {
        let owner = Owner::new();
        let state = owner.with(|| {
            let state = RwSignal::new(PaymentModalState::default());
            state.update(|s| s.open(PlanSelection::new(Plan::Monthly)));
            state
        });

        owner.cleanup();

        assert!(!closes_on_key(state, "Escape"));
    }
}
