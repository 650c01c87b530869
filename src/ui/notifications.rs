//! Toast notifications
//!
//! One banner at a time, top right. A new notification replaces the current
//! one; each auto-dismisses after [`AUTO_DISMISS_MS`] unless closed first.

use crate::core::notification::AUTO_DISMISS_MS;
use crate::core::{Notification, NotificationItem, NotificationSlot};
use crate::ui::browser;
use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Notifications container component
/// Place this once at the app level
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();

    view! {
        <div class="notification-region" aria-live="polite">
            {move || {
                manager
                    .slot
                    .with(|slot| slot.current().cloned())
                    .map(|item| view! { <NotificationToast item=item manager=manager /> })
            }}
        </div>
    }
}

/// Single notification banner
#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let Notification { message, severity } = item.notification;

    view! {
        <div
            class=format!("notification notification-{}", severity)
            style=format!("background: {};", severity.color())
            role="status"
        >
            <div class="notification-content">
                <Icon name=severity.icon() class="icon" />
                <span>{message}</span>
                <button
                    class="notification-close"
                    on:click=move |_| manager.dismiss(id)
                    aria-label="Dismiss notification"
                >
                    <Icon name=crate::ui::icon::icons::X class="icon-sm" />
                </button>
            </div>
        </div>
    }
}

/// Handle to the page-wide notification slot
#[derive(Clone, Copy)]
pub struct NotificationManager {
    slot: RwSignal<NotificationSlot>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
        }
    }

    /// Show a notification, replacing the current one
    pub fn notify(&self, notification: Notification) {
        let Some(id) = self.slot.try_update(|slot| slot.show(notification)) else {
            return;
        };

        let slot = self.slot;
        browser::after(AUTO_DISMISS_MS, move || {
            // No-op if the banner was closed or replaced meanwhile
            let _ = slot.try_update(|slot| slot.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notification::info(message));
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.slot.try_update(|slot| slot.dismiss(id));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
