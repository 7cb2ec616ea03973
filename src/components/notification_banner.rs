//! Notification Banner Component

use leptos::prelude::*;

use crate::notification::BASE_CLASS;
use crate::store::{use_app_store, AppStateStoreFields};

/// Shows the active notification; hidden by CSS when only the base class is set
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let store = use_app_store();
    let active = move || store.notification().get();

    view! {
        <div
            id="notification"
            class=move || active().map(|a| a.notification.class()).unwrap_or_else(|| BASE_CLASS.to_string())
            role="status"
        >
            {move || active().map(|a| a.notification.message)}
        </div>
    }
}
