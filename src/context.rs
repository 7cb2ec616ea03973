//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::Outcome;
use crate::api::FetchClient;
use crate::config::AppConfig;
use crate::notification::Notification;
use crate::store::{store_dismiss_notification, store_show_notification, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub store: AppStore,
    client: StoredValue<FetchClient>,
    notification_ms: u32,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        store: AppStore,
        config: &AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            store,
            client: StoredValue::new(FetchClient::new(config.api_base.clone())),
            notification_ms: config.notification_ms,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn client(&self) -> FetchClient {
        self.client.get_value()
    }

    /// Show a notification and schedule its dismissal
    pub fn notify(&self, notification: Notification) {
        web_sys::console::log_1(&notification.log_line().into());

        let store = self.store;
        let delay = self.notification_ms;
        let seq = store_show_notification(&store, notification);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_notification(&store, seq);
        });
    }

    /// Surface an action's notification and reload if it asks for it
    pub fn apply(&self, outcome: Outcome) {
        self.notify(outcome.notification);
        if outcome.reload {
            self.reload();
        }
    }
}
