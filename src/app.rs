//! Todo Frontend App
//!
//! Root component: input form, notification banner and the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NewTodoForm, NotificationBanner, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_apply_load, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    web_sys::console::log_1(&format!("[APP] API base {}", config.api_base).into());

    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(0u32), store, &config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount and whenever an action asks for a reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}", trigger).into());
        spawn_local(async move {
            let client = ctx.client();
            if let Some(notification) = store_apply_load(&store, actions::load_todos(&client).await) {
                ctx.notify(notification);
            }
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>
            <NewTodoForm />
            <NotificationBanner />
            <TodoList />
        </main>
    }
}
