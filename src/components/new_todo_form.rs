//! New Todo Form Component
//!
//! Text input plus Add button; submits on Enter or click.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, MISSING_INPUT_MESSAGE};
use crate::context::AppContext;
use crate::notification::Notification;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let input_ref = NodeRef::<Input>::new();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            ctx.notify(Notification::error(MISSING_INPUT_MESSAGE));
            return;
        };
        let raw = input.value();

        spawn_local(async move {
            let client = ctx.client();
            let outcome = actions::add_todo(&client, &raw).await;
            if outcome.clear_input {
                input.set_value("");
            }
            ctx.apply(outcome);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                id="todoInput"
                type="text"
                placeholder="What needs to be done?"
                autocomplete="off"
                node_ref=input_ref
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
