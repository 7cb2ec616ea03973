//! Todo Item Component
//!
//! A single entry; clicking it deletes the todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id.clone();
    let text = todo.text.clone();
    let done = todo.done;

    let on_delete = move |_: web_sys::MouseEvent| {
        let id = id.clone();
        spawn_local(async move {
            let client = ctx.client();
            ctx.apply(actions::delete_todo(&client, &id).await);
        });
    };

    let on_toggle = move |ev: web_sys::MouseEvent| {
        // Keep the click from reaching the <li> and deleting the todo
        ev.stop_propagation();
        // The box only changes when a reload re-renders it from `todo.done`
        ev.prevent_default();
        let todo = todo.clone();
        spawn_local(async move {
            let client = ctx.client();
            ctx.apply(actions::toggle_todo(&client, &todo).await);
        });
    };

    view! {
        <li
            class=if done { "todo-item done" } else { "todo-item" }
            title="Click to delete"
            on:click=on_delete
        >
            <input type="checkbox" prop:checked=done on:click=on_toggle />
            <span class="todo-text">{text}</span>
        </li>
    }
}
