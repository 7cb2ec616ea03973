//! Todo List Component
//!
//! Renders the last loaded list, or a placeholder when it is empty.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_shows_placeholder, use_app_store, AppStateStoreFields};

const EMPTY_LIST_PLACEHOLDER: &str = "No todos yet. Add one!";

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let show_placeholder = move || store_shows_placeholder(&store);

    view! {
        <ul id="todoList" class="todo-list">
            <Show when=show_placeholder>
                <li class="placeholder">{EMPTY_LIST_PLACEHOLDER}</li>
            </Show>
            <For
                each=move || store.todos().get()
                key=|todo| todo.clone()
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
