//! Todo Actions
//!
//! What happens on page load, Add, item click and checkbox toggle. Each
//! action runs one request chain and reports back what the view should do;
//! failures never escape as errors, they become notifications.

use crate::api::TodoApi;
use crate::models::{NewTodo, Todo, TodoId};
use crate::notification::Notification;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a todo before submitting.";
pub const MISSING_INPUT_MESSAGE: &str = "Todo input element not found.";

/// Result of a mutating action
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub notification: Notification,
    /// Re-fetch the list
    pub reload: bool,
    /// Empty the input field
    pub clear_input: bool,
}

impl Outcome {
    fn failed(notification: Notification) -> Self {
        Self { notification, reload: false, clear_input: false }
    }
}

/// Trimmed text, or `None` if nothing would be submitted
pub fn normalize_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    (!text.is_empty()).then_some(text)
}

/// Fetch the full list. On failure the caller keeps what it already renders.
pub async fn load_todos<A: TodoApi>(api: &A) -> Result<Vec<Todo>, Notification> {
    match api.list().await {
        Ok(todos) => {
            if !todos.is_empty() {
                log(&format!("Successfully loaded {} todo(s)", todos.len()));
            }
            Ok(todos)
        }
        Err(e) => Err(Notification::error(format!("Error loading todos: {}", e))),
    }
}

/// Create a todo from the input text
pub async fn add_todo<A: TodoApi>(api: &A, raw: &str) -> Outcome {
    let Some(text) = normalize_text(raw) else {
        return Outcome::failed(Notification::error(EMPTY_INPUT_MESSAGE));
    };

    match api.create(&NewTodo::new(text)).await {
        Ok(saved) => Outcome {
            notification: Notification::success(format!("✓ Todo added successfully! (ID: {})", saved.id)),
            reload: true,
            clear_input: true,
        },
        Err(e) => Outcome::failed(Notification::error(format!("Error adding todo: {}", e))),
    }
}

pub async fn delete_todo<A: TodoApi>(api: &A, id: &TodoId) -> Outcome {
    match api.delete(id).await {
        Ok(()) => Outcome {
            notification: Notification::success("Todo deleted successfully!"),
            reload: true,
            clear_input: false,
        },
        Err(e) => Outcome::failed(Notification::error(format!("Error deleting todo: {}", e))),
    }
}

/// Flip `done` through the backend's update endpoint
pub async fn toggle_todo<A: TodoApi>(api: &A, todo: &Todo) -> Outcome {
    let updated = Todo { done: !todo.done, ..todo.clone() };
    match api.update(&updated).await {
        Ok(_) => Outcome {
            notification: Notification::success("Todo updated successfully!"),
            reload: true,
            clear_input: false,
        },
        Err(e) => Outcome::failed(Notification::error(format!("Error updating todo: {}", e))),
    }
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&format!("[TODO] {}", message).into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}
