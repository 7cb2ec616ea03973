//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod notification_banner;
mod todo_item;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use notification_banner::NotificationBanner;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
