//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::notification::{ActiveNotification, Notification};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched from the backend
    pub todos: Vec<Todo>,
    /// Set after the first successful load; gates the empty placeholder
    pub loaded: bool,
    /// Notification currently on screen
    pub notification: Option<ActiveNotification>,
    /// Sequence number of the last shown notification
    pub notification_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered list with a freshly loaded one
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
    store.loaded().set(true);
}

/// Apply a load result. A failure leaves the rendered list as it was and
/// hands back the notification to show.
pub fn store_apply_load(store: &AppStore, result: Result<Vec<Todo>, Notification>) -> Option<Notification> {
    match result {
        Ok(todos) => {
            store_set_todos(store, todos);
            None
        }
        Err(notification) => Some(notification),
    }
}

/// Placeholder shows only once a load succeeded with nothing in it
pub fn store_shows_placeholder(store: &AppStore) -> bool {
    store.loaded().get() && store.todos().with(|t| t.is_empty())
}

/// Put a notification on screen, returning the sequence number that owns it
pub fn store_show_notification(store: &AppStore, notification: Notification) -> u32 {
    let seq = store.notification_seq().get_untracked().wrapping_add(1);
    store.notification_seq().set(seq);
    store.notification().set(Some(ActiveNotification { seq, notification }));
    seq
}

/// Hide the notification if it is still the one shown as `seq`
pub fn store_dismiss_notification(store: &AppStore, seq: u32) {
    let current = store.notification().get_untracked();
    if crate::notification::is_current(current.as_ref(), seq) {
        store.notification().set(None);
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::models::TodoId;

    fn make_todo(id: i64) -> Todo {
        Todo { id: TodoId::Number(id), text: format!("Todo {}", id), done: false }
    }

    #[test]
    fn test_placeholder_hidden_before_first_load() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            assert!(!store_shows_placeholder(&store));
        });
    }

    #[test]
    fn test_placeholder_after_empty_load() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            assert_eq!(store_apply_load(&store, Ok(vec![])), None);
            assert!(store_shows_placeholder(&store));

            store_apply_load(&store, Ok(vec![make_todo(1), make_todo(2)]));
            assert!(!store_shows_placeholder(&store));
            assert_eq!(store.todos().get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_failed_load_keeps_rendered_list() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            store_set_todos(&store, vec![make_todo(1)]);

            let err = Notification::error("Error loading todos: HTTP Error 500");
            assert_eq!(store_apply_load(&store, Err(err.clone())), Some(err));
            assert_eq!(store.todos().get_untracked(), vec![make_todo(1)]);
            assert!(store.loaded().get_untracked());
        });
    }

    #[test]
    fn test_failed_first_load_shows_no_placeholder() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            store_apply_load(&store, Err(Notification::error("Error loading todos: Failed to fetch")));
            assert!(!store_shows_placeholder(&store));
        });
    }

    #[test]
    fn test_dismiss_ignores_stale_seq() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());
            let first = store_show_notification(&store, Notification::success("first"));
            let second = store_show_notification(&store, Notification::error("second"));
            assert_ne!(first, second);

            store_dismiss_notification(&store, first);
            let active = store.notification().get_untracked().unwrap();
            assert_eq!(active.seq, second);
            assert_eq!(active.notification.message, "second");

            store_dismiss_notification(&store, second);
            assert_eq!(store.notification().get_untracked(), None);
        });
    }
}
