//! Frontend Models
//!
//! Data structures matching the backend's todo entity.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned todo identifier.
///
/// Opaque to the frontend: the backend may send a number or a string and the
/// value is echoed back verbatim in URLs and messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
}

/// The backend does not validate updates, so columns may come back null
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
    pub done: bool,
}

impl<'a> NewTodo<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, done: false }
    }
}
