//! REST API Client
//!
//! Bindings to the backend's `/api/todos` endpoints, behind the `TodoApi`
//! trait so UI actions can run against a fake in tests.

mod http;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoId};

pub use http::FetchClient;

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Operations the todo backend exposes.
///
/// Futures are not `Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;
    async fn create(&self, todo: &NewTodo<'_>) -> Result<Todo, ApiError>;
    async fn update(&self, todo: &Todo) -> Result<Todo, ApiError>;
    async fn delete(&self, id: &TodoId) -> Result<(), ApiError>;
}

/// URL of a single todo under `base`
pub fn item_url(base: &str, id: &TodoId) -> String {
    let id = id.to_string();
    format!("{}/{}", base, utf8_percent_encode(&id, PATH_SEGMENT))
}

/// Turn a raw response into its body, or the error a non-2xx status maps to.
pub fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

/// Decode a 2xx JSON body
pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a list body; valid JSON that is not an array counts as empty
pub fn decode_list(body: &str) -> Result<Vec<Todo>, ApiError> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        value @ serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Ok(Vec::new()),
    }
}
