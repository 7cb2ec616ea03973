//! Browser fetch implementation of `TodoApi`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{check_status, decode, decode_list, item_url, TodoApi};
use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoId};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchClient {
    base: String,
}

impl FetchClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Issue one request and return the body of a 2xx response.
    async fn send(&self, method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request.headers().set("Accept", "application/json").map_err(js_error)?;
        if body.is_some() {
            request.headers().set("Content-Type", "application/json").map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("window is not available".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
        let status = response.status();
        web_sys::console::log_1(&format!("[API] {} {} -> {}", method, url, status).into());

        check_status(status, text.as_string().unwrap_or_default())
    }
}

impl TodoApi for FetchClient {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let body = self.send("GET", &self.base, None).await?;
        decode_list(&body)
    }

    async fn create(&self, todo: &NewTodo<'_>) -> Result<Todo, ApiError> {
        let payload = serde_json::to_string(todo)?;
        let body = self.send("POST", &self.base, Some(payload)).await?;
        decode(&body)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let payload = serde_json::to_string(todo)?;
        let body = self.send("PUT", &item_url(&self.base, &todo.id), Some(payload)).await?;
        decode(&body)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        self.send("DELETE", &item_url(&self.base, id), None).await?;
        Ok(())
    }
}

/// Message of a rejected promise or failed binding call
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}
