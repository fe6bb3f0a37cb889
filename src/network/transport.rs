//! Sending requests.
//!
//! A [`Transport`] takes a request plus a completion callback and invokes the
//! callback exactly once, on the UI thread, when the exchange finishes.  There
//! is no cancellation: once sent, a request always completes (or never does,
//! if the network hangs).

use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::api_client::HttpRequest;
use crate::debug_log;

pub type Completion = Box<dyn FnOnce(Result<String, FetchError>) + 'static>;

pub trait Transport {
    fn send(&self, request: HttpRequest, on_done: Completion);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status { code: u16, text: String },
}

impl FetchError {
    fn from_js(value: JsValue) -> Self {
        FetchError::Network(format!("{:?}", value))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(reason) => write!(f, "network error: {}", reason),
            FetchError::Status { code, text } => write!(f, "HTTP {} {}", code, text),
        }
    }
}

impl std::error::Error for FetchError {}

/// Browser `fetch()` transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest, on_done: Completion) {
        debug_log!("{} {}", request.method, request.url);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_text(&request).await;
            on_done(result);
        });
    }
}

async fn fetch_text(request: &HttpRequest) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(FetchError::from_js)?;
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
        headers
            .append("Content-Type", "text/plain; charset=utf-8")
            .map_err(FetchError::from_js)?;
    }
    opts.set_headers(&headers);

    let req = Request::new_with_str_and_init(&request.url, &opts).map_err(FetchError::from_js)?;
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no global window exists".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(FetchError::from_js)?;
    let resp: Response = resp_value.dyn_into().map_err(FetchError::from_js)?;

    if !resp.ok() {
        return Err(FetchError::Status {
            code: resp.status(),
            text: resp.status_text(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(FetchError::from_js)?)
        .await
        .map_err(FetchError::from_js)?;
    Ok(text.as_string().unwrap_or_default())
}
