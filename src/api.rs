//! API Client
//!
//! HTTP bindings to the admin REST endpoints. Success is decided by HTTP
//! status, never by body content; payload shape is validated here at the
//! boundary so rendering code only ever sees typed records.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::models::{Kunde, NyKunde, NyVare, Ordre, Vare};

pub const VARER_URL: &str = "/api/varer";
pub const KUNDER_URL: &str = "/api/kunder";
pub const ORDRER_URL: &str = "/api/ordrer";

/// Terminal failure of one API call. `Display` yields the user-facing
/// message; status codes are kept for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (network / fetch-level failure)
    Transport(String),
    /// Non-2xx response; message comes from the body's `error` field
    /// when the body is JSON, otherwise from the HTTP status text
    Http { status: u16, message: String },
    /// The body was not the expected JSON array
    Shape(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::Shape(msg) => write!(f, "{}", msg),
        }
    }
}

/// Pick the user-facing message for a failed response: the `error` field
/// of a JSON body when present, otherwise the HTTP status text.
pub fn failure_message(status_text: &str, json_body: Option<&serde_json::Value>) -> String {
    json_body
        .and_then(|body| body.get("error"))
        .and_then(|error| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| status_text.to_string())
}

/// Decode a collection body: must be a JSON array, each element a record.
/// Missing record fields are tolerated (models default them), a non-array
/// payload is not.
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Shape(format!("Ugyldig JSON fra server: {}", e)))?;
    if !value.is_array() {
        return Err(ApiError::Shape(
            "Ugyldig data mottatt fra server (forventet en liste).".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::Shape(format!("Uventet datastruktur fra server: {}", e)))
}

async fn http_failure(resp: Response) -> ApiError {
    let is_json = resp
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    let body = if is_json {
        resp.json::<serde_json::Value>().await.ok()
    } else {
        None
    };
    ApiError::Http {
        status: resp.status(),
        message: failure_message(&resp.status_text(), body.as_ref()),
    }
}

async fn fetch_collection<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(http_failure(resp).await);
    }
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_collection(&body)
}

async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let payload =
        serde_json::to_string(body).map_err(|e| ApiError::Transport(e.to_string()))?;
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(http_failure(resp).await);
    }
    // 2xx is all we need; the response body is ignored
    Ok(())
}

// ========================
// Collection fetches
// ========================

pub async fn hent_varer() -> Result<Vec<Vare>, ApiError> {
    fetch_collection(VARER_URL).await
}

pub async fn hent_kunder() -> Result<Vec<Kunde>, ApiError> {
    fetch_collection(KUNDER_URL).await
}

pub async fn hent_ordrer() -> Result<Vec<Ordre>, ApiError> {
    fetch_collection(ORDRER_URL).await
}

// ========================
// Record creation
// ========================

pub async fn legg_til_vare(vare: &NyVare) -> Result<(), ApiError> {
    post_json(VARER_URL, vare).await
}

pub async fn legg_til_kunde(kunde: &NyKunde) -> Result<(), ApiError> {
    post_json(KUNDER_URL, kunde).await
}
