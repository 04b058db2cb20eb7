//! Request plumbing shared by the endpoint modules.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use super::HttpApi;
use crate::error::{ClientError, ClientResult};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// `{ success, message }` envelope most endpoints answer with.
///
/// A missing `success` field counts as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// `success: false` becomes `ClientError::Rejected`
    pub fn into_result(self) -> ClientResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Rejected(self.message))
        }
    }
}

/// Escape a value used as one URL path segment
pub(super) fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

impl HttpApi {
    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        tracing::debug!(target: "api", method = method.as_str(), %url, "request");

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include);

        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send without a body
    pub(super) async fn send(&self, method: Method, path: &str) -> ClientResult<Response> {
        let response = self
            .builder(method, path)
            .send()
            .await
            .map_err(|e| network(method, path, e))?;
        check_status(method, path, response).await
    }

    /// Send a JSON body
    pub(super) async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Response> {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(|e| network(method, path, e))?;
        check_status(method, path, response).await
    }
}

fn network(method: Method, path: &str, err: gloo_net::Error) -> ClientError {
    tracing::warn!(target: "api", method = method.as_str(), path, error = %err, "request failed");
    ClientError::Network(err.to_string())
}

async fn check_status(method: Method, path: &str, response: Response) -> ClientResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::warn!(target: "api", method = method.as_str(), path, status, ?message, "API error");
    Err(ClientError::Api { status, message })
}

/// Decode a 2xx body
pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    parse_body(&text)
}

/// Read a 2xx envelope without judging it. Callers that need
/// `success: true` follow up with `Envelope::into_result`.
pub(super) async fn read_envelope(response: Response) -> ClientResult<Envelope> {
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok(envelope_from_body(&text))
}

/// Empty or non-JSON bodies give an unsuccessful envelope with no message
pub(super) fn envelope_from_body(text: &str) -> Envelope {
    match parse_body::<Envelope>(text) {
        Ok(envelope) => envelope,
        Err(err) => {
            if !text.trim().is_empty() {
                tracing::debug!(target: "api", error = %err, "reply body is not an envelope");
            }
            Envelope::default()
        }
    }
}

pub(super) fn parse_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

/// `message` (or `error`) from an error body, if it is JSON
pub(super) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
