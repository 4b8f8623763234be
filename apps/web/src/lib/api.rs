//! HTTP helpers for the p2k16 JSON API with consistent timeouts and error
//! handling. Feature clients go through [`ApiClient`] so every failed response
//! passes the error-envelope interceptor exactly once. The browser transport
//! sends the session cookie with every request; nothing here stores secrets.

use super::{
    errors::AppError,
    interceptor::{ErrorLevel, ErrorMessages, Interception, intercept},
};
use serde::{Serialize, de::DeserializeOwned};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// A request relative to the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Encoded JSON body, if any.
    pub body: Option<String>,
}

/// A completed HTTP exchange, successful or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the wire. Only transport-level failures (no response
/// at all) are errors here; HTTP error statuses come back as responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

/// Receives user-facing messages extracted from error envelopes.
pub trait ErrorSink {
    fn add_errors(&self, level: ErrorLevel, messages: &ErrorMessages);
}

/// JSON API client bound to a transport and the session that collects
/// reported errors.
#[derive(Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    session: S,
}

impl<T: Transport, S: ErrorSink> ApiClient<T, S> {
    pub fn new(transport: T, session: S) -> Self {
        Self { transport, session }
    }

    /// The session this client reports errors to.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Fetches and decodes JSON.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let response = self.execute(Method::Get, path, None).await?;
        decode(&response)
    }

    /// Posts JSON and decodes the JSON response.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let response = self.execute(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    /// Posts JSON and ignores the response body.
    pub async fn post_json_discard<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        self.execute(Method::Post, path, Some(encode(body)?))
            .await
            .map(|_| ())
    }

    /// Puts JSON and decodes the JSON response.
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let response = self.execute(Method::Put, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, AppError> {
        log::debug!("{} {path}", method.as_str());
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
        };
        let response = self.transport.send(request).await?;

        if response.ok() {
            Ok(response)
        } else {
            Err(self.reject(response))
        }
    }

    /// Runs the interceptor over a failed response.
    fn reject(&self, response: ApiResponse) -> AppError {
        match intercept(&response) {
            Interception::Report(envelope) => {
                log::warn!(
                    "request failed with status {}; reporting error envelope",
                    response.status
                );
                self.session.add_errors(envelope.level, &envelope.messages);
                AppError::Reported
            }
            Interception::Propagate => AppError::Http {
                status: response.status,
                message: sanitize_body(&response.body),
            },
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, AppError> {
    serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ApiRequest, ApiResponse, Method, Transport, build_url_with_base};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::{Request, RequestBuilder};
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    /// `fetch`-based transport that includes cookies and aborts slow requests.
    #[derive(Clone, Debug)]
    pub struct GlooTransport {
        base_url: String,
        timeout_ms: u32,
    }

    impl GlooTransport {
        pub fn new(config: &AppConfig) -> Self {
            Self {
                base_url: config.api_base_url.clone(),
                timeout_ms: config.request_timeout_ms,
            }
        }
    }

    impl Transport for GlooTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            let url = build_url_with_base(&self.base_url, &request.path);
            let controller = AbortController::new().map_err(|_| {
                AppError::Config("Failed to initialize request timeout.".to_string())
            })?;
            let signal = controller.signal();
            let timeout_controller = controller.clone();
            let _timeout = Timeout::new(self.timeout_ms, move || timeout_controller.abort());

            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            }
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal));

            let response = build(builder, request.body)?
                .send()
                .await
                .map_err(map_request_error)?;

            let status = response.status();
            let content_type = response.headers().get("content-type");
            let body = response.text().await.unwrap_or_default();

            Ok(ApiResponse {
                status,
                content_type,
                body,
            })
        }
    }

    fn build(
        builder: RequestBuilder,
        body: Option<String>,
    ) -> Result<gloo_net::http::Request, AppError> {
        let built = match body {
            Some(payload) => builder
                .header("Content-Type", "application/json")
                .body(payload),
            None => builder.build(),
        };
        built.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiClient, Method, build_url_with_base, sanitize_body};
    use crate::app_lib::{
        errors::AppError,
        interceptor::ErrorLevel,
        test_support::{FakeTransport, error_envelope, json_response, plain_response},
    };
    use crate::features::session::state::Session;
    use futures::executor::block_on;
    use serde_json::{Value, json};
    use std::{cell::RefCell, rc::Rc};

    fn client(
        transport: &FakeTransport,
    ) -> (
        ApiClient<FakeTransport, Rc<RefCell<Session>>>,
        Rc<RefCell<Session>>,
    ) {
        let session = Rc::new(RefCell::new(Session::default()));
        (ApiClient::new(transport.clone(), session.clone()), session)
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(build_url_with_base("", "/data/account"), "/data/account");
        assert_eq!(
            build_url_with_base("https://p2k16.example/", "/data/account"),
            "https://p2k16.example/data/account"
        );
        assert_eq!(
            build_url_with_base(" https://p2k16.example ", "data/circle"),
            "https://p2k16.example/data/circle"
        );
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body(" oops \n"), "oops");
        assert_eq!(sanitize_body(&"x".repeat(500)).len(), 200);
    }

    #[test]
    fn successful_responses_are_decoded() {
        let transport = FakeTransport::default();
        transport.respond(json_response(200, &json!({"door": "frontdoor"})));
        let (api, _) = client(&transport);

        let value: Value = block_on(api.post_json(
            "/service/door/open",
            &json!({"door": "frontdoor"}),
        ))
        .expect("request succeeds");

        assert_eq!(value["door"], "frontdoor");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"door":"frontdoor"}"#));
    }

    #[test]
    fn error_envelopes_settle_as_reported() {
        let transport = FakeTransport::default();
        transport.respond(error_envelope(400, json!(["Company name is required.", "  "])));
        let (api, session) = client(&transport);

        let result: Result<Value, AppError> = block_on(api.get_json("/data/company"));

        assert_eq!(result, Err(AppError::Reported));
        let session = session.borrow();
        let entries = session.errors().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Company name is required.");
        assert_eq!(entries[0].level, ErrorLevel::Warning);
    }

    #[test]
    fn other_failures_propagate_unchanged() {
        let transport = FakeTransport::default();
        transport.respond(plain_response(404, "Not Found"));
        transport.fail(AppError::Network("offline".to_string()));
        let (api, session) = client(&transport);

        let not_found: Result<Value, AppError> = block_on(api.get_json("/data/company/9"));
        assert_eq!(
            not_found,
            Err(AppError::Http {
                status: 404,
                message: "Not Found".to_string()
            })
        );

        let offline: Result<Value, AppError> = block_on(api.get_json("/data/company/9"));
        assert_eq!(offline, Err(AppError::Network("offline".to_string())));
        assert!(session.borrow().errors().is_empty());
    }

    #[test]
    fn undecodable_bodies_are_parse_errors() {
        let transport = FakeTransport::default();
        transport.respond(plain_response(200, "<html>"));
        let (api, _) = client(&transport);

        let result: Result<Value, AppError> = block_on(api.get_json("/data/circle"));
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
