//! Shared frontend utilities for configuration, API access, error handling and
//! build metadata.
//!
//! ## Request pipeline
//!
//! 1. **Send:** feature clients call [`ApiClient`] with a path relative to the
//!    configured API base; the browser transport attaches the session cookie
//!    and aborts after the configured timeout.
//! 2. **Intercept:** a failed response carrying the
//!    `application/vnd.error+json` envelope is turned into user-visible
//!    messages on the session and settles as [`AppError::Reported`].
//! 3. **Propagate:** every other failure reaches the caller unchanged.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod interceptor;
#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use api::{ApiClient, ErrorSink, Transport};
pub(crate) use errors::AppError;
