//! Binding between the dispatcher and [`http`] types.
//!
//! A transport receives an [`http::Request`], hands it to [`handle`] and writes
//! the returned [`http::Response`] back. The helpers here are also usable on
//! their own when a transport already has the pieces apart.

use http::header::{CONTENT_TYPE, LOCATION, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderMap, HeaderValue, Request, Response, StatusCode};
use percent_encoding::percent_decode_str;
use tracing::warn;

use crate::capability::Params;
use crate::dispatch::Dispatcher;
use crate::error::DispatchResult;


/// Tracing target for boundary operations.
pub(crate) const BOUNDARY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::boundary");

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Collapses request headers to one value per name.
///
/// Only the first value of a repeated header is kept. Names appear in the
/// lower-case form `http` stores them in. Values that are not visible ASCII
/// cannot be represented as text and are dropped.
#[must_use]
pub fn collapse_headers(headers: &HeaderMap) -> Params {
    headers
        .keys()
        .filter_map(|name| {
            let value = headers.get(name)?.to_str().ok()?;
            Some((name.as_str().to_owned(), value.to_owned()))
        })
        .collect()
}

/// Decodes a URL query string to one value per key.
///
/// Decoding follows `application/x-www-form-urlencoded`, so `+` is a space
/// and percent escapes are resolved. The first occurrence of a key wins.
///
/// # Example
///
/// ```
/// let query = restive::boundary::collapse_query(Some("herd=big+one&herd=small"));
/// assert_eq!(query.get("herd").map(String::as_str), Some("big one"));
/// ```
#[must_use]
pub fn collapse_query(query: Option<&str>) -> Params {
    let mut params = Params::new();
    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

/// Converts a dispatch outcome into an HTTP response.
///
/// A body becomes `200 OK` with no content type; the caller knows what its
/// resources serialize. An error becomes its own status with a plain-text
/// message body and, when present, a `Location` header. `204 No Content`
/// keeps its headers but never carries a body.
#[must_use]
pub fn into_response(result: DispatchResult) -> Response<String> {
    match result {
        Ok(body) => Response::new(body),
        Err(error) => {
            let body = if error.status() == StatusCode::NO_CONTENT {
                String::new()
            } else {
                format!("{}\n", error.message())
            };
            let mut response = Response::new(body);
            *response.status_mut() = error.status();
            let headers = response.headers_mut();
            if let Some(location) = error.location() {
                match HeaderValue::from_str(location) {
                    Ok(value) => {
                        headers.insert(LOCATION, value);
                    }
                    Err(source) => warn!(
                        target: BOUNDARY_TARGET,
                        location,
                        error = %source,
                        "dropping location that is not a valid header value"
                    ),
                }
            }
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(PLAIN_TEXT));
            headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
            response
        }
    }
}

/// Dispatches `request` and renders the outcome.
///
/// The path is percent-decoded before resolution, so `/ox/%30` names item
/// `0`; escapes that do not decode to UTF-8 are replaced with U+FFFD. The
/// request body is ignored; only reads are routed.
#[must_use]
pub fn handle<B>(dispatcher: &Dispatcher, request: &Request<B>) -> Response<String> {
    let headers = collapse_headers(request.headers());
    let query = collapse_query(request.uri().query());
    let path = percent_decode_str(request.uri().path()).decode_utf8_lossy();
    let result = dispatcher.dispatch(request.method().as_str(), &path, &headers, &query);
    into_response(result)
}
