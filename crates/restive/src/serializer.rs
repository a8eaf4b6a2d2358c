//! JSON encoding for resource results.
//!
//! [`json_result`] is the normal way a resource turns a value into a response
//! body. Encoding failures become `500 Internal Server Error` results rather
//! than panics.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::warn;

use crate::error::{self, DispatchResult};

const SERIALIZER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::serializer");

/// Indentation used for pretty output.
const PRETTY_INDENT: &[u8] = b" ";

/// Encodes `value` as JSON, compact or pretty, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns an internal error wrapping the encoder's description when `value`
/// cannot be represented as JSON.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let value = BTreeMap::from([("Id", 0)]);
/// assert_eq!(restive::json_result(&value, false).as_deref(), Ok(r#"{"Id":0}"#));
/// assert_eq!(
///     restive::json_result(&value, true).as_deref(),
///     Ok("{\n \"Id\": 0\n}")
/// );
/// ```
pub fn json_result<T>(value: &T, pretty: bool) -> DispatchResult
where
    T: Serialize + ?Sized,
{
    let encoded = if pretty {
        to_pretty_string(value)
    } else {
        serde_json::to_string(value)
    };

    match encoded {
        Ok(text) => Ok(text.trim().to_owned()),
        Err(source) => {
            warn!(target: SERIALIZER_TARGET, error = %source, "failed to encode result");
            error::internal_error(source)
        }
    }
}

fn to_pretty_string<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(PRETTY_INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
