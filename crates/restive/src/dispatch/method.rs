//! Request methods understood by the dispatcher.

use std::fmt;

/// Closed set of operations the dispatcher routes.
///
/// Only reads are implemented. Every other method is carried as
/// [`Method::Other`] and answered with `501 Not Implemented`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// `GET`: index a collection or find one item.
    Read,
    /// Any other method token, kept verbatim for diagnostics.
    Other(String),
}

impl Method {
    /// Classifies a method token. Matching is case-sensitive, as in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// use restive::Method;
    ///
    /// assert_eq!(Method::parse("GET"), Method::Read);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "GET" => Self::Read,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the method token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Read => "GET",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
