// ============================================================
// SOURCE TYPES
// ============================================================
// Where raw CSV text comes from

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?)://").unwrap());

/// How an input value is resolved into CSV text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Url,
    Inline,
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Url => write!(f, "url"),
            SourceKind::Inline => write!(f, "inline"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A remote CSV location split into the parts the transport needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    pub scheme: Scheme,

    /// First segment after the scheme, port included when present
    pub host: String,

    /// Always starts with `/`; query string kept verbatim
    pub path: String,
}

impl UrlTarget {
    /// Split a URL into scheme, host and path.
    ///
    /// Anything that is not explicitly `http://` is fetched over HTTPS,
    /// including input without a scheme at all.
    pub fn parse(url: &str) -> Self {
        let (scheme, remainder) = match SCHEME_PREFIX.captures(url) {
            Some(caps) => {
                let scheme = if caps[1].eq_ignore_ascii_case("http") {
                    Scheme::Http
                } else {
                    Scheme::Https
                };
                (scheme, &url[caps[0].len()..])
            }
            None => (Scheme::Https, url),
        };

        let mut segments = remainder.split('/');
        let host = segments.next().unwrap_or_default().to_string();
        let path = format!("/{}", segments.collect::<Vec<_>>().join("/"));

        Self { scheme, host, path }
    }

    pub fn to_url(&self) -> String {
        format!("{}://{}{}", self.scheme.as_str(), self.host, self.path)
    }
}
