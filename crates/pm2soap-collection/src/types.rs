//! Data structures for Postman collection documents.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Root of a Postman collection document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    /// Top-level items in document order
    #[serde(default)]
    pub item: Vec<Item>,
}

/// Collection metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// Collection title
    pub name: String,
}

/// One entry of the item list: a request, or a folder of further items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub request: Option<Request>,
    /// Nested items when this entry is a folder
    #[serde(default)]
    pub item: Option<Vec<Item>>,
}

/// A single HTTP request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP verb, passed through verbatim
    #[serde(default = "default_method")]
    pub method: String,
    pub url: RequestUrl,
    #[serde(default)]
    pub header: Vec<Header>,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub auth: Option<Auth>,
}

/// A header entry. Key casing and order are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A query string entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Request body. Only the `raw` mode carries text the converter keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
}

/// Auth block attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth {
    /// Auth scheme name (`basic`, `bearer`, `noauth`, ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub bearer: Vec<AuthEntry>,
    #[serde(default)]
    pub basic: Vec<AuthEntry>,
}

/// A `{key, value}` entry inside an auth block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

/// Structured request URL.
///
/// Postman writes either the structured object or a bare string; both
/// deserialize into this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UrlRepr")]
pub struct RequestUrl {
    pub raw: String,
    pub protocol: Option<String>,
    /// Host labels, e.g. `["api", "test", "com"]`
    pub host: Vec<String>,
    pub port: Option<String>,
    /// Path segments without separators
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlRepr {
    Structured(UrlParts),
    Raw(String),
}

#[derive(Deserialize)]
struct UrlParts {
    #[serde(default)]
    raw: String,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    host: Segments,
    #[serde(default)]
    port: Option<String>,
    #[serde(default)]
    path: Segments,
    #[serde(default)]
    query: Vec<QueryParam>,
}

/// Host and path may be written as a list or as one joined string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Segments {
    List(Vec<String>),
    Joined(String),
}

impl Default for Segments {
    fn default() -> Self {
        Segments::List(Vec::new())
    }
}

impl Segments {
    fn into_vec(self, separator: char) -> Vec<String> {
        match self {
            Segments::List(list) => list,
            Segments::Joined(joined) => joined
                .split(separator)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<UrlRepr> for RequestUrl {
    fn from(repr: UrlRepr) -> Self {
        match repr {
            UrlRepr::Structured(parts) => RequestUrl {
                raw: parts.raw,
                protocol: parts.protocol,
                host: parts.host.into_vec('.'),
                port: parts.port,
                path: parts.path.into_vec('/'),
                query: parts.query,
            },
            UrlRepr::Raw(raw) => RequestUrl::from_raw(raw),
        }
    }
}

impl RequestUrl {
    /// Split a bare URL string into its structured fields.
    ///
    /// Strings that are not absolute URLs (for example ones built from
    /// `{{variables}}`) keep only `raw`.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = match url::Url::parse(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("URL '{}' is not absolute ({}), keeping raw form only", raw, e);
                return RequestUrl {
                    raw,
                    ..Default::default()
                };
            }
        };

        let host = parsed
            .host_str()
            .map(|h| h.split('.').map(str::to_string).collect())
            .unwrap_or_default();
        let path = parsed
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        let query = parsed
            .query_pairs()
            .map(|(key, value)| QueryParam {
                key: key.into_owned(),
                value: Some(value.into_owned()),
            })
            .collect();

        RequestUrl {
            protocol: Some(parsed.scheme().to_string()),
            host,
            port: parsed.port().map(|p| p.to_string()),
            path,
            query,
            raw,
        }
    }

    /// Resource path: `/` followed by the path segments joined with `/`.
    pub fn resource_path(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

impl Collection {
    /// Items carrying a request, in document order.
    ///
    /// Folder items are not descended into.
    pub fn requests(&self) -> impl Iterator<Item = (&str, &Request)> {
        self.item.iter().filter_map(|item| match &item.request {
            Some(request) => Some((item.name.as_str(), request)),
            None => {
                if item.item.is_some() {
                    warn!("Skipping folder '{}': nested folders are not converted", item.name);
                } else {
                    debug!("Skipping item '{}' without a request", item.name);
                }
                None
            }
        })
    }
}

impl Request {
    /// Raw body text, if the body is in raw mode.
    pub fn raw_body(&self) -> Option<&str> {
        let body = self.body.as_ref()?;
        match body.mode.as_deref() {
            None | Some("raw") => body.raw.as_deref(),
            Some(mode) => {
                debug!("Ignoring body in '{}' mode", mode);
                None
            }
        }
    }
}

impl AuthEntry {
    /// Entry value rendered as text.
    pub fn value_str(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

fn default_method() -> String {
    "GET".to_string()
}
