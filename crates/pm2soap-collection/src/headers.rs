//! Case-insensitive header lookup.

use crate::types::Header;

/// First header whose key matches `name`, ignoring ASCII case.
pub fn find_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a Header> {
    headers.iter().find(|h| h.key.eq_ignore_ascii_case(name))
}

/// Value of the first `Content-Type` header, if any.
pub fn content_type(headers: &[Header]) -> Option<&str> {
    find_header(headers, "content-type").map(|h| h.value.as_str())
}
