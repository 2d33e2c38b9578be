//! Construction of recurring SoapUI fragments.
//!
//! Every function here is a pure constructor over already-extracted
//! inputs. Identifiers are passed in by the caller.

use crate::schema::{
    BASIC_PROFILE, ElementExt, HEADERS_FRAGMENT_ROOT, HEADERS_SETTING_ID, QUERY_STYLE, con,
    con_text, root_namespaces,
};
use pm2soap_collection::{AuthKind, BasicCredentials, Header, QueryParam, RequestUrl};
use pm2soap_core::{Error, Result};
use xmltree::{Element, EmitterConfig};

/// Scheme + authority and path of a request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `scheme://host[:port]`, no path
    pub origin: String,
    /// Same value as the resource `path`
    pub path: String,
}

impl Endpoint {
    /// Split a request URL into origin and path.
    ///
    /// The origin comes from the raw URL when it is absolute; otherwise the
    /// structured fields are used, and `fallback_origin` stands in for a
    /// missing host. The path is always the resource path, never the
    /// normalized form of the raw URL.
    pub fn from_url(url: &RequestUrl, fallback_origin: &str) -> Self {
        let raw_origin = url::Url::parse(&url.raw).ok().and_then(|parsed| {
            let host = parsed.host_str()?;
            Some(with_port(
                format!("{}://{}", parsed.scheme(), host),
                parsed.port().map(|p| p.to_string()).as_deref(),
            ))
        });

        let origin = raw_origin
            .or_else(|| origin_of(url).map(|origin| with_port(origin, url.port.as_deref())))
            .unwrap_or_else(|| fallback_origin.to_string());

        Self {
            origin,
            path: url.resource_path(),
        }
    }
}

fn with_port(origin: String, port: Option<&str>) -> String {
    match port.filter(|p| !p.is_empty()) {
        Some(port) => format!("{}:{}", origin, port),
        None => origin,
    }
}

/// `scheme://host` from the structured URL fields. The port is not part of
/// the result.
///
/// Returns `None` when the URL has no host labels. A missing protocol falls
/// back to the scheme written in the raw URL, then to `http`.
pub fn origin_of(url: &RequestUrl) -> Option<String> {
    if url.host.is_empty() {
        return None;
    }

    let scheme = url
        .protocol
        .as_deref()
        .filter(|p| !p.is_empty())
        .or_else(|| {
            url.raw
                .split_once("://")
                .map(|(scheme, _)| scheme)
                .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
        })
        .unwrap_or("http");

    Some(format!("{}://{}", scheme, url.host.join(".")))
}

/// Resource-level `con:parameters` block, one `con:parameter` per query key.
///
/// Returns `None` for an empty query so no empty block is written.
pub fn parameter_block(params: &[QueryParam]) -> Option<Element> {
    if params.is_empty() {
        return None;
    }

    let mut block = con("parameters");
    for param in params {
        block.push_child(
            con("parameter")
                .with_child(con_text("name", &param.key))
                .with_child(con("value"))
                .with_child(con_text("style", QUERY_STYLE))
                .with_child(con("default"))
                .with_child(con("description").with_attr("xsi:nil", "true")),
        );
    }
    Some(block)
}

/// Serialize headers as the nested `xml-fragment` document SoapUI expects
/// inside the request-headers setting.
pub fn headers_fragment(headers: &[Header]) -> Result<String> {
    let mut fragment = Element::new(HEADERS_FRAGMENT_ROOT);
    fragment.namespaces = Some(root_namespaces(false));
    for header in headers {
        fragment.push_child(
            con("entry")
                .with_attr("key", &header.key)
                .with_attr("value", &header.value),
        );
    }

    let config = EmitterConfig::new()
        .write_document_declaration(false)
        .perform_indent(false);
    let mut buffer = Vec::new();
    fragment
        .write_with_config(&mut buffer, config)
        .map_err(Error::xml)?;
    String::from_utf8(buffer).map_err(Error::xml)
}

/// `con:setting` node holding the headers fragment as text.
pub fn headers_setting(headers: &[Header]) -> Result<Option<Element>> {
    if headers.is_empty() {
        return Ok(None);
    }
    let fragment = headers_fragment(headers)?;
    Ok(Some(
        con("setting")
            .with_attr("id", HEADERS_SETTING_ID)
            .with_text(fragment),
    ))
}

/// Credentials and auth-type nodes for a request.
///
/// Basic credentials become a `con:credentials` block; Bearer tokens are
/// already carried by the `Authorization` header, so only the auth-type
/// label is written for them and for requests without auth.
pub fn credentials_block(auth: AuthKind, basic: Option<&BasicCredentials>) -> Vec<Element> {
    let mut elements = Vec::with_capacity(2);
    if let (AuthKind::Basic, Some(creds)) = (auth, basic) {
        elements.push(
            con("credentials")
                .with_child(con_text("username", &creds.username))
                .with_child(con_text("password", &creds.password))
                .with_child(con_text("selectedAuthProfile", BASIC_PROFILE))
                .with_child(con_text("addedBasicAuthenticationTypes", BASIC_PROFILE)),
        );
    }
    elements.push(con_text("authType", auth.label()));
    elements
}

/// Request-level `con:parameters` entries followed by their
/// `con:parameterOrder` list. Empty when there are no query params.
pub fn query_entries(params: &[QueryParam]) -> Vec<Element> {
    if params.is_empty() {
        return Vec::new();
    }

    let mut parameters = con("parameters");
    let mut order = con("parameterOrder");
    for param in params {
        parameters.push_child(
            con("entry")
                .with_attr("key", &param.key)
                .with_attr("value", param.value.clone().unwrap_or_default()),
        );
        order.push_child(con_text("entry", &param.key));
    }
    vec![parameters, order]
}

/// Inputs for one `con:request` node.
#[derive(Debug, Clone)]
pub struct RequestParts<'a> {
    pub name: &'a str,
    pub media_type: &'a str,
    pub endpoint: &'a Endpoint,
    pub body: Option<&'a str>,
    pub headers: &'a [Header],
    pub auth: AuthKind,
    pub credentials: Option<&'a BasicCredentials>,
    pub query: &'a [QueryParam],
}

/// Build a `con:request` node.
///
/// The body is written verbatim whenever present, whatever the media type.
pub fn request(parts: &RequestParts<'_>, id: String) -> Result<Element> {
    let mut settings = con("settings");
    if let Some(setting) = headers_setting(parts.headers)? {
        settings.push_child(setting);
    }

    let mut request = con("request")
        .with_attr("name", parts.name)
        .with_attr("id", id)
        .with_attr("mediaType", parts.media_type)
        .with_attr("postQueryString", "false")
        .with_child(settings)
        .with_child(con_text("endpoint", &parts.endpoint.origin));

    if let Some(body) = parts.body {
        let body_node = if body.is_empty() {
            con("request")
        } else {
            con_text("request", body)
        };
        request.push_child(body_node);
    }

    request.push_child(con_text("originalUri", &parts.endpoint.path));

    for element in credentials_block(parts.auth, parts.credentials) {
        request.push_child(element);
    }
    for element in query_entries(parts.query) {
        request.push_child(element);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(key: &str, value: &str) -> Header {
        Header {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn query(key: &str, value: &str) -> QueryParam {
        QueryParam {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }

    fn children<'a>(element: &'a Element, name: &str) -> Vec<&'a Element> {
        element
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(|e| e.name == name)
            .collect()
    }

    #[test]
    fn test_parameter_block_shape() {
        let block = parameter_block(&[query("id", "1"), query("sort", "asc")]).unwrap();
        let params = children(&block, "parameter");
        assert_eq!(params.len(), 2);

        let first = params[0];
        assert_eq!(first.get_child("name").unwrap().get_text().as_deref(), Some("id"));
        assert!(first.get_child("value").unwrap().get_text().is_none());
        assert_eq!(first.get_child("style").unwrap().get_text().as_deref(), Some("QUERY"));
        assert!(first.get_child("default").unwrap().get_text().is_none());
        assert_eq!(
            first
                .get_child("description")
                .unwrap()
                .attributes
                .get("xsi:nil")
                .map(String::as_str),
            Some("true")
        );
        assert_eq!(
            params[1].get_child("name").unwrap().get_text().as_deref(),
            Some("sort")
        );
    }

    #[test]
    fn test_parameter_block_absent_for_empty_query() {
        assert!(parameter_block(&[]).is_none());
        assert!(query_entries(&[]).is_empty());
    }

    #[test]
    fn test_headers_fragment() {
        let fragment =
            headers_fragment(&[header("Accept", "*/*"), header("X-Trace", "a&b")]).unwrap();

        assert!(fragment.starts_with("<xml-fragment"));
        assert!(fragment.contains(r#"xmlns:con="http://eviware.com/soapui/config""#));
        assert!(fragment.contains(r#"<con:entry key="Accept" value="*/*""#));
        assert!(fragment.contains(r#"value="a&amp;b""#));
        assert!(fragment.find("Accept").unwrap() < fragment.find("X-Trace").unwrap());

        let parsed = Element::parse(fragment.as_bytes()).unwrap();
        assert_eq!(parsed.name, "xml-fragment");
        assert_eq!(children(&parsed, "entry").len(), 2);
    }

    #[test]
    fn test_headers_setting() {
        assert!(headers_setting(&[]).unwrap().is_none());

        let setting = headers_setting(&[header("Accept", "*/*")]).unwrap().unwrap();
        assert_eq!(
            setting.attributes.get("id").map(String::as_str),
            Some(HEADERS_SETTING_ID)
        );
        assert!(setting.get_text().unwrap().starts_with("<xml-fragment"));
    }

    #[test]
    fn test_basic_credentials_block() {
        let creds = BasicCredentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        let elements = credentials_block(AuthKind::Basic, Some(&creds));
        assert_eq!(elements.len(), 2);

        let block = &elements[0];
        assert_eq!(block.name, "credentials");
        let text = |name: &str| block.get_child(name).unwrap().get_text().unwrap().into_owned();
        assert_eq!(text("username"), "user");
        assert_eq!(text("password"), "pass");
        assert_eq!(text("selectedAuthProfile"), "Basic");
        assert_eq!(text("addedBasicAuthenticationTypes"), "Basic");
        assert_eq!(elements[1].get_text().as_deref(), Some("Basic"));
    }

    #[test]
    fn test_bearer_and_no_auth_only_label() {
        let bearer = credentials_block(AuthKind::Bearer, None);
        assert_eq!(bearer.len(), 1);
        assert_eq!(bearer[0].name, "authType");
        assert_eq!(bearer[0].get_text().as_deref(), Some("Bearer"));

        let none = credentials_block(AuthKind::NoAuth, None);
        assert_eq!(none[0].get_text().as_deref(), Some("No Authorization"));
    }

    #[test]
    fn test_query_entries() {
        let elements = query_entries(&[query("id", "1"), query("q", "x")]);
        assert_eq!(elements.len(), 2);

        let entries = children(&elements[0], "entry");
        assert_eq!(entries[0].attributes.get("key").map(String::as_str), Some("id"));
        assert_eq!(entries[0].attributes.get("value").map(String::as_str), Some("1"));
        assert!(entries[0].get_child("style").is_none());

        assert_eq!(elements[1].name, "parameterOrder");
        let order: Vec<String> = children(&elements[1], "entry")
            .iter()
            .map(|e| e.get_text().unwrap().into_owned())
            .collect();
        assert_eq!(order, vec!["id", "q"]);
    }

    #[test]
    fn test_endpoint_from_raw_url() {
        let url = RequestUrl::from_raw("https://api.test.com:8443/v1/widgets?id=1");
        let endpoint = Endpoint::from_url(&url, "http://fallback");
        assert_eq!(endpoint.origin, "https://api.test.com:8443");
        assert_eq!(endpoint.path, "/v1/widgets");
    }

    #[test]
    fn test_endpoint_from_templated_url() {
        let url = RequestUrl {
            raw: "{{base}}/widgets".to_string(),
            path: vec!["widgets".to_string()],
            ..Default::default()
        };
        let endpoint = Endpoint::from_url(&url, "http://api.test.com");
        assert_eq!(endpoint.origin, "http://api.test.com");
        assert_eq!(endpoint.path, "/widgets");
    }

    #[test]
    fn test_endpoint_path_is_resource_path() {
        let url = RequestUrl {
            raw: "http://api.test.com/users/{{userId}}/my orders".to_string(),
            protocol: Some("http".to_string()),
            host: vec!["api".to_string(), "test".to_string(), "com".to_string()],
            path: vec!["users".to_string(), "{{userId}}".to_string(), "my orders".to_string()],
            ..Default::default()
        };
        let endpoint = Endpoint::from_url(&url, "http://fallback");
        assert_eq!(endpoint.origin, "http://api.test.com");
        assert_eq!(endpoint.path, "/users/{{userId}}/my orders");
        assert_eq!(endpoint.path, url.resource_path());

        let url = RequestUrl {
            raw: "http://api.test.com/v1/w/../x".to_string(),
            host: vec!["api".to_string(), "test".to_string(), "com".to_string()],
            path: vec!["v1".to_string(), "w".to_string(), "..".to_string(), "x".to_string()],
            ..Default::default()
        };
        assert_eq!(Endpoint::from_url(&url, "http://fallback").path, "/v1/w/../x");
    }

    #[test]
    fn test_endpoint_keeps_structured_port() {
        let url = RequestUrl {
            raw: "{{scheme}}://localhost:8080/health".to_string(),
            host: vec!["localhost".to_string()],
            port: Some("8080".to_string()),
            path: vec!["health".to_string()],
            ..Default::default()
        };
        assert_eq!(origin_of(&url).as_deref(), Some("http://localhost"));
        assert_eq!(
            Endpoint::from_url(&url, "http://fallback").origin,
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_origin_of_protocol_fallbacks() {
        let mut url = RequestUrl {
            raw: "https://{{host}}/x".to_string(),
            host: vec!["api".to_string(), "test".to_string()],
            ..Default::default()
        };
        assert_eq!(origin_of(&url).as_deref(), Some("https://api.test"));

        url.raw = "{{host}}/x".to_string();
        assert_eq!(origin_of(&url).as_deref(), Some("http://api.test"));

        url.host.clear();
        assert!(origin_of(&url).is_none());
    }

    #[test]
    fn test_request_node() {
        let endpoint = Endpoint {
            origin: "http://api.test.com".to_string(),
            path: "/widgets".to_string(),
        };
        let headers = vec![header("Content-Type", "application/xml")];
        let parts = RequestParts {
            name: "Create Widget",
            media_type: "application/xml",
            endpoint: &endpoint,
            body: Some("<widget/>"),
            headers: &headers,
            auth: AuthKind::NoAuth,
            credentials: None,
            query: &[],
        };

        let node = request(&parts, "req-1".to_string()).unwrap();
        assert_eq!(node.attributes.get("id").map(String::as_str), Some("req-1"));
        assert_eq!(
            node.attributes.get("mediaType").map(String::as_str),
            Some("application/xml")
        );
        assert_eq!(
            node.get_child("endpoint").unwrap().get_text().as_deref(),
            Some("http://api.test.com")
        );
        assert_eq!(
            node.get_child("request").unwrap().get_text().as_deref(),
            Some("<widget/>")
        );
        assert_eq!(
            node.get_child("originalUri").unwrap().get_text().as_deref(),
            Some("/widgets")
        );
        assert!(node.get_child("settings").unwrap().get_child("setting").is_some());
        assert!(node.get_child("credentials").is_none());
        assert!(node.get_child("parameters").is_none());
    }

    #[test]
    fn test_request_without_body_or_headers() {
        let endpoint = Endpoint {
            origin: "http://api.test.com".to_string(),
            path: "/".to_string(),
        };
        let parts = RequestParts {
            name: "Ping",
            media_type: "application/json",
            endpoint: &endpoint,
            body: None,
            headers: &[],
            auth: AuthKind::NoAuth,
            credentials: None,
            query: &[],
        };

        let node = request(&parts, "req-2".to_string()).unwrap();
        assert!(node.get_child("request").is_none());
        assert!(node.get_child("settings").unwrap().children.is_empty());
    }
}
