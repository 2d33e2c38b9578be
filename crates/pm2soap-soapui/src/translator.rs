//! Collection → SoapUI project translation.

use crate::builder::{self, Endpoint, RequestParts};
use crate::ids::{IdGenerator, UuidIds};
use crate::schema::{ElementExt, WADL_VERSION, con, con_text, root_namespaces};
use pm2soap_collection::{
    AuthKind, Collection, Header, Request, content_type, decode_basic_credentials,
};
use pm2soap_core::{ConvertConfig, Error, Result};
use tracing::{debug, info, warn};
use xmltree::Element;

/// Counts reported after a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSummary {
    pub project_name: String,
    pub base_url: String,
    /// Requests converted into resource/method/request subtrees
    pub requests: usize,
    /// Top-level items without a request (folders, empty entries)
    pub skipped: usize,
}

/// A translated project tree and its summary.
#[derive(Debug, Clone)]
pub struct Translation {
    pub project: Element,
    pub summary: TranslationSummary,
}

/// Walks a Postman collection and assembles the SoapUI project tree.
///
/// # Example
///
/// ```
/// use pm2soap_collection::CollectionParser;
/// use pm2soap_core::ConvertConfig;
/// use pm2soap_soapui::CollectionTranslator;
///
/// let collection = CollectionParser::from_str(r#"{
///     "info": { "name": "Widgets" },
///     "item": [{ "name": "List", "request": { "url": "http://api.test.com/widgets" } }]
/// }"#)?.into_collection();
///
/// let translation = CollectionTranslator::new(ConvertConfig::default()).translate(&collection)?;
/// assert_eq!(translation.summary.base_url, "http://api.test.com");
/// # Ok::<(), pm2soap_core::Error>(())
/// ```
pub struct CollectionTranslator {
    config: ConvertConfig,
    ids: Box<dyn IdGenerator>,
}

impl CollectionTranslator {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            ids: Box::new(UuidIds),
        }
    }

    /// Replace the identifier source (e.g. with [`crate::SequentialIds`]).
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Translate the whole collection in one pass.
    ///
    /// Fails when the collection has no request to derive the base URL
    /// from, when that request has no host, or when a Basic authorization
    /// header cannot be decoded.
    pub fn translate(&mut self, collection: &Collection) -> Result<Translation> {
        let project_name = collection.info.name.clone();
        let base_url = Self::base_url(collection)?;
        debug!("Base URL: {}", base_url);

        let mut project = self.project_shell(&project_name);
        let mut interface = self.interface_shell(&base_url);

        let mut requests = 0;
        for (name, request) in collection.requests() {
            debug!("Converting request '{}' ({} {})", name, request.method, request.url.raw);
            interface.push_child(self.resource(name, request, &base_url)?);
            requests += 1;
        }

        project.push_child(interface);
        for container in [
            "properties",
            "wssContainer",
            "oAuth2ProfileContainer",
            "oAuth1ProfileContainer",
        ] {
            project.push_child(con(container));
        }

        let summary = TranslationSummary {
            project_name,
            base_url,
            requests,
            skipped: collection.item.len() - requests,
        };
        info!(
            "Translated '{}': {} requests, {} items skipped",
            summary.project_name, summary.requests, summary.skipped
        );

        Ok(Translation { project, summary })
    }

    /// Shared base URL, taken from the first request in the collection.
    fn base_url(collection: &Collection) -> Result<String> {
        let (name, first) = collection
            .item
            .iter()
            .find_map(|item| item.request.as_ref().map(|r| (item.name.as_str(), r)))
            .ok_or(Error::EmptyCollection)?;
        builder::origin_of(&first.url).ok_or_else(|| Error::MissingHost(name.to_string()))
    }

    fn project_shell(&mut self, name: &str) -> Element {
        let project_config = &self.config.project;
        let mut project = con("soapui-project")
            .with_attr("id", self.ids.next_id())
            .with_attr("activeEnvironment", "Default")
            .with_attr("name", name)
            .with_attr("resourceRoot", "")
            .with_attr("soapui-version", &project_config.soapui_version)
            .with_attr("abortOnError", project_config.abort_on_error.to_string())
            .with_attr("runType", &project_config.run_type)
            .with_child(con("settings"));
        project.namespaces = Some(root_namespaces(true));
        project
    }

    fn interface_shell(&mut self, base_url: &str) -> Element {
        con("interface")
            .with_attr("xsi:type", "con:RestService")
            .with_attr("id", self.ids.next_id())
            .with_attr("wadlVersion", WADL_VERSION)
            .with_attr("name", base_url)
            .with_attr("type", "rest")
            .with_child(con("settings"))
            .with_child(
                con("definitionCache")
                    .with_attr("type", "TEXT")
                    .with_attr("rootPart", ""),
            )
            .with_child(con("endpoints").with_child(con_text("endpoint", base_url)))
    }

    /// Resource → method → request subtree for one collection request.
    fn resource(&mut self, name: &str, request: &Request, base_url: &str) -> Result<Element> {
        // Working copy: a synthesized bearer header stays with this item.
        let mut headers = request.header.clone();
        let media_type = content_type(&headers)
            .unwrap_or(self.config.request.default_media_type.as_str())
            .to_string();

        let auth = request.auth_kind();
        if auth == AuthKind::Bearer {
            match request.bearer_token() {
                Some(token) => headers.push(Header {
                    key: "Authorization".to_string(),
                    value: format!("Bearer {}", token),
                }),
                None => warn!("Request '{}' declares bearer auth without a token", name),
            }
        }

        let credentials = match auth {
            AuthKind::Basic => {
                let credentials = decode_basic_credentials(name, &headers)?;
                if credentials.is_none() {
                    warn!(
                        "Request '{}' declares basic auth without an Authorization: Basic header",
                        name
                    );
                }
                credentials
            }
            _ => None,
        };

        let path = request.url.resource_path();
        let endpoint = Endpoint::from_url(&request.url, base_url);

        let resource_id = self.ids.next_id();
        let method_id = self.ids.next_id();
        let request_id = self.ids.next_id();

        let request_node = builder::request(
            &RequestParts {
                name,
                media_type: &media_type,
                endpoint: &endpoint,
                body: request.raw_body(),
                headers: &headers,
                auth,
                credentials: credentials.as_ref(),
                query: &request.url.query,
            },
            request_id,
        )?;

        let method = con("method")
            .with_attr("name", name)
            .with_attr("id", method_id)
            .with_attr("method", &request.method)
            .with_child(con("settings"))
            .with_child(request_node);

        let mut resource = con("resource")
            .with_attr("name", name)
            .with_attr("path", path)
            .with_attr("id", resource_id)
            .with_child(con("settings"));
        if let Some(parameters) = builder::parameter_block(&request.url.query) {
            resource.push_child(parameters);
        }
        resource.push_child(method);

        Ok(resource)
    }
}
