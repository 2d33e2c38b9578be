//! SoapUI project vocabulary and element helpers.

use xmltree::{Element, Namespace, XMLNode};

/// SoapUI configuration namespace, bound to the `con` prefix.
pub const CON_NS: &str = "http://eviware.com/soapui/config";
pub const CON_PREFIX: &str = "con";

/// XML Schema instance namespace, used for `xsi:type` and `xsi:nil`.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSI_PREFIX: &str = "xsi";

pub const WADL_VERSION: &str = "http://wadl.dev.java.net/2009/02";

/// Setting id under which SoapUI stores request headers.
pub const HEADERS_SETTING_ID: &str = "com.eviware.soapui.impl.wsdl.WsdlRequest@request-headers";

/// Root element of the nested headers document.
pub const HEADERS_FRAGMENT_ROOT: &str = "xml-fragment";

pub const BASIC_PROFILE: &str = "Basic";
pub const QUERY_STYLE: &str = "QUERY";

/// Create an element in the `con` namespace.
pub fn con(name: &str) -> Element {
    let mut element = Element::new(name);
    element.prefix = Some(CON_PREFIX.to_string());
    element.namespace = Some(CON_NS.to_string());
    element
}

/// Create a `con` element holding a single text node.
pub fn con_text(name: &str, text: impl Into<String>) -> Element {
    con(name).with_text(text)
}

/// Namespace declarations for a document root.
pub fn root_namespaces(with_xsi: bool) -> Namespace {
    let mut namespaces = Namespace::empty();
    namespaces.put(CON_PREFIX, CON_NS);
    if with_xsi {
        namespaces.put(XSI_PREFIX, XSI_NS);
    }
    namespaces
}

/// Chainable construction helpers for [`Element`].
pub trait ElementExt: Sized {
    fn with_attr(self, key: &str, value: impl Into<String>) -> Self;
    fn with_text(self, text: impl Into<String>) -> Self;
    fn with_child(self, child: Element) -> Self;
    fn push_child(&mut self, child: Element);
}

impl ElementExt for Element {
    fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XMLNode::Text(text.into()));
        self
    }

    fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    fn push_child(&mut self, child: Element) {
        self.children.push(XMLNode::Element(child));
    }
}
