// Shared fixtures and tree helpers for the integration tests

#![allow(dead_code)]

use pm2soap_workspace::collection::{Collection, CollectionParser};
use xmltree::Element;

pub const WIDGETS: &str = include_str!("../fixtures/widgets.postman_collection.json");

pub fn widgets() -> Collection {
    CollectionParser::from_str(WIDGETS)
        .expect("fixture collection parses")
        .into_collection()
}

pub fn collection(items: serde_json::Value) -> Collection {
    CollectionParser::from_value(serde_json::json!({
        "info": { "name": "Test Collection" },
        "item": items,
    }))
    .expect("collection parses")
    .into_collection()
}

pub fn children<'a>(element: &'a Element, name: &str) -> Vec<&'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|child| child.name == name)
        .collect()
}

pub fn all_named<'a>(element: &'a Element, name: &str) -> Vec<&'a Element> {
    fn walk<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
        for child in element.children.iter().filter_map(|node| node.as_element()) {
            if child.name == name {
                found.push(child);
            }
            walk(child, name, found);
        }
    }

    let mut found = Vec::new();
    walk(element, name, &mut found);
    found
}

pub fn attr<'a>(element: &'a Element, key: &str) -> Option<&'a str> {
    element.attributes.get(key).map(String::as_str)
}

pub fn text(element: &Element, child: &str) -> Option<String> {
    element
        .get_child(child)
        .and_then(|c| c.get_text())
        .map(|t| t.into_owned())
}

/// Inner `con:request` nodes (the ones carrying a `mediaType`).
pub fn request_nodes(project: &Element) -> Vec<&Element> {
    all_named(project, "request")
        .into_iter()
        .filter(|r| attr(r, "mediaType").is_some())
        .collect()
}

pub fn resource_named<'a>(project: &'a Element, name: &str) -> &'a Element {
    all_named(project, "resource")
        .into_iter()
        .find(|r| attr(r, "name") == Some(name))
        .unwrap_or_else(|| panic!("resource '{}' not found", name))
}

pub fn headers_text(request: &Element) -> Option<String> {
    request
        .get_child("settings")
        .and_then(|s| s.get_child("setting"))
        .and_then(|s| s.get_text())
        .map(|t| t.into_owned())
}
