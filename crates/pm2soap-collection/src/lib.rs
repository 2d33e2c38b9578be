//! # Postman collection model
//!
//! Typed records for the Postman Collection v2.1 document the converter
//! reads, plus the helpers the translator needs to classify requests:
//!
//! - Parsing from a file, a string, or an already-loaded JSON value
//! - Case-insensitive header lookup (`Content-Type`, `Authorization`)
//! - Auth type resolution and `Basic` header decoding
//!
//! ## Example
//!
//! ```
//! use pm2soap_collection::CollectionParser;
//!
//! let json = r#"{
//!     "info": { "name": "Widgets" },
//!     "item": [{
//!         "name": "List widgets",
//!         "request": { "method": "GET", "url": "http://api.test.com/widgets" }
//!     }]
//! }"#;
//!
//! let collection = CollectionParser::from_str(json)?.into_collection();
//! assert_eq!(collection.requests().count(), 1);
//! # Ok::<(), pm2soap_core::Error>(())
//! ```

mod auth;
mod headers;
mod parser;
mod types;

pub use auth::{AuthKind, BasicCredentials, decode_basic_credentials};
pub use headers::{content_type, find_header};
pub use parser::CollectionParser;
pub use types::{Auth, AuthEntry, Body, Collection, Header, Info, Item, QueryParam, Request, RequestUrl};
