//! # pm2soap
//!
//! Postman collection → SoapUI project converter.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`collection`]: Postman document model and parser
//! - [`soapui`]: element builder and collection translator
//! - [`writer`]: XML rendering, post-pass, and file conversion
//! - [`telemetry`]: logging setup
//!
//! ## Example
//!
//! ```no_run
//! use pm2soap_workspace::{ConvertConfig, convert_file};
//!
//! let summary = convert_file("collection.json", "project.xml", &ConvertConfig::default())?;
//! println!("Converted {} requests", summary.requests);
//! # Ok::<(), pm2soap_workspace::Error>(())
//! ```

pub use pm2soap_collection as collection;
pub use pm2soap_core::{ConvertConfig, Error, Result};
pub use pm2soap_soapui as soapui;
pub use pm2soap_telemetry as telemetry;
pub use pm2soap_writer as writer;
pub use pm2soap_writer::{convert_file, render};
