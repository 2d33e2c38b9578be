//! # pm2soap core
//!
//! Shared error type and conversion configuration used by every crate in
//! the Postman to SoapUI converter.

pub mod config;
pub mod error;

pub use config::{ConvertConfig, OutputConfig, ProjectConfig, RequestConfig};
pub use error::{Error, Result};
