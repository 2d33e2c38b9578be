//! # SoapUI project writer
//!
//! Serialization adapter around the translator: renders the project tree
//! as UTF-8 XML with a declaration, applies the textual post-pass SoapUI
//! needs for the nested headers fragment, and handles file I/O.

mod postprocess;
mod writer;

pub use postprocess::postprocess;
pub use writer::{convert_file, render, write_project};
