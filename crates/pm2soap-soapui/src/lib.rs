//! # SoapUI project generation
//!
//! Maps a parsed Postman collection onto a SoapUI REST project tree:
//! project → interface → resource → method → request.
//!
//! - [`builder`] constructs the recurring fragments (parameter blocks,
//!   header settings, credentials, query entries)
//! - [`CollectionTranslator`] walks the collection and assembles the tree
//!
//! The result is an in-memory [`xmltree::Element`]; serialization lives in
//! the writer crate.

pub mod builder;
mod ids;
pub mod schema;
mod translator;

pub use ids::{IdGenerator, SequentialIds, UuidIds, generate_id};
pub use translator::{CollectionTranslator, Translation, TranslationSummary};
