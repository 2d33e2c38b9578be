//! Identifier generation for project nodes.

use uuid::Uuid;

/// A fresh UUID v4 rendered as text.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Source of unique node identifiers. Every call yields a new value.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        generate_id()
    }
}

/// Counter-based identifiers (`<prefix>-1`, `<prefix>-2`, ...) for
/// reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    counter: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
