//! Textual clean-up of serialized project XML.
//!
//! The headers setting stores a serialized `xml-fragment` as element text,
//! so the emitter escapes its markup a second time. SoapUI reads the
//! fragment with `>` and `&` unescaped and only the opening `<` escaped.

const REPLACEMENTS: [(&str, &str); 3] = [
    ("&gt;", ">"),
    ("&amp;", "&"),
    (r#"headers"><"#, r#"headers">&lt;"#),
];

/// Apply the fixed replacements, in order, to fully serialized output.
pub fn postprocess(serialized: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(serialized.to_string(), |text, (from, to)| text.replace(from, to))
}
