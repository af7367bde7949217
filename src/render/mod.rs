//! Text renderers for deques and values.
//!
//! Two formats are supported:
//!
//! - [`Format::Json`]: a JSON-like tree. Tagged deque elements render as
//!   `"tag": value` pairs inside the array.
//! - [`Format::Text`]: indented, bullet-style human-readable text.
//!
//! Every renderer takes a `tag`, written verbatim after the indentation,
//! and a base `indent` in spaces. Nested levels add [`INDENT_PER_LEVEL`].
//! Neither format ends with a trailing separator or newline; diagnostics
//! compare this output verbatim.

pub(crate) mod json;
pub(crate) mod text;

use crate::error::DequeError;
use crate::value::{Object, Value};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Spaces added per nesting level.
pub const INDENT_PER_LEVEL: usize = 2;

/// Marker for list items in text format.
///
/// Passed as the tag of a container, it means a bullet has already been
/// written in front of it and no label line should be printed.
pub const BULLET_POINT: &str = "- ";

/// Output format of the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Format {
    /// JSON-like structured output.
    Json = 0,
    /// Indented human-readable text.
    Text = 1,
}

impl Format {
    /// Returns the format for a numeric code, or `None` if unknown.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Json),
            1 => Some(Self::Text),
            _ => None,
        }
    }

    /// Returns the numeric code of this format.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl FromStr for Format {
    type Err = DequeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(DequeError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Renders this value in `format`.
    #[must_use]
    pub fn render(&self, format: Format, tag: Option<&str>, indent: usize) -> String {
        let mut out = String::new();
        value(&mut out, self, format, tag, indent);
        out
    }
}

impl Object {
    /// Renders this object in `format`.
    #[must_use]
    pub fn render(&self, format: Format, tag: Option<&str>, indent: usize) -> String {
        let mut out = String::new();
        match format {
            Format::Json => json::object(&mut out, self, tag, indent),
            Format::Text => text::object(&mut out, self, tag, indent),
        }
        out
    }
}

pub(crate) fn value(out: &mut String, value: &Value, format: Format, tag: Option<&str>, indent: usize) {
    match format {
        Format::Json => json::value(out, value, tag, indent),
        Format::Text => text::value(out, value, tag, indent),
    }
}

/// Writes `indent` spaces followed by the tag, if any.
pub(crate) fn push_indent(out: &mut String, tag: Option<&str>, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
    if let Some(tag) = tag {
        out.push_str(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_codes_and_names() {
        assert_eq!(Format::from_code(0), Some(Format::Json));
        assert_eq!(Format::from_code(1), Some(Format::Text));
        assert_eq!(Format::from_code(-1), None);
        assert_eq!(Format::Text.code(), 1);
        assert_eq!(" JSON ".parse::<Format>().ok(), Some(Format::Json));
        assert!(matches!(
            "yaml".parse::<Format>(),
            Err(DequeError::UnknownFormat(name)) if name == "yaml"
        ));
        assert_eq!(Format::Json.to_string(), "json");
    }

    #[test]
    fn format_serde_is_lowercase() {
        let json = serde_json::to_string(&Format::Text).expect("serialize");
        assert_eq!(json, "\"text\"");
        let back: Format = serde_json::from_str("\"json\"").expect("deserialize");
        assert_eq!(back, Format::Json);
    }

    #[test]
    fn push_indent_writes_spaces_then_tag() {
        let mut out = String::new();
        push_indent(&mut out, Some("t: "), 3);
        push_indent(&mut out, None, 1);
        assert_eq!(out, "   t:  ");
    }
}
