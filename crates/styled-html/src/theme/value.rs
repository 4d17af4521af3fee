//! Theme entries.

use serde::{Deserialize, Serialize};

use crate::text::Style;

/// A theme entry: either a concrete [`Style`] or the name of another entry.
///
/// In theme files an alias is written as a bare string and a concrete style
/// as a mapping:
///
/// ```yaml
/// accent:
///   color: "#cc3300"
///   bold: true
/// warning: accent
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Refers to another style by name.
    Alias(String),
    /// A concrete style.
    Concrete(Style),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}
