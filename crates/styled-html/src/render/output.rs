//! Output mode selection.

use serde::{Deserialize, Serialize};

use super::{render_html, render_plain, render_term};
use crate::text::StyledText;

/// The format styled text is rendered to.
///
/// # Example
///
/// ```rust
/// use styled_html::{OutputMode, StyledText};
///
/// let text = StyledText::literal("a b").bold();
/// assert_eq!(OutputMode::Html.render(&text), "<span style=\"font-weight:bold;\">a&nbsp;b</span>");
/// assert_eq!(OutputMode::Text.render(&text), "a b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Escaped HTML with `<span>` and `<a>` markup.
    #[default]
    Html,
    /// Bare text, no escaping or markup.
    Text,
    /// ANSI escape sequences for terminals.
    Term,
}

impl OutputMode {
    /// Renders `text` in this mode.
    pub fn render(self, text: &StyledText) -> String {
        match self {
            OutputMode::Html => render_html(text),
            OutputMode::Text => render_plain(text),
            OutputMode::Term => render_term(text),
        }
    }

    /// Returns `true` if output is HTML and needs escaping around it.
    pub fn is_html(self) -> bool {
        matches!(self, OutputMode::Html)
    }
}
