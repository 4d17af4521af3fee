//! Bundled text settings.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Where a line is drawn relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDecoration {
    #[serde(alias = "underline")]
    Under,
    #[serde(alias = "overline")]
    Over,
    #[serde(alias = "line-through", alias = "strikethrough")]
    Through,
}

impl LineDecoration {
    /// The CSS `text-decoration` value.
    pub fn css_value(self) -> &'static str {
        match self {
            LineDecoration::Under => "underline",
            LineDecoration::Over => "overline",
            LineDecoration::Through => "line-through",
        }
    }
}

/// A reusable set of text settings.
///
/// `Style` is not part of the text tree; [`StyledText::style`] expands it
/// into individual decorations. The default is black, upright, normal-weight
/// text with no typeface preference, height, or line.
///
/// Fields can be set directly or through the builder methods:
///
/// ```rust
/// use styled_html::{Color, LineDecoration, Style};
///
/// let heading = Style::new()
///     .typeface("Georgia")
///     .typeface("serif")
///     .height(24.0)
///     .color(Color::rgb(51, 102, 153))
///     .bold();
///
/// assert_eq!(heading.typefaces, ["Georgia", "serif"]);
/// assert_eq!(heading.line, None::<LineDecoration>);
/// ```
///
/// [`StyledText::style`]: crate::StyledText::style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Preferred typefaces, most preferred first.
    pub typefaces: Vec<String>,
    /// Font size in pixels.
    pub height: Option<f64>,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub line: Option<LineDecoration>,
}

impl Style {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a typeface to the preference list.
    #[must_use]
    pub fn typeface(mut self, face: impl Into<String>) -> Self {
        self.typefaces.push(face.into());
        self
    }

    #[must_use]
    pub fn height(mut self, px: f64) -> Self {
        self.height = Some(px);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn line(mut self, decoration: LineDecoration) -> Self {
        self.line = Some(decoration);
        self
    }
}
