//! The styled text tree.
//!
//! A [`StyledText`] is built from plain strings and decorated with consuming
//! builder methods, in the same fluent manner as `console::Style`:
//!
//! ```rust
//! use styled_html::{Color, StyledText};
//!
//! let greeting = StyledText::literal("Hello, ")
//!     .append(StyledText::literal("world").bold())
//!     .color(&Color::rgb(0, 128, 0))
//!     .link("https://example.com");
//!
//! assert_eq!(
//!     greeting.to_html(),
//!     "<span style=\"color:rgba(0, 128, 0, 1);\"><a href=\"https://example.com\">\
//!      Hello,&nbsp;<span style=\"font-weight:bold;\">world</span></a></span>",
//! );
//! ```
//!
//! Every decoration adds exactly one node on top of the tree it is applied
//! to; nothing is ever mutated in place.

mod style;

use std::fmt;

pub use style::{LineDecoration, Style};

use crate::color::{Color, Rgba};

/// A single CSS declaration attached to a subtree.
///
/// The property set is closed: every variant maps to one of the CSS
/// properties this crate emits, so an [`StyledText::Annotated`] node can
/// never carry an unknown key.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `font-family`, holding the already formatted family list.
    FontFamily(String),
    /// `font-size` in CSS pixels.
    FontSize(f64),
    /// `color`.
    Color(Color),
    /// `font-weight:bold`.
    Bold,
    /// `font-style:italic`.
    Italic,
    /// `text-decoration`.
    TextDecoration(LineDecoration),
}

impl Declaration {
    /// The CSS property name.
    pub fn key(&self) -> &'static str {
        match self {
            Declaration::FontFamily(_) => "font-family",
            Declaration::FontSize(_) => "font-size",
            Declaration::Color(_) => "color",
            Declaration::Bold => "font-weight",
            Declaration::Italic => "font-style",
            Declaration::TextDecoration(_) => "text-decoration",
        }
    }

    /// The CSS value text.
    pub fn value(&self) -> String {
        match self {
            Declaration::FontFamily(families) => families.clone(),
            Declaration::FontSize(px) => format!("{}px", px),
            Declaration::Color(color) => color.to_css(),
            Declaration::Bold => "bold".to_string(),
            Declaration::Italic => "italic".to_string(),
            Declaration::TextDecoration(line) => line.css_value().to_string(),
        }
    }
}

/// Formats as `key:value;`, the form used inside a `style` attribute.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.key(), self.value())
    }
}

/// Immutable tree of text fragments, links and style declarations.
///
/// Build values with the constructors and builder methods rather than the
/// variants directly; the variants are public so renderers outside this
/// crate can walk the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StyledText {
    /// Raw, unstyled text.
    Literal(String),
    /// `left` followed by `right`.
    Concat(Box<StyledText>, Box<StyledText>),
    /// A hyperlink around a subtree.
    Linked {
        /// Link target, emitted verbatim.
        href: String,
        /// The linked content.
        child: Box<StyledText>,
    },
    /// A CSS declaration applied to a subtree.
    Annotated {
        /// The applied property.
        declaration: Declaration,
        /// The styled content.
        child: Box<StyledText>,
    },
}

impl StyledText {
    /// Creates unstyled text.
    pub fn literal(text: impl Into<String>) -> Self {
        StyledText::Literal(text.into())
    }

    /// Creates the empty text.
    pub fn empty() -> Self {
        Self::literal("")
    }

    /// Returns `self` followed by `other`.
    #[must_use]
    pub fn append(self, other: StyledText) -> Self {
        StyledText::Concat(Box::new(self), Box::new(other))
    }

    /// Concatenates all texts in order.
    ///
    /// The result is a right fold seeded with [`StyledText::empty`], so
    /// `[a, b]` becomes `a ++ (b ++ empty)` and no texts at all become
    /// `empty`.
    pub fn concat<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        let texts: Vec<StyledText> = texts.into_iter().collect();
        texts
            .into_iter()
            .rev()
            .fold(Self::empty(), |acc, text| text.append(acc))
    }

    /// Concatenates texts with `separator` between each adjacent pair.
    ///
    /// A single text is returned unchanged and an empty list yields
    /// [`StyledText::empty`].
    ///
    /// ```rust
    /// use styled_html::StyledText;
    ///
    /// let list = StyledText::join(
    ///     &StyledText::literal(","),
    ///     ["a", "b", "c"].map(StyledText::literal),
    /// );
    /// assert_eq!(list.to_plain(), "a,b,c");
    /// ```
    pub fn join<I>(separator: &StyledText, texts: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        let mut texts = texts.into_iter();
        let Some(first) = texts.next() else {
            return Self::empty();
        };
        let mut rest = texts.peekable();
        if rest.peek().is_none() {
            return first;
        }

        let mut parts = vec![first];
        for text in rest {
            parts.push(separator.clone());
            parts.push(text);
        }
        Self::concat(parts)
    }

    /// Sets the preferred typefaces, most preferred first.
    ///
    /// Each name is single-quoted as is. With no names the text is returned
    /// unchanged.
    #[must_use]
    pub fn typefaces<S: AsRef<str>>(self, faces: &[S]) -> Self {
        if faces.is_empty() {
            return self;
        }
        let families = faces
            .iter()
            .map(|face| format!("'{}'", face.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        self.annotate(Declaration::FontFamily(families))
    }

    /// Switches to the browser's monospace font.
    #[must_use]
    pub fn monospace(self) -> Self {
        self.annotate(Declaration::FontFamily("monospace".to_string()))
    }

    /// Turns the text into a hyperlink.
    ///
    /// The target is not escaped; callers must pass well-formed URLs.
    #[must_use]
    pub fn link(self, href: impl Into<String>) -> Self {
        StyledText::Linked {
            href: href.into(),
            child: Box::new(self),
        }
    }

    /// Sets the font size in pixels.
    #[must_use]
    pub fn height_px(self, px: f64) -> Self {
        self.annotate(Declaration::FontSize(px))
    }

    /// Sets the text color.
    #[must_use]
    pub fn color<C: Rgba + ?Sized>(self, color: &C) -> Self {
        self.annotate(Declaration::Color(Color::from_rgba(color)))
    }

    /// Makes the text bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.annotate(Declaration::Bold)
    }

    /// Makes the text italic.
    #[must_use]
    pub fn italic(self) -> Self {
        self.annotate(Declaration::Italic)
    }

    /// Draws a line under, over or through the text.
    #[must_use]
    pub fn line(self, decoration: LineDecoration) -> Self {
        self.annotate(Declaration::TextDecoration(decoration))
    }

    /// Applies every setting of a [`Style`].
    ///
    /// Decorations are added in a fixed order (color, typefaces, bold,
    /// italic, line, height) so that equal styles always produce equal
    /// trees.
    #[must_use]
    pub fn style(self, style: &Style) -> Self {
        let mut text = self.color(&style.color).typefaces(&style.typefaces);
        if style.bold {
            text = text.bold();
        }
        if style.italic {
            text = text.italic();
        }
        if let Some(line) = style.line {
            text = text.line(line);
        }
        if let Some(px) = style.height {
            text = text.height_px(px);
        }
        text
    }

    /// Renders the text as an HTML fragment. See [`crate::render_html`].
    pub fn to_html(&self) -> String {
        crate::render::render_html(self)
    }

    /// Returns the bare text content. See [`crate::render_plain`].
    pub fn to_plain(&self) -> String {
        crate::render::render_plain(self)
    }

    fn annotate(self, declaration: Declaration) -> Self {
        StyledText::Annotated {
            declaration,
            child: Box::new(self),
        }
    }
}

impl Default for StyledText {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
