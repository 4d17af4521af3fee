//! # Styled HTML - Composable Styled Text
//!
//! `styled-html` builds text out of plain strings and composable decorations
//! (typeface, size, color, weight, slant, line decoration, hyperlink) and
//! renders it to an exact, escaped HTML fragment.
//!
//! ## Core Concepts
//!
//! - [`StyledText`]: immutable tree of literals, concatenations, links and
//!   CSS declarations
//! - [`Style`]: a reusable bundle of text settings
//! - [`render_html`]: deterministic HTML rendering
//! - [`OutputMode`]: HTML, plain text, or ANSI terminal output
//! - [`Theme`]: named styles with aliases, loadable from YAML or JSON
//! - [`Renderer`]: MiniJinja templates with theme-aware filters
//!
//! ## Quick Start
//!
//! ```rust
//! use styled_html::{render_html, Color, LineDecoration, Style, StyledText};
//!
//! let name = StyledText::literal("Ada").bold();
//! let greeting = StyledText::concat([
//!     StyledText::literal("Hi "),
//!     name,
//!     StyledText::literal("!"),
//! ]);
//!
//! assert_eq!(
//!     render_html(&greeting),
//!     "Hi&nbsp;<span style=\"font-weight:bold;\">Ada</span>!",
//! );
//!
//! let note = StyledText::literal("see docs")
//!     .link("https://docs.rs")
//!     .style(&Style::new().color(Color::rgb(0, 0, 255)).line(LineDecoration::Under));
//! assert_eq!(
//!     note.to_html(),
//!     "<span style=\"text-decoration:underline;color:rgba(0, 0, 255, 1);\">\
//!      <a href=\"https://docs.rs\">see&nbsp;docs</a></span>",
//! );
//! ```
//!
//! ## Scoping
//!
//! Decorations applied to a concatenation wrap the whole concatenation in a
//! single element; see [`render_html`] for the exact rules.
//!
//! ## Limitations
//!
//! Link targets and typeface names are inserted into the markup as given.
//! Callers are responsible for supplying well-formed URLs and names without
//! quotes.

pub mod color;
mod error;
pub mod render;
pub mod template;
pub mod text;
pub mod theme;

pub use error::RenderError;

pub use color::{Color, ColorParseError, Rgba};
pub use render::{escape, render_html, render_plain, render_term, OutputMode};
pub use template::{render_template, Renderer};
pub use text::{Declaration, LineDecoration, Style, StyledText};
pub use theme::{StyleValue, Theme, ThemeError, THEME_EXTENSIONS};
