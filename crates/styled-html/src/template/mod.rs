//! Template integration.
//!
//! Themes plug into [MiniJinja](minijinja) templates through filters:
//!
//! | Filter | Effect |
//! |--------|--------|
//! | `style("name")` | applies the theme style `name` |
//! | `link(url)` | links the value to `url` |
//! | `text` | renders the value as a literal (`&nbsp;`, `<br>`) |
//! | `nl` | appends a line break |
//!
//! In [`OutputMode::Html`](crate::OutputMode::Html) every other
//! interpolation is HTML-escaped by MiniJinja.

mod filters;
mod renderer;

pub use renderer::{render_template, Renderer};
