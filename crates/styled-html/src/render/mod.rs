//! Renderers for [`StyledText`](crate::StyledText).
//!
//! - [`render_html`]: the HTML fragment renderer
//! - [`render_plain`]: bare text content
//! - [`render_term`]: ANSI terminal output
//! - [`OutputMode`]: picks one of the above at runtime

mod html;
mod output;
mod plain;
mod term;

pub use html::{escape, render_html};
pub use output::OutputMode;
pub use plain::render_plain;
pub use term::render_term;
