//! Named styles.
//!
//! This module provides:
//!
//! - [`Theme`]: a named collection of styles with a fluent builder API and
//!   YAML/JSON loading
//! - [`StyleValue`]: a theme entry, concrete or an alias
//! - [`ThemeError`]: validation, lookup and loading failures
//!
//! Aliases allow layering: semantic names (`"timestamp"`) can point at
//! presentation names (`"muted"`), which hold the concrete [`Style`].
//!
//! [`Style`]: crate::Style

mod error;
#[allow(clippy::module_inception)]
mod theme;
mod value;

pub use error::ThemeError;
pub use theme::{Theme, THEME_EXTENSIONS};
pub use value::StyleValue;
