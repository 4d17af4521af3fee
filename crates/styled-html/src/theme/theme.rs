//! Theme struct for building and loading style collections.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use super::{StyleValue, ThemeError};
use crate::text::{Style, StyledText};

/// File extensions [`Theme::load`] understands.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// A named collection of styles.
///
/// # Example
///
/// ```rust
/// use styled_html::{Color, Style, StyledText, Theme};
///
/// let theme = Theme::new()
///     // Visual layer - concrete styles
///     .add("muted", Style::new().color(Color::rgb(128, 128, 128)))
///     .add("accent", Style::new().bold())
///     // Semantic layer - aliases
///     .add("timestamp", "muted");
///
/// let stamp = theme.apply("timestamp", StyledText::literal("12:00")).unwrap();
/// assert_eq!(
///     stamp.to_html(),
///     "<span style=\"color:rgba(128, 128, 128, 1);\">12:00</span>",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    styles: BTreeMap<String, StyleValue>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    ///
    /// The value can be a concrete [`Style`] or a `&str`/`String` alias to
    /// another style name. Adding an existing name replaces it.
    #[must_use]
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    /// Returns `true` if the theme has an entry with this name.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the raw entry for `name`, without following aliases.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.styles.get(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownStyle`] if `name` isn't defined,
    /// [`ThemeError::UnresolvedAlias`] if an alias along the way points
    /// nowhere, and [`ThemeError::CycleDetected`] if aliases loop.
    pub fn resolve(&self, name: &str) -> Result<&Style, ThemeError> {
        let mut path = vec![name.to_string()];
        let mut current = name;
        loop {
            match self.styles.get(current) {
                Some(StyleValue::Concrete(style)) => return Ok(style),
                Some(StyleValue::Alias(target)) => {
                    let seen = path.iter().any(|step| step == target);
                    path.push(target.clone());
                    if seen {
                        return Err(ThemeError::CycleDetected { path });
                    }
                    current = target;
                }
                None if path.len() == 1 => {
                    return Err(ThemeError::UnknownStyle {
                        name: name.to_string(),
                    });
                }
                None => {
                    return Err(ThemeError::UnresolvedAlias {
                        from: path[path.len() - 2].clone(),
                        to: current.to_string(),
                    });
                }
            }
        }
    }

    /// Applies the style named `name` to `text`.
    ///
    /// # Errors
    ///
    /// Fails if `name` doesn't resolve; see [`Theme::resolve`].
    pub fn apply(&self, name: &str, text: StyledText) -> Result<StyledText, ThemeError> {
        let style = self.resolve(name)?;
        Ok(text.style(style))
    }

    /// Validates that all style aliases in this theme resolve correctly.
    ///
    /// Loading functions call this automatically; themes built with
    /// [`Theme::add`] are validated when handed to a
    /// [`Renderer`](crate::Renderer), or can be checked explicitly.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for name in self.styles.keys() {
            self.resolve(name)?;
        }
        tracing::trace!(styles = self.styles.len(), "theme validated");
        Ok(())
    }

    /// Parses and validates a YAML theme.
    ///
    /// ```rust
    /// use styled_html::Theme;
    ///
    /// let theme = Theme::from_yaml(r#"
    /// header:
    ///   typefaces: [Helvetica, sans-serif]
    ///   height: 24
    ///   bold: true
    /// title: header
    /// "#).unwrap();
    ///
    /// assert!(theme.resolve("title").unwrap().bold);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let styles: BTreeMap<String, StyleValue> = serde_yaml::from_str(source)?;
        Self::from_entries(styles)
    }

    /// Parses and validates a JSON theme with the same shape as YAML themes.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let styles: BTreeMap<String, StyleValue> = serde_json::from_str(source)?;
        Self::from_entries(styles)
    }

    /// Reads a theme file, picking the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsupportedExtension`] for extensions not in
    /// [`THEME_EXTENSIONS`], [`ThemeError::Io`] if the file can't be read,
    /// and parse or validation errors otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::debug!(path = %path.display(), "loading theme file");
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    fn from_entries(styles: BTreeMap<String, StyleValue>) -> Result<Self, ThemeError> {
        let theme = Self { styles };
        theme.validate()?;
        tracing::debug!(styles = theme.len(), "loaded theme");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::text::LineDecoration;

    #[test]
    fn test_theme_add_concrete() {
        let theme = Theme::new().add("bold", Style::new().bold());
        assert!(theme.has("bold"));
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn test_theme_add_alias_str_and_string() {
        let target = String::from("base");
        let theme = Theme::new()
            .add("base", Style::new().italic())
            .add("alias", "base")
            .add("other", target);

        assert_eq!(theme.get("alias"), Some(&StyleValue::Alias("base".into())));
        assert_eq!(theme.names().collect::<Vec<_>>(), ["alias", "base", "other"]);
    }

    #[test]
    fn test_resolve_follows_alias_chain() {
        let theme = Theme::new()
            .add("visual", Style::new().bold())
            .add("presentation", "visual")
            .add("semantic", "presentation");

        assert_eq!(theme.resolve("semantic").unwrap(), &Style::new().bold());
    }

    #[test]
    fn test_resolve_unknown_style() {
        let err = Theme::new().resolve("nope").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownStyle { ref name } if name == "nope"));
    }

    #[test]
    fn test_validate_dangling_alias() {
        let theme = Theme::new().add("orphan", "missing");
        match theme.validate() {
            Err(ThemeError::UnresolvedAlias { from, to }) => {
                assert_eq!(from, "orphan");
                assert_eq!(to, "missing");
            }
            other => panic!("expected UnresolvedAlias, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_cycle() {
        let theme = Theme::new().add("a", "b").add("b", "a");
        match theme.validate() {
            Err(ThemeError::CycleDetected { path }) => assert_eq!(path, ["a", "b", "a"]),
            other => panic!("expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_self_alias() {
        let theme = Theme::new().add("me", "me");
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_apply_uses_style_order() {
        let style = Style::new().bold().line(LineDecoration::Under);
        let theme = Theme::new().add("link", style.clone()).add("nav", "link");
        let text = StyledText::literal("home");

        assert_eq!(
            theme.apply("nav", text.clone()).unwrap(),
            text.style(&style)
        );
    }

    #[test]
    fn test_from_yaml() {
        let theme = Theme::from_yaml(
            r##"
heading:
  typefaces: [Georgia, serif]
  height: 24
  color: "#336699"
  bold: true
strike:
  line: line-through
title: heading
"##,
        )
        .unwrap();

        let heading = theme.resolve("title").unwrap();
        assert_eq!(heading.typefaces, ["Georgia", "serif"]);
        assert_eq!(heading.height, Some(24.0));
        assert_eq!(heading.color, Color::rgb(51, 102, 153));
        assert_eq!(
            theme.resolve("strike").unwrap().line,
            Some(LineDecoration::Through)
        );
    }

    #[test]
    fn test_from_yaml_validates() {
        assert!(matches!(
            Theme::from_yaml("a: b\n"),
            Err(ThemeError::UnresolvedAlias { .. })
        ));
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        let err = Theme::from_yaml("x:\n  color: not-a-color\n").unwrap_err();
        assert!(matches!(err, ThemeError::Yaml(_)));
    }

    #[test]
    fn test_from_json() {
        let theme =
            Theme::from_json(r#"{"code": {"typefaces": ["Fira Code"], "italic": true}, "pre": "code"}"#)
                .unwrap();
        assert!(theme.resolve("pre").unwrap().italic);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        assert!(matches!(
            Theme::load("theme.toml"),
            Err(ThemeError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Theme::load("/definitely/not/here.yaml"),
            Err(ThemeError::Io { .. })
        ));
    }
}
