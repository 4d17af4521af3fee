//! Pre-compiled template renderer.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use super::filters::register_filters;
use crate::error::RenderError;
use crate::render::OutputMode;
use crate::theme::Theme;

/// A renderer with pre-registered templates.
///
/// Use this when your application has multiple templates that are rendered
/// repeatedly. Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use styled_html::{Renderer, Style, Theme};
/// use serde::Serialize;
///
/// let theme = Theme::new()
///     .add("title", Style::new().bold())
///     .add("heading", "title");
///
/// let mut renderer = Renderer::new(theme).unwrap();
/// renderer.add_template("header", r#"{{ title | style("heading") }}"#).unwrap();
///
/// #[derive(Serialize)]
/// struct Header { title: String }
///
/// let html = renderer.render("header", &Header { title: "Q&A <2>".into() }).unwrap();
/// assert!(html.starts_with("<span style=\""));
/// assert!(html.contains("Q&A&nbsp;&#60;2&#62;"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a new renderer producing HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        Self::with_output(theme, OutputMode::Html)
    }

    /// Creates a new renderer with explicit output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn with_output(theme: Theme, mode: OutputMode) -> Result<Self, RenderError> {
        Ok(Self {
            env: build_environment(theme, mode)?,
            mode,
        })
    }

    /// The output mode templates are rendered in.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        tracing::trace!(name, "registering template");
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

/// Renders a one-off template source with a theme.
///
/// ```rust
/// use styled_html::{render_template, OutputMode, Style, Theme};
///
/// let theme = Theme::new().add("em", Style::new().italic());
/// let out = render_template(
///     r#"Hello {{ who | style("em") }}"#,
///     &serde_json::json!({ "who": "you" }),
///     &theme,
///     OutputMode::Text,
/// ).unwrap();
/// assert_eq!(out, "Hello you");
/// ```
///
/// # Errors
///
/// Returns an error if the theme is invalid or the template fails.
pub fn render_template<T: Serialize>(
    source: &str,
    data: &T,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, RenderError> {
    let env = build_environment(theme.clone(), mode)?;
    Ok(env.render_str(source, data)?)
}

fn build_environment(theme: Theme, mode: OutputMode) -> Result<Environment<'static>, RenderError> {
    // Validate style aliases before creating the environment
    theme.validate()?;

    let mut env = Environment::new();
    let escape = if mode.is_html() {
        AutoEscape::Html
    } else {
        AutoEscape::None
    };
    env.set_auto_escape_callback(move |_| escape.clone());
    register_filters(&mut env, theme, mode);
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Style;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    fn data(message: &str) -> SimpleData {
        SimpleData {
            message: message.into(),
        }
    }

    #[test]
    fn test_renderer_add_and_render() {
        let theme = Theme::new().add("ok", Style::new().bold());
        let mut renderer = Renderer::new(theme).unwrap();

        renderer
            .add_template("test", r#"{{ message | style("ok") }}"#)
            .unwrap();

        let output = renderer.render("test", &data("hi")).unwrap();
        assert_eq!(
            output,
            "<span style=\"font-weight:bold;color:rgba(0, 0, 0, 1);\">hi</span>"
        );
    }

    #[test]
    fn test_renderer_text_mode_strips_styling() {
        let theme = Theme::new().add("ok", Style::new().bold());
        let mut renderer = Renderer::with_output(theme, OutputMode::Text).unwrap();
        renderer
            .add_template("test", r#"[{{ message | style("ok") }}] <{{ message }}>"#)
            .unwrap();

        assert_eq!(renderer.mode(), OutputMode::Text);
        assert_eq!(renderer.render("test", &data("a b")).unwrap(), "[a b] <a b>");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::new(Theme::new()).unwrap();
        let result = renderer.render("nonexistent", &data("x"));
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_renderer_unknown_style_error() {
        let mut renderer = Renderer::new(Theme::new()).unwrap();
        renderer
            .add_template("t", r#"{{ message | style("ghost") }}"#)
            .unwrap();
        let err = renderer.render("t", &data("x")).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_renderer_fails_with_invalid_theme() {
        let theme = Theme::new().add("orphan", "missing");
        let result = Renderer::new(theme);
        assert!(matches!(result, Err(RenderError::Theme(_))));
    }

    #[test]
    fn test_plain_interpolation_is_autoescaped_in_html() {
        let mut renderer = Renderer::new(Theme::new()).unwrap();
        renderer.add_template("t", "<p>{{ message }}</p>").unwrap();
        let output = renderer.render("t", &data("<b>")).unwrap();
        assert_eq!(output, "<p>&lt;b&gt;</p>");
    }

    #[test]
    fn test_link_and_text_filters() {
        let mut renderer = Renderer::new(Theme::new()).unwrap();
        renderer
            .add_template("t", r#"{{ message | link("/home") }}|{{ message | text }}"#)
            .unwrap();
        let output = renderer.render("t", &data("go 'home'")).unwrap();
        assert_eq!(
            output,
            "<a href=\"/home\">go&nbsp;&#39;home&#39;</a>|go&nbsp;&#39;home&#39;"
        );
    }

    #[test]
    fn test_nl_filter_per_mode() {
        let html = render_template(
            r#"{{ message | nl }}{{ message | style("b") | nl }}"#,
            &data("a<b"),
            &Theme::new().add("b", Style::new().bold()),
            OutputMode::Html,
        )
        .unwrap();
        assert_eq!(
            html,
            "a&#60;b<br><span style=\"font-weight:bold;color:rgba(0, 0, 0, 1);\">a&#60;b</span><br>"
        );

        let text = render_template(
            r#"{{ message | nl }}"#,
            &data("a<b"),
            &Theme::new(),
            OutputMode::Text,
        )
        .unwrap();
        assert_eq!(text, "a<b\n");
    }

    #[test]
    fn test_term_mode_uses_ansi() {
        let output = render_template(
            r#"{{ message | style("b") }}"#,
            &data("x"),
            &Theme::new().add("b", Style::new().bold()),
            OutputMode::Term,
        )
        .unwrap();
        assert!(output.contains("\x1b[1m"));
        assert!(output.contains('x'));
    }
}
