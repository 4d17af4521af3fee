//! MiniJinja filter registration.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::render::{escape, OutputMode};
use crate::text::StyledText;
use crate::theme::Theme;

/// Registers all built-in filters on a minijinja environment.
///
/// Every filter treats its input as plain text: it renders the value's
/// string form as a literal, so filters don't compose with each other's
/// markup. In HTML mode results are marked safe so auto-escaping leaves
/// them alone.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let theme = Arc::new(theme);

    // {{ value | style("name") }} applies a theme style.
    env.add_filter(
        "style",
        move |value: Value, name: String| -> Result<Value, Error> {
            let text = theme
                .apply(&name, StyledText::literal(value.to_string()))
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
            Ok(finish(mode, &text))
        },
    );

    // {{ value | link(url) }} turns the value into a hyperlink.
    env.add_filter("link", move |value: Value, href: String| -> Value {
        finish(mode, &StyledText::literal(value.to_string()).link(href))
    });

    // {{ value | text }} renders the value as unstyled text, keeping spaces
    // and line breaks in HTML.
    env.add_filter("text", move |value: Value| -> Value {
        finish(mode, &StyledText::literal(value.to_string()))
    });

    // Appends a line break: `<br>` in HTML, `\n` elsewhere.
    env.add_filter("nl", move |value: Value| -> Value {
        if !mode.is_html() {
            return Value::from(format!("{}\n", value));
        }
        let content = if value.is_safe() {
            value.to_string()
        } else {
            escape(&value.to_string())
        };
        Value::from_safe_string(format!("{}<br>", content))
    });
}

fn finish(mode: OutputMode, text: &StyledText) -> Value {
    let rendered = mode.render(text);
    if mode.is_html() {
        Value::from_safe_string(rendered)
    } else {
        Value::from(rendered)
    }
}
