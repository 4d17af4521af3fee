//! HTML rendering.
//!
//! Rendering threads an ambient context (the bound link target and the
//! accumulated `style` declarations) down through single-child chains of
//! [`StyledText::Linked`] and [`StyledText::Annotated`] nodes. The context is
//! materialized as markup only where the chain ends:
//!
//! - at a literal, around the escaped text;
//! - at a concatenation, once around the combined output of both sides.
//!   Each side is rendered with a fresh, empty context.
//!
//! So styling a concatenation produces one element around all of it rather
//! than one element per fragment:
//!
//! ```rust
//! use styled_html::{render_html, StyledText};
//!
//! let text = StyledText::literal("x").append(StyledText::literal("y")).bold();
//! assert_eq!(render_html(&text), "<span style=\"font-weight:bold;\">xy</span>");
//! ```
//!
//! When links nest, the outermost one wins: a target bound higher up the
//! tree is never replaced by one further down.

use crate::text::StyledText;

/// Renders a text tree as an HTML fragment.
///
/// The output only ever contains `<br>`, `<span style="...">` and
/// `<a href="...">` elements plus the entities produced by [`escape`].
/// Link targets and typeface names are emitted as given.
pub fn render_html(text: &StyledText) -> String {
    let mut out = String::new();
    render_into(text, &mut out);
    out
}

/// Escapes literal text the way [`render_html`] does.
///
/// `"`, `'`, `<` and `>` become numeric entities, every space becomes
/// `&nbsp;` and every line break (`\n`, `\r\n` or a lone `\r`) becomes
/// `<br>`. Ampersands pass through.
///
/// ```rust
/// use styled_html::escape;
///
/// assert_eq!(escape("a <b>\nc"), "a&nbsp;&#60;b&#62;<br>c");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&#60;"),
            '>' => out.push_str("&#62;"),
            ' ' => out.push_str("&nbsp;"),
            '\n' => out.push_str("<br>"),
            '\r' => {
                // `\r\n` is a single break.
                chars.next_if_eq(&'\n');
                out.push_str("<br>");
            }
            other => out.push(other),
        }
    }
}

fn render_into(text: &StyledText, out: &mut String) {
    render_scoped(text, None, String::new(), out);
}

fn render_scoped<'a>(
    text: &'a StyledText,
    mut href: Option<&'a str>,
    mut styles: String,
    out: &mut String,
) {
    let mut node = text;
    loop {
        match node {
            StyledText::Linked { href: target, child } => {
                href = href.or(Some(target.as_str()));
                node = child;
            }
            StyledText::Annotated { declaration, child } => {
                styles.push_str(&declaration.to_string());
                node = child;
            }
            StyledText::Literal(value) => {
                wrap(href, &styles, out, |out| escape_into(value, out));
                return;
            }
            StyledText::Concat(..) => {
                wrap(href, &styles, out, |out| render_sequence(node, out));
                return;
            }
        }
    }
}

// Both sides of every concatenation along the right spine start from an
// empty context, so the spine is walked in a loop instead of recursing.
fn render_sequence(text: &StyledText, out: &mut String) {
    let mut node = text;
    while let StyledText::Concat(left, right) = node {
        render_into(left, out);
        node = right;
    }
    render_into(node, out);
}

fn wrap<F>(href: Option<&str>, styles: &str, out: &mut String, inner: F)
where
    F: FnOnce(&mut String),
{
    if !styles.is_empty() {
        out.push_str("<span style=\"");
        out.push_str(styles);
        out.push_str("\">");
    }
    if let Some(href) = href {
        out.push_str("<a href=\"");
        out.push_str(href);
        out.push_str("\">");
    }
    inner(out);
    if href.is_some() {
        out.push_str("</a>");
    }
    if !styles.is_empty() {
        out.push_str("</span>");
    }
}
