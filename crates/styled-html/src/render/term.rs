//! ANSI terminal rendering.
//!
//! Terminals have no nesting: a reset sequence ends every active attribute.
//! Instead of wrapping concatenations the way the HTML renderer does, the
//! terminal renderer merges everything in effect into each literal, so
//! every fragment carries its complete style and is reset on its own.
//!
//! Only properties with a terminal counterpart are honored: weight, slant,
//! underline, strike-through and color (mapped to the nearest ANSI-256
//! entry). Links become OSC 8 hyperlinks. Typefaces, sizes and overlines
//! are dropped.

use console::Style as TermStyle;

use crate::color::Color;
use crate::text::{Declaration, LineDecoration, StyledText};

/// Renders a text tree with ANSI escape sequences.
///
/// Styling is always emitted, whether or not the process is attached to a
/// terminal.
pub fn render_term(text: &StyledText) -> String {
    let mut out = String::new();
    render_node(text, TermContext::default(), &mut out);
    out
}

#[derive(Debug, Clone, Default)]
struct TermContext<'a> {
    href: Option<&'a str>,
    bold: bool,
    italic: bool,
    line: Option<LineDecoration>,
    color: Option<Color>,
}

impl TermContext<'_> {
    fn apply(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Bold => self.bold = true,
            Declaration::Italic => self.italic = true,
            // Inner declarations are applied last and win, as later
            // declarations do inside a CSS block.
            Declaration::TextDecoration(line) => self.line = Some(*line),
            Declaration::Color(color) => self.color = Some(*color),
            Declaration::FontFamily(_) | Declaration::FontSize(_) => {}
        }
    }

    fn style(&self) -> TermStyle {
        let mut style = TermStyle::new().force_styling(true);
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        match self.line {
            Some(LineDecoration::Under) => style = style.underlined(),
            Some(LineDecoration::Through) => style = style.strikethrough(),
            Some(LineDecoration::Over) | None => {}
        }
        if let Some(color) = self.color {
            style = style.color256(color.to_ansi256());
        }
        style
    }
}

fn render_node<'a>(text: &'a StyledText, mut context: TermContext<'a>, out: &mut String) {
    let mut node = text;
    loop {
        match node {
            StyledText::Literal(value) => {
                write_fragment(value, &context, out);
                return;
            }
            StyledText::Concat(left, right) => {
                render_node(left, context.clone(), out);
                node = right;
            }
            StyledText::Linked { href, child } => {
                context.href = context.href.or(Some(href.as_str()));
                node = child;
            }
            StyledText::Annotated { declaration, child } => {
                context.apply(declaration);
                node = child;
            }
        }
    }
}

fn write_fragment(text: &str, context: &TermContext<'_>, out: &mut String) {
    if text.is_empty() {
        return;
    }
    let styled = context.style().apply_to(text).to_string();
    match context.href {
        Some(href) => {
            out.push_str("\x1b]8;;");
            out.push_str(href);
            out.push_str("\x1b\\");
            out.push_str(&styled);
            out.push_str("\x1b]8;;\x1b\\");
        }
        None => out.push_str(&styled),
    }
}
