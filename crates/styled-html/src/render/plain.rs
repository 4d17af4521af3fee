//! Plain text extraction.

use crate::text::StyledText;

/// Returns the text content with all links and styling dropped.
///
/// Nothing is escaped; this is the string a reader would see.
pub fn render_plain(text: &StyledText) -> String {
    let mut out = String::new();
    collect_into(text, &mut out);
    out
}

fn collect_into(text: &StyledText, out: &mut String) {
    let mut node = text;
    loop {
        match node {
            StyledText::Literal(value) => {
                out.push_str(value);
                return;
            }
            StyledText::Concat(left, right) => {
                collect_into(left, out);
                node = right;
            }
            StyledText::Linked { child, .. } | StyledText::Annotated { child, .. } => {
                node = child;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_drops_markup_and_keeps_raw_text() {
        let text = StyledText::literal("<b> & 'q'")
            .bold()
            .append(StyledText::literal("\nnext").link("https://a.test"))
            .italic();
        assert_eq!(render_plain(&text), "<b> & 'q'\nnext");
    }

    #[test]
    fn test_plain_empty() {
        assert_eq!(render_plain(&StyledText::empty().bold()), "");
    }
}
