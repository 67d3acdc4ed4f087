use pulldown_cmark::{html, Options, Parser};

/// Converts CommonMark source to an HTML fragment.
pub fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_paragraphs_and_emphasis() {
        assert_eq!(to_html("B"), "<p>B</p>\n");
        assert_eq!(
            to_html("Build a *small* **compiler**"),
            "<p>Build a <em>small</em> <strong>compiler</strong></p>\n"
        );
    }

    #[test]
    fn converts_lists() {
        assert_eq!(
            to_html("- lexer\n- parser\n"),
            "<ul>\n<li>lexer</li>\n<li>parser</li>\n</ul>\n"
        );
    }

    #[test]
    fn empty_source_gives_empty_html() {
        assert_eq!(to_html(""), "");
    }
}
