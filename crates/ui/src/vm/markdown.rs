use std::collections::{HashMap, HashSet};

/// Render lesson Markdown to HTML that is safe to inject into the page.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li", "a",
        "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("ol", ["start"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Split plain text on blank lines, dropping empty paragraphs.
#[must_use]
pub fn paragraphs(input: &str) -> Vec<String> {
    input
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, paragraphs, sanitize_html};

    #[test]
    fn markdown_renders_emphasis_and_lists() {
        let html = markdown_to_html("Use **long** passphrases.\n\n- one\n- two\n");
        assert!(html.contains("<strong>long</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn sanitize_strips_scripts_and_unknown_attributes() {
        let html = sanitize_html("<p onclick=\"x()\">Hi<script>alert(1)</script></p>");
        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let parts = paragraphs("Title\r\n\r\nFirst line.\n\n\n\nSecond.\n");
        assert_eq!(parts, vec!["Title", "First line.", "Second."]);
    }
}
