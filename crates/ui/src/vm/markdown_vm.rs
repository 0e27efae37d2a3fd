use std::collections::{HashMap, HashSet};

/// Renderable form of free text returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RichText {
    /// Sanitized HTML rendered from markdown.
    Html(String),
    /// Text shown as-is with its line breaks preserved.
    Plain(String),
}

impl RichText {
    #[must_use]
    pub fn from_backend(input: &str) -> Self {
        if looks_like_markdown(input) {
            Self::Html(markdown_to_html(input))
        } else {
            Self::Plain(input.trim_end().to_string())
        }
    }
}

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "hr", "em", "strong", "b", "i", "del", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody",
        "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[must_use]
pub fn looks_like_markdown(input: &str) -> bool {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.contains("```") || trimmed.contains("**") || trimmed.contains("__") {
        return true;
    }

    if trimmed.contains("](") {
        return true;
    }

    trimmed.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("# ")
            || line.starts_with("## ")
            || line.starts_with("### ")
            || line.starts_with("- ")
            || line.starts_with("* ")
            || line.starts_with("> ")
    })
}
