//! Card Description Markdown
//!
//! Renders card descriptions with pulldown-cmark. Raw HTML is shown as text
//! and script links are neutralised, since descriptions come from other users.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !(lower.starts_with("javascript:") || lower.starts_with("vbscript:") || lower.starts_with("data:"))
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        other => other,
    }
}

/// Render a description to HTML
pub fn render_description(text: &str) -> String {
    let parser = Parser::new_ext(text, options()).map(sanitize);
    let mut html = String::new();
    push_html(&mut html, parser);
    html
}

/// Render for a single line (card preview), without the outer `<p>`
pub fn render_inline(text: &str) -> String {
    let html = render_description(text);
    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_description("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_task_list() {
        let html = render_description("- [x] done\n- [ ] todo");
        assert!(html.contains("checked"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_description("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_neutralised() {
        let html = render_description("[click](javascript:alert(1))");
        assert!(html.contains("href=\"#\""));
        let html = render_description("[site](https://example.com)");
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_inline("*hi*"), "<em>hi</em>");
    }
}
