//! Chapter Content
//!
//! Markdown to HTML for chapter bodies, plus the YouTube embed rewrite
//! for course videos.
//!
//! Chapters are written by mentors, so raw HTML in the source is shown
//! as text rather than injected.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

const ID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'/')
    .add(b'&')
    .add(b'{')
    .add(b'}');

/// Render chapter markdown. `resolve` turns relative media paths
/// (`/uploads/...`) into absolute URLs.
pub fn render_markdown(text: &str, resolve: impl Fn(&str) -> String) -> String {
    let parser = Parser::new_ext(text, options());
    let mut events = Vec::new();
    // Depth of image alt text being skipped
    let mut skipping = 0usize;

    for event in parser {
        if skipping > 0 {
            match event {
                Event::Start(_) => skipping += 1,
                Event::End(_) => skipping -= 1,
                _ => {}
            }
            continue;
        }
        match event {
            Event::Start(Tag::Image { dest_url, .. }) => {
                let url = escape_html(&resolve(&dest_url));
                let html = if is_video_url(&url) {
                    format!(r#"<video controls src="{}" class="chapter-media"></video>"#, url)
                } else {
                    format!(r#"<img src="{}" class="chapter-media" />"#, url)
                };
                events.push(Event::Html(CowStr::from(html)));
                skipping = 1;
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::End(TagEnd::Image) => {}
            other => events.push(other),
        }
    }

    let mut html = String::new();
    push_html(&mut html, events.into_iter());
    html
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_video_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".mp4") || lower.ends_with(".webm") || lower.ends_with(".mov")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ========================
// Video embeds
// ========================

/// `youtube.com/watch?v=ID` and `youtu.be/ID` become `/embed/ID`;
/// anything else is returned unchanged.
pub fn embed_video_url(url: &str) -> String {
    youtube_id(url)
        .map(|id| format!("{}{}", YOUTUBE_EMBED, utf8_percent_encode(&id, ID_ENCODE_SET)))
        .unwrap_or_else(|| url.to_string())
}

fn youtube_id(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))?;
    let (host, tail) = rest.split_at(rest.find(['/', '?', '#']).unwrap_or(rest.len()));
    let host = host.to_lowercase();
    let tail = tail.split('#').next().unwrap_or_default();

    if host.contains("youtube.com") {
        let query = tail.split_once('?')?.1;
        return query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "v")
            .map(|(_, value)| value.to_string())
            .filter(|id| !id.is_empty());
    }
    if host == "youtu.be" {
        let path = tail.split('?').next().unwrap_or_default().trim_matches('/');
        return (!path.is_empty()).then(|| path.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute(path: &str) -> String {
        if path.starts_with('/') {
            format!("http://localhost:5000{}", path)
        } else {
            path.to_string()
        }
    }

    #[test]
    fn test_youtube_watch_and_short_links() {
        assert_eq!(
            embed_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_video_url("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_other_urls_pass_through() {
        for url in [
            "https://vimeo.com/12345",
            "https://www.youtube.com/channel/xyz",
            "https://youtu.be/",
            "not a url",
        ] {
            assert_eq!(embed_video_url(url), url);
        }
    }

    #[test]
    fn test_markdown_basics() {
        let html = render_markdown("# Intro\n\nSome **bold** text.", absolute);
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_relative_media_resolved() {
        let html = render_markdown("![diagram](/uploads/d.png)\n\n![clip](/uploads/c.mp4)", absolute);
        assert!(html.contains(r#"<img src="http://localhost:5000/uploads/d.png""#));
        assert!(html.contains(r#"<video controls src="http://localhost:5000/uploads/c.mp4""#));
        assert!(!html.contains("diagram"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>", absolute);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
