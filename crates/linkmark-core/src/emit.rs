//! HTML rendering of scanned text.

use crate::finder::LinkFinder;
use crate::span::LinkKind;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Render `text` as an HTML fragment with every found link wrapped in an
/// anchor, using the default finder plus optional scheme-less detection.
///
/// This is a total function: any input renders, and input without links
/// comes back as plain escaped text with zero anchors.
pub fn linkify(text: &str, allow_without_scheme: bool) -> String {
    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(allow_without_scheme);
    render_html(text, &finder)
}

/// Render `text` as an HTML fragment using a configured finder.
///
/// Plain segments are escaped; each link segment becomes exactly one
/// anchor whose visible text is the escaped link text and whose href is
/// the link text itself, completed with `https://` for bare domains and
/// `mailto:` for email addresses.
pub fn render_html(text: &str, finder: &LinkFinder) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for segment in finder.segments(text) {
        match segment.kind() {
            None => escape_into(segment.as_str(), &mut out),
            Some(kind) => {
                out.push_str("<a href=\"");
                match kind {
                    LinkKind::Url => {}
                    LinkKind::Domain => out.push_str("https://"),
                    LinkKind::Email => out.push_str("mailto:"),
                }
                escape_into(segment.as_str(), &mut out);
                out.push_str("\">");
                escape_into(segment.as_str(), &mut out);
                out.push_str("</a>");
            }
        }
    }
    out
}

/// Render like [`render_html`], then pass the fragment through an
/// allow-list sanitizer that keeps only anchors with recognized schemes.
///
/// For engine output the sanitizer changes nothing; the variant exists for
/// embedding boundaries that cannot trust their caller to hand the
/// fragment straight to a container element.
pub fn render_html_sanitized(text: &str, finder: &LinkFinder) -> String {
    let html = render_html(text, finder);

    let tags: HashSet<&'static str> = ["a"].iter().copied().collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());

    let url_schemes: HashSet<&'static str> = ["https", "http", "ftp", "file", "ssh", "mailto"]
        .iter()
        .copied()
        .collect();

    Builder::new()
        .tags(tags)
        .tag_attributes(tag_attributes)
        .url_schemes(url_schemes)
        .link_rel(None)
        .clean(&html)
        .to_string()
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
