use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use linkmark_core::{LinkFinder, LinkKind, render_html, render_html_sanitized};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkifyOptions {
    allow_without_scheme: Option<bool>,
    sanitized: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkifyResult {
    html: String,
    link_count: usize,
    spans: Vec<JsSpan>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSpan {
    start: usize,
    end: usize,
    kind: String,
}

/// Render plain text as an HTML fragment with links wrapped in anchors.
/// Safe to assign to a container element's markup; everything that is not
/// a link comes back escaped.
#[wasm_bindgen]
pub fn linkify_text(text: &str, allow_without_scheme: bool) -> String {
    linkmark_core::linkify(text, allow_without_scheme)
}

/// Like [`linkify_text`] but with an options object and a structured
/// result carrying the link spans, so callers can show a link count
/// without re-parsing the fragment.
#[wasm_bindgen]
pub fn linkify_text_with_options(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;

    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(options.allow_without_scheme.unwrap_or(false));

    let html = if options.sanitized.unwrap_or(false) {
        render_html_sanitized(text, &finder)
    } else {
        render_html(text, &finder)
    };

    let spans: Vec<JsSpan> = finder
        .links(text)
        .map(|link| JsSpan {
            start: link.start(),
            end: link.end(),
            kind: kind_label(link.kind()).to_string(),
        })
        .collect();

    let result = LinkifyResult {
        html,
        link_count: spans.len(),
        spans,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn options_from_js(value: JsValue) -> Result<LinkifyOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(LinkifyOptions {
            allow_without_scheme: None,
            sanitized: None,
        });
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn kind_label(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Url => "url",
        LinkKind::Domain => "domain",
        LinkKind::Email => "email",
        _ => "link",
    }
}
