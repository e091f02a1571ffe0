//! Find URLs and email addresses in plain text, and render the text as an
//! HTML fragment with the links turned into anchors.
//!
//! The scanner is careful about where a link ends. The comma in
//! `https://example.org, see there` is prose, while the parens in
//! `https://en.wikipedia.org/wiki/Link_(The_Legend_of_Zelda)` belong to
//! the URL. Detection runs in one forward pass over the text, so it stays
//! fast on inputs of thousands of lines.
//!
//! ```
//! use linkmark_core::LinkFinder;
//!
//! let input = "Have you seen https://example.org?";
//! let finder = LinkFinder::new();
//! let links: Vec<_> = finder.links(input).collect();
//!
//! assert_eq!(1, links.len());
//! assert_eq!("https://example.org", links[0].as_str());
//! ```
//!
//! Rendering is a single call:
//!
//! ```
//! use linkmark_core::linkify;
//!
//! let html = linkify("mail me at a@example.org", false);
//! assert_eq!(
//!     html,
//!     "mail me at <a href=\"mailto:a@example.org\">a@example.org</a>"
//! );
//! ```

mod classify;
mod domain;
mod email;
mod emit;
mod finder;
mod scanner;
mod span;
mod url;

pub use emit::{linkify, render_html, render_html_sanitized};
pub use finder::{Link, LinkFinder, Links, Segment, Segments};
pub use span::{LinkKind, Span};
