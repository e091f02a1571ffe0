//! Character classification shared by the scanners. Every predicate is a
//! plain O(1) match so the scanners stay single-pass.

/// Quote characters that establish context around a link, e.g. in
/// `"www.example.com"` the closing quote ends the link body.
pub(crate) const QUOTES: &[char] = &['\'', '"'];

/// Characters that can never appear in a URL, per RFC 3986 and RFC 3987.
/// `\`, `^`, `{` and `}` are absent on purpose: other link detectors
/// accept them, and braces are handled by bracket balancing instead.
pub(crate) fn url_hard_stop(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{1F}' | ' ' | '|' | '"' | '<' | '>' | '`' | '\u{7F}'..='\u{9F}'
    )
}

/// Characters that may appear inside a URL but read as prose punctuation
/// when nothing link-legal follows them, like the comma after a link in a
/// sentence.
pub(crate) fn url_never_final(c: char) -> bool {
    matches!(c, '?' | '!' | '.' | ',' | ':' | ';' | '*')
}

/// Characters allowed in an email local-part atom. Dots are not atoms;
/// they may only separate two atoms and are handled by the caller.
pub(crate) fn local_atom(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-') || c >= '\u{80}'
}

/// Characters allowed in a domain label, dots aside.
pub(crate) fn label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c >= '\u{80}'
}

/// True if `c` may sit directly in front of a scheme token without gluing
/// to it. `.http://x` reads as a separator plus a URL; `xhttp://x` and
/// `my-http://x` do not contain a URL.
pub(crate) fn scheme_boundary(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '+' || c == '-')
}
