//! Scheme URL and bare-domain scanning.

use std::ops::Range;

use crate::classify::{QUOTES, label_char, scheme_boundary, url_hard_stop, url_never_final};
use crate::domain::find_authority_end;
use crate::scanner::Scanner;

/// The schemes recognized in front of `://`, matched case-insensitively.
/// Anything else, including schemes without an authority like `mailto:`,
/// stays plain text.
pub(crate) const SCHEMES: &[&str] = &["https", "http", "ftp", "file", "ssh"];

/// Shortest bare domain worth linking; `g.cn` is the canonical example.
/// Anything shorter is far more likely to be prose.
const MIN_DOMAIN_LENGTH: usize = 4;

/// Scans for scheme URLs from a `:` trigger (requires `://`).
pub(crate) struct UrlScanner;

/// Scans for scheme-less domains such as `example.com/a` from a `.` trigger.
pub(crate) struct DomainScanner;

impl Scanner for UrlScanner {
    fn scan(&self, s: &str, separator: usize) -> Option<Range<usize>> {
        if separator == 0 || !s[separator..].starts_with("://") {
            return None;
        }
        let after_separator = separator + "://".len();
        if after_separator >= s.len() {
            return None;
        }

        let (start, quote) = find_scheme_start(&s[..separator])?;
        let tail = &s[after_separator..];
        let authority = find_authority_end(tail, true, true)?;
        let end = find_url_end(&tail[authority.end..], quote);

        Some(start..after_separator + authority.end + end)
    }
}

impl Scanner for DomainScanner {
    fn scan(&self, s: &str, separator: usize) -> Option<Range<usize>> {
        if separator == 0 {
            return None;
        }

        let (start, quote) = find_domain_start(&s[..separator])?;
        let tail = &s[start..];
        let authority = find_authority_end(tail, false, true)?;
        if authority.last_dot.is_none() || authority.numeric_host {
            // A bare domain needs at least two labels, and `1.2.3.4` or
            // `1.0` in prose is a number, not a link.
            return None;
        }
        let end = find_url_end(&tail[authority.end..], quote);

        let range = start..start + authority.end + end;
        if range.end - range.start < MIN_DOMAIN_LENGTH {
            return None;
        }
        Some(range)
    }
}

/// Find the start of a recognized scheme ending right before `://`, plus
/// the quote character immediately in front of it, if any.
fn find_scheme_start(s: &str) -> Option<(usize, Option<char>)> {
    for scheme in SCHEMES {
        if s.len() < scheme.len() {
            continue;
        }
        let start = s.len() - scheme.len();
        if !s.is_char_boundary(start) || !s[start..].eq_ignore_ascii_case(scheme) {
            continue;
        }
        return match s[..start].chars().next_back() {
            None => Some((start, None)),
            Some(c) if QUOTES.contains(&c) => Some((start, Some(c))),
            Some(c) if scheme_boundary(c) => Some((start, None)),
            // Glued to a preceding word, e.g. `xhttp://` or `1http://`.
            Some(_) => None,
        };
    }
    None
}

/// Find the start of a bare domain from the label before its first dot,
/// e.g. in `blog.example.com` step back from the first `.` to `b`.
fn find_domain_start(s: &str) -> Option<(usize, Option<char>)> {
    let mut first = None;
    let mut quote = None;

    for (i, c) in s.char_indices().rev() {
        match c {
            // A scheme or email in front means the other scanners already
            // had their shot here, and `/www.example.com` on its own is a
            // path, not a domain. A second dot means a valid domain would
            // have been found from that earlier dot already.
            '/' | '@' | '.' => return None,
            '-' => {
                // A label can't end with `-`.
                first?;
                first = Some(i);
            }
            c if QUOTES.contains(&c) => {
                quote = Some(c);
                break;
            }
            c if label_char(c) => first = Some(i),
            _ => break,
        }
    }

    let first = first?;
    if s[first..].starts_with('-') {
        // A label can't start with `-` either.
        return None;
    }
    Some((first, quote))
}

/// Find where a URL ends, starting just past a valid authority. So for
/// `https://example.com/foo` this starts at `/` and ends after `foo`.
///
/// Each character is a hard stop, legal-but-never-final (trailing prose
/// punctuation), or legal-and-final. Brackets are balanced with explicit
/// counters rather than lookbehind, which keeps the pass linear: an
/// unmatched closer is a hard stop, so `(http://x/)` gives its paren back,
/// while the balanced pair in `wiki/Link_(The_Legend_of_Zelda)` stays in.
fn find_url_end(s: &str, quote: Option<char>) -> usize {
    let mut round = 0;
    let mut square = 0;
    let mut curly = 0;
    let mut single_quote = false;

    let mut previous_can_be_last = true;
    let mut end = 0;

    if !s.starts_with('/') {
        // No path follows; the URL ends with the authority.
        return 0;
    }

    for (i, c) in s.char_indices() {
        if url_hard_stop(c) {
            break;
        }
        if Some(c) == quote {
            // The matching quote from in front of the link.
            break;
        }
        let can_be_last = match c {
            '/' => previous_can_be_last,
            '(' => {
                round += 1;
                false
            }
            ')' => {
                round -= 1;
                if round < 0 {
                    break;
                }
                true
            }
            '[' => {
                square += 1;
                false
            }
            ']' => {
                square -= 1;
                if square < 0 {
                    break;
                }
                true
            }
            '{' => {
                curly += 1;
                false
            }
            '}' => {
                curly -= 1;
                if curly < 0 {
                    break;
                }
                true
            }
            '\'' => {
                // A single quote ends a URL only when paired, so `/it's`
                // stays whole and a lone trailing `'` is given back.
                single_quote = !single_quote;
                !single_quote
            }
            c if url_never_final(c) => false,
            _ => true,
        };
        if can_be_last {
            end = i + c.len_utf8();
        }
        previous_can_be_last = can_be_last;
    }

    end
}

#[cfg(test)]
mod tests {
    use super::{find_domain_start, find_scheme_start, find_url_end};

    #[test]
    fn scheme_start_requires_a_boundary() {
        assert_eq!(find_scheme_start("http"), Some((0, None)));
        assert_eq!(find_scheme_start("see http"), Some((4, None)));
        assert_eq!(find_scheme_start(".http"), Some((1, None)));
        assert_eq!(find_scheme_start("(https"), Some((1, None)));
        assert_eq!(find_scheme_start("HTTP"), Some((0, None)));
        assert_eq!(find_scheme_start("xhttp"), None);
        assert_eq!(find_scheme_start("1http"), None);
        assert_eq!(find_scheme_start("my-http"), None);
        assert_eq!(find_scheme_start("gopher"), None);
    }

    #[test]
    fn scheme_start_records_quotes() {
        assert_eq!(find_scheme_start("\"http"), Some((1, Some('"'))));
        assert_eq!(find_scheme_start("'https"), Some((1, Some('\''))));
    }

    #[test]
    fn domain_start_walks_back_one_label() {
        assert_eq!(find_domain_start("see example"), Some((4, None)));
        assert_eq!(find_domain_start("example"), Some((0, None)));
        assert_eq!(find_domain_start("foo-bar"), Some((0, None)));
        assert_eq!(find_domain_start("-foo"), None);
        assert_eq!(find_domain_start("foo-"), None);
        assert_eq!(find_domain_start("foo.bar"), None);
        assert_eq!(find_domain_start("a@b"), None);
        assert_eq!(find_domain_start("/www"), None);
    }

    #[test]
    fn url_end_gives_back_trailing_punctuation() {
        assert_eq!(find_url_end("/a.", None), 2);
        assert_eq!(find_url_end("/a(b)", None), 5);
        assert_eq!(find_url_end("/a)", None), 2);
        assert_eq!(find_url_end("/(", None), 1);
        assert_eq!(find_url_end("?x", None), 0);
        assert_eq!(find_url_end("/it's", None), 5);
        assert_eq!(find_url_end("/'", None), 1);
    }
}
