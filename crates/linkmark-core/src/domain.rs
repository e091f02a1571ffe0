//! Authority parsing shared by the URL, bare-domain and email scanners.
//!
//! "Authority" as in RFC 3986 section 3.2, `[ userinfo "@" ] host [ ":" port ]`,
//! where the host is a registered name of dot-separated labels. Labels may
//! contain letters, digits, hyphens and non-ASCII characters; hyphens may
//! not sit at label edges and labels may not be empty.

/// A parsed authority at the start of a slice.
pub(crate) struct Authority {
    /// Byte offset just past the authority.
    pub(crate) end: usize,
    /// Offset of the dot in front of the final host label, if any.
    pub(crate) last_dot: Option<usize>,
    /// The host is digits and dots only (IPv4-looking).
    pub(crate) numeric_host: bool,
}

/// Scan an authority from the start of `s`. Returns `None` when the text
/// there does not look like a host at all, so the candidate dies instead
/// of linking things like `abc@v1.1`.
pub(crate) fn find_authority_end(
    s: &str,
    mut userinfo_allowed: bool,
    port_allowed: bool,
) -> Option<Authority> {
    let mut end = 0;

    let mut maybe_last_dot = None;
    let mut last_dot = None;
    let mut dot_allowed = false;
    let mut hyphen_allowed = false;
    let mut all_numeric = true;
    let mut valid_host = true;
    let mut host_ended = false;

    for (i, c) in s.char_indices() {
        let can_be_last = match c {
            'a'..='z' | 'A'..='Z' | '\u{80}'..=char::MAX => {
                dot_allowed = true;
                hyphen_allowed = true;
                last_dot = maybe_last_dot;
                all_numeric = false;
                if host_ended {
                    valid_host = false;
                }
                !host_ended
            }
            '0'..='9' => {
                dot_allowed = true;
                hyphen_allowed = true;
                last_dot = maybe_last_dot;
                if host_ended {
                    valid_host = false;
                }
                !host_ended
            }
            '-' => {
                // Can't start a label, e.g. `-b` in `a.-b.com`.
                if !hyphen_allowed {
                    valid_host = false;
                }
                // Can't end one either, e.g. `b-` in `a.b-.com`.
                dot_allowed = false;
                all_numeric = false;
                false
            }
            '.' => {
                if !dot_allowed {
                    // Empty label, e.g. `.example.com` or `a..com`.
                    host_ended = true;
                }
                dot_allowed = false;
                hyphen_allowed = false;
                maybe_last_dot = Some(i);
                false
            }
            '_' | '~' => {
                // Not valid in hostnames, and not delimiters either.
                valid_host = false;
                false
            }
            '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' => {
                // Sub-delimiters only ever appear in userinfo.
                host_ended = true;
                if !userinfo_allowed {
                    break;
                }
                false
            }
            ':' => {
                // Either still userinfo, or the start of a port.
                if !userinfo_allowed && !port_allowed {
                    break;
                }
                // Port digits must not advance the last dot.
                maybe_last_dot = last_dot;
                false
            }
            '@' => {
                if !userinfo_allowed {
                    // A second `@` can't be part of a valid authority.
                    return None;
                }
                // Everything so far was userinfo; start over on the host.
                userinfo_allowed = false;
                maybe_last_dot = None;
                last_dot = None;
                dot_allowed = false;
                hyphen_allowed = false;
                all_numeric = true;
                valid_host = true;
                host_ended = false;
                false
            }
            _ => break,
        };

        if can_be_last {
            end = i + c.len_utf8();
        }
    }

    if !valid_host || end == 0 {
        return None;
    }
    // A bare number without dots is not a host.
    if all_numeric && last_dot.is_none() {
        return None;
    }
    // Non-numeric hosts with a dot must end in something TLD-shaped.
    if !all_numeric {
        if let Some(last_dot) = last_dot {
            if !tld_shaped(&s[last_dot + 1..]) {
                return None;
            }
        }
    }

    Some(Authority {
        end,
        last_dot,
        numeric_host: all_numeric,
    })
}

/// A plausible top-level domain starts with at least two ASCII letters.
/// `com` and `org` pass, `1` (as in `v1.1`) and `c` (as in `e.g.`) do not.
fn tld_shaped(tld: &str) -> bool {
    tld.chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .count()
        >= 2
}

#[cfg(test)]
mod tests {
    use super::find_authority_end;

    #[test]
    fn plain_host() {
        let authority = find_authority_end("example.com/rest", false, true).expect("authority");
        assert_eq!(authority.end, "example.com".len());
        assert_eq!(authority.last_dot, Some("example".len()));
        assert!(!authority.numeric_host);
    }

    #[test]
    fn numeric_host_is_flagged() {
        let authority = find_authority_end("127.0.0.1/rest", false, true).expect("authority");
        assert_eq!(authority.end, "127.0.0.1".len());
        assert!(authority.numeric_host);
    }

    #[test]
    fn bare_number_is_rejected() {
        assert!(find_authority_end("8080", false, true).is_none());
    }

    #[test]
    fn version_number_is_rejected() {
        assert!(find_authority_end("v1.1", false, true).is_none());
    }

    #[test]
    fn userinfo_resets_the_host() {
        let authority = find_authority_end("user:pass@example.org/x", true, true).expect("authority");
        assert_eq!(authority.end, "user:pass@example.org".len());
    }

    #[test]
    fn port_keeps_the_host_dot() {
        let authority = find_authority_end("example.com:8080/x", false, true).expect("authority");
        assert_eq!(authority.end, "example.com:8080".len());
        assert_eq!(authority.last_dot, Some("example".len()));
    }
}
