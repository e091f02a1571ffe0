//! Email scanning around an `@` trigger.

use std::ops::Range;

use crate::classify::local_atom;
use crate::domain::find_authority_end;
use crate::scanner::Scanner;

/// Scans for the common `local@domain.tld` shape. Quoted local parts and
/// IP-literal domains are out of scope; an address the scanner rejects is
/// simply left as plain text.
pub(crate) struct EmailScanner {
    pub(crate) domain_must_have_dot: bool,
}

impl Scanner for EmailScanner {
    fn scan(&self, s: &str, at: usize) -> Option<Range<usize>> {
        let start = self.find_start(&s[..at])?;
        let after = at + 1;
        let end = self.find_end(&s[after..])?;
        Some(start..after + end)
    }
}

impl EmailScanner {
    /// Walk left over local-part atoms; dots may only join two atoms, so
    /// in `a..b@example.com` the local part is just `b`.
    fn find_start(&self, s: &str) -> Option<usize> {
        let mut first = None;
        let mut atom_boundary = true;
        for (i, c) in s.char_indices().rev() {
            if local_atom(c) {
                first = Some(i);
                atom_boundary = false;
            } else if c == '.' {
                if atom_boundary {
                    break;
                }
                atom_boundary = true;
            } else if c == '@' {
                // `@me@a.com` is a mention followed by noise, not `me@a.com`.
                return None;
            } else {
                break;
            }
        }
        first
    }

    /// Walk right over the domain: host only, no userinfo, no port, so
    /// `foo@example.org;hi@example.org` splits cleanly at the `;`.
    fn find_end(&self, s: &str) -> Option<usize> {
        let authority = find_authority_end(s, false, false)?;
        if authority.numeric_host {
            return None;
        }
        if self.domain_must_have_dot && authority.last_dot.is_none() {
            return None;
        }
        Some(authority.end)
    }
}
