use memchr::{memchr, memchr2, memchr3};

use crate::email::EmailScanner;
use crate::scanner::Scanner;
use crate::span::{LinkKind, Span};
use crate::url::{DomainScanner, UrlScanner};

/// A link found in the input text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Link<'t> {
    text: &'t str,
    start: usize,
    end: usize,
    kind: LinkKind,
}

impl<'t> Link<'t> {
    /// Start byte offset of the link within the input.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End byte offset of the link (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// The range the link covers.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// The link text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// What kind of link this is.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }
}

/// A configured link finder.
///
/// The defaults find scheme URLs and email addresses. Scheme-less domains
/// are off by default because they are prone to false positives in prose
/// and have to be opted into with [`LinkFinder::allow_without_scheme`].
#[derive(Clone, Debug)]
pub struct LinkFinder {
    url: bool,
    domain: bool,
    email: bool,
    email_domain_must_have_dot: bool,
}

impl LinkFinder {
    pub fn new() -> Self {
        Self {
            url: true,
            domain: false,
            email: true,
            email_domain_must_have_dot: true,
        }
    }

    /// Also find bare domains such as `example.com` that carry no scheme.
    pub fn allow_without_scheme(&mut self, value: bool) -> &mut Self {
        self.domain = value;
        self
    }

    /// Require email domains to contain a dot. Pass `false` to also find
    /// addresses such as `root@localhost`.
    pub fn email_domain_must_have_dot(&mut self, value: bool) -> &mut Self {
        self.email_domain_must_have_dot = value;
        self
    }

    /// Restrict the finder to the given kinds only.
    pub fn kinds(&mut self, kinds: &[LinkKind]) -> &mut Self {
        self.url = false;
        self.domain = false;
        self.email = false;
        for kind in kinds {
            match kind {
                LinkKind::Url => self.url = true,
                LinkKind::Domain => self.domain = true,
                LinkKind::Email => self.email = true,
            }
        }
        self
    }

    /// Iterate over the links in `text`. Scanning is lazy; nothing is
    /// examined until the iterator is advanced.
    pub fn links<'t>(&self, text: &'t str) -> Links<'t> {
        Links::new(
            text,
            self.url,
            self.domain,
            self.email,
            self.email_domain_must_have_dot,
        )
    }

    /// Iterate over the whole of `text` as alternating plain and link
    /// segments, in order and without gaps, which is the shape a renderer
    /// wants to consume.
    pub fn segments<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments {
            links: self.links(text),
            position: 0,
            pending: None,
        }
    }
}

impl Default for LinkFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the links in a text, created by [`LinkFinder::links`].
pub struct Links<'t> {
    text: &'t str,
    rewind: usize,
    url: bool,
    domain: bool,
    email: bool,
    url_scanner: UrlScanner,
    domain_scanner: DomainScanner,
    email_scanner: EmailScanner,
}

impl<'t> Links<'t> {
    fn new(
        text: &'t str,
        url: bool,
        domain: bool,
        email: bool,
        email_domain_must_have_dot: bool,
    ) -> Self {
        Self {
            text,
            rewind: 0,
            url,
            domain,
            email,
            url_scanner: UrlScanner,
            domain_scanner: DomainScanner,
            email_scanner: EmailScanner {
                domain_must_have_dot: email_domain_must_have_dot,
            },
        }
    }

    /// Locate the next trigger byte for the enabled kinds: `:` for scheme
    /// URLs, `@` for emails, `.` for bare domains.
    fn find_trigger(&self, haystack: &[u8]) -> Option<usize> {
        match (self.url, self.email, self.domain) {
            (true, true, true) => memchr3(b':', b'@', b'.', haystack),
            (true, true, false) => memchr2(b':', b'@', haystack),
            (true, false, true) => memchr2(b':', b'.', haystack),
            (false, true, true) => memchr2(b'@', b'.', haystack),
            (true, false, false) => memchr(b':', haystack),
            (false, true, false) => memchr(b'@', haystack),
            (false, false, true) => memchr(b'.', haystack),
            (false, false, false) => None,
        }
    }
}

impl<'t> Iterator for Links<'t> {
    type Item = Link<'t>;

    fn next(&mut self) -> Option<Link<'t>> {
        // Only the text after the previous link is ever scanned again, so
        // accepted spans can't overlap and the pass stays linear.
        let slice = &self.text[self.rewind..];

        let mut find_from = 0;
        while let Some(i) = self.find_trigger(slice[find_from..].as_bytes()) {
            let trigger = find_from + i;
            let (scanner, kind): (&dyn Scanner, LinkKind) = match slice.as_bytes()[trigger] {
                b':' => (&self.url_scanner, LinkKind::Url),
                b'@' => (&self.email_scanner, LinkKind::Email),
                _ => (&self.domain_scanner, LinkKind::Domain),
            };
            if let Some(range) = scanner.scan(slice, trigger) {
                let start = self.rewind + range.start;
                let end = self.rewind + range.end;
                self.rewind = end;
                return Some(Link {
                    text: self.text,
                    start,
                    end,
                    kind,
                });
            }
            // Nothing anchored at this trigger; move past it and keep
            // looking.
            find_from = trigger + 1;
        }

        None
    }
}

/// One segment of the input: either plain text or exactly one link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segment<'t> {
    text: &'t str,
    start: usize,
    end: usize,
    kind: Option<LinkKind>,
}

impl<'t> Segment<'t> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// `Some` for a link segment, `None` for the plain text in between.
    pub fn kind(&self) -> Option<LinkKind> {
        self.kind
    }
}

/// Iterator over alternating plain and link segments, created by
/// [`LinkFinder::segments`]. Concatenating every segment reproduces the
/// input exactly.
pub struct Segments<'t> {
    links: Links<'t>,
    position: usize,
    pending: Option<Link<'t>>,
}

impl<'t> Iterator for Segments<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        let text = self.links.text;

        if let Some(link) = self.pending.take() {
            self.position = link.end();
            return Some(Segment {
                text,
                start: link.start(),
                end: link.end(),
                kind: Some(link.kind()),
            });
        }

        if self.position >= text.len() {
            return None;
        }

        match self.links.next() {
            Some(link) => {
                if link.start() > self.position {
                    let start = self.position;
                    let end = link.start();
                    self.pending = Some(link);
                    Some(Segment {
                        text,
                        start,
                        end,
                        kind: None,
                    })
                } else {
                    self.position = link.end();
                    Some(Segment {
                        text,
                        start: link.start(),
                        end: link.end(),
                        kind: Some(link.kind()),
                    })
                }
            }
            None => {
                let start = self.position;
                self.position = text.len();
                Some(Segment {
                    text,
                    start,
                    end: text.len(),
                    kind: None,
                })
            }
        }
    }
}
