use std::panic;

use linkmark_core::{LinkFinder, linkify, render_html};

const CASES: usize = 300;
const MAX_LEN: usize = 512;
const CHARSET: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '1', '9', ' ', '\n', '\t', ':', '@', '.', '/',
    '(', ')', '[', ']', '{', '}', '<', '>', '"', '\'', ',', ';', '!', '?', '-', '_', '+', '=',
    '%', '&', '#', '~', '|', '`', 'ä', 'ü', '🦀',
];

#[test]
fn linkify_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5eed_1234_abcd_0001);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let result = panic::catch_unwind(|| {
            linkify(&source, true);
            linkify(&source, false);
        });
        if result.is_err() {
            return Err(format!("linkify panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn links_are_ordered_and_on_char_boundaries() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5eed_1234_abcd_0002);
    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(true);

    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let mut prev_end = 0;
        for link in finder.links(&source) {
            if link.start() >= link.end() || link.end() > source.len() {
                return Err(format!(
                    "case {}: bad span {}..{} in {:?}",
                    case,
                    link.start(),
                    link.end(),
                    source
                )
                .into());
            }
            if link.start() < prev_end {
                return Err(format!(
                    "case {}: overlapping span {}..{} after {} in {:?}",
                    case,
                    link.start(),
                    link.end(),
                    prev_end,
                    source
                )
                .into());
            }
            if !source.is_char_boundary(link.start()) || !source.is_char_boundary(link.end()) {
                return Err(format!(
                    "case {}: span {}..{} splits a codepoint in {:?}",
                    case,
                    link.start(),
                    link.end(),
                    source
                )
                .into());
            }
            prev_end = link.end();
        }
    }
    Ok(())
}

#[test]
fn segments_cover_the_input_exactly() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5eed_1234_abcd_0003);
    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(true);

    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let mut rebuilt = String::new();
        for segment in finder.segments(&source) {
            rebuilt.push_str(segment.as_str());
        }
        if rebuilt != source {
            return Err(format!("case {}: segments did not cover {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn anchor_count_equals_link_count_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5eed_1234_abcd_0004);
    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(true);

    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let links = finder.links(&source).count();
        // Raw `<` in the input escapes to `&lt;`, so every `<a href=` in
        // the output comes from an anchor the renderer emitted.
        let anchors = render_html(&source, &finder).matches("<a href=").count();
        if links != anchors {
            return Err(format!(
                "case {}: {} links but {} anchors for {:?}",
                case, links, anchors, source
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn large_repetitive_input_completes() {
    let pattern = "Visit https://example.com/a(b), mail foo@example.org; see example.com/x. ";
    let source = pattern.repeat(2000);

    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(true);
    assert_eq!(finder.links(&source).count(), 3 * 2000);

    let finder = LinkFinder::new();
    assert_eq!(finder.links(&source).count(), 2 * 2000);
}

#[test]
fn pathological_trigger_runs_complete() {
    let finder = LinkFinder::new();
    for source in [
        ":".repeat(50_000),
        "@".repeat(50_000),
        ".".repeat(50_000),
        "://".repeat(20_000),
        "a@".repeat(20_000),
    ] {
        assert_eq!(finder.links(&source).count(), 0);
    }

    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(true);
    assert_eq!(finder.links(&".a".repeat(20_000)).count(), 0);
}

#[test]
fn unbalanced_brackets_stay_bounded() {
    let mut open = String::from("http://example.org/a");
    open.push_str(&"(".repeat(10_000));
    let finder = LinkFinder::new();
    let links: Vec<_> = finder.links(&open).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].as_str(), "http://example.org/a");

    let mut close = String::from("http://example.org/a");
    close.push_str(&")".repeat(10_000));
    let links: Vec<_> = finder.links(&close).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].as_str(), "http://example.org/a");
}

#[test]
fn unterminated_scheme_at_end_of_input() {
    let finder = LinkFinder::new();
    assert_eq!(finder.links("trailing http").count(), 0);
    assert_eq!(finder.links("trailing http:").count(), 0);
    assert_eq!(finder.links("trailing http:/").count(), 0);
    assert_eq!(finder.links("trailing http://").count(), 0);
}

fn random_string(rng: &mut Lcg, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, CHARSET.len());
        out.push(CHARSET.get(idx).copied().unwrap_or(' '));
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}
