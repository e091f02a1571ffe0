use linkmark_core::LinkFinder;

/// Assert that `input` contains exactly the links marked with `|...|` in
/// `expected`.
pub fn assert_linked_with(finder: &LinkFinder, input: &str, expected: &str) {
    assert_eq!(show_links(input, finder), expected, "input: {:?}", input);
}

pub fn show_links(input: &str, finder: &LinkFinder) -> String {
    let mut result = String::new();
    for segment in finder.segments(input) {
        if segment.kind().is_some() {
            result.push('|');
            result.push_str(segment.as_str());
            result.push('|');
        } else {
            result.push_str(segment.as_str());
        }
    }
    result
}
