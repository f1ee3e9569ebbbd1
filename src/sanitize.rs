// Text cleanup for answers returned by the remote agent service

/// Normalize answer text returned by a FutureHouse job.
///
/// Keeps only printable ASCII characters (plus whitespace), collapses every
/// maximal run of whitespace into a single space, and trims the ends.
/// Total and idempotent: `sanitize(&sanitize(x)) == sanitize(x)` for all
/// inputs.
pub fn sanitize(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|c| c.is_ascii() && (c.is_ascii_graphic() || c.is_whitespace()))
        .collect();

    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(sanitize("a\t\tb\n\nc"), "a b c");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(sanitize("  hello world \n"), "hello world");
    }

    #[test]
    fn test_removes_control_characters() {
        assert_eq!(sanitize("an\u{0}sw\u{1b}er"), "answer");
    }

    #[test]
    fn test_removes_non_ascii() {
        assert_eq!(sanitize("caf\u{e9} r\u{e9}sum\u{e9}"), "caf rsum");
    }

    #[test]
    fn test_vertical_tab_collapses_to_space() {
        assert_eq!(sanitize("a\u{b}b"), "a b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_clean_input_unchanged() {
        assert_eq!(sanitize("already clean"), "already clean");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["a\t\tb\n\nc", "  x  ", "", "plain", "m\u{0}ix\ted \u{e9}"];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
