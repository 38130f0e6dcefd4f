//! Greedy word wrapping for bullet lists and paragraphs.

/// Terminal width used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 70;

/// Break `text` into lines of at most `width` characters, indent included.
///
/// The first line is prefixed with `initial_indent`, every following line with
/// `subsequent_indent`. Runs of whitespace collapse to a single space and lines
/// only break between words; a word longer than the available room gets a line
/// of its own. Empty or whitespace-only text yields no lines.
pub fn wrap(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_word = false;

    for word in words(text) {
        let word_len = word.chars().count();

        if has_word && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if has_word {
            lines.push(std::mem::take(&mut current));
        }

        let indent = if lines.is_empty() {
            initial_indent
        } else {
            subsequent_indent
        };
        current.push_str(indent);
        current.push_str(word);
        current_len = indent.chars().count() + word_len;
        has_word = true;
    }

    if has_word {
        lines.push(current);
    }
    lines
}

/// Split on ASCII whitespace only, so non-breaking spaces keep words together.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(
            wrap("python >= 3.6", DEFAULT_WIDTH, "- ", "  "),
            vec!["- python >= 3.6"]
        );
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap("", DEFAULT_WIDTH, "- ", "  ").is_empty());
        assert!(wrap(" \n\t ", DEFAULT_WIDTH, "- ", "  ").is_empty());
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("aaa bbb ccc ddd", 8, "", ""),
            vec!["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn width_counts_indent() {
        assert_eq!(
            wrap("aaa bbb ccc", 9, "- ", "  "),
            vec!["- aaa bbb", "  ccc"]
        );
    }

    #[test]
    fn line_may_fill_width_exactly() {
        let lines = wrap("abcd efgh", 9, "", "");
        assert_eq!(lines, vec!["abcd efgh"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        assert_eq!(
            wrap("a verylongwordindeed b", 6, "", ""),
            vec!["a", "verylongwordindeed", "b"]
        );
    }

    #[test]
    fn long_first_word_uses_initial_indent() {
        assert_eq!(
            wrap("https://example.com/a/long/path x", 10, "  - ", "    "),
            vec!["  - https://example.com/a/long/path", "    x"]
        );
    }

    #[test]
    fn hyphens_are_not_break_points() {
        assert_eq!(
            wrap("one well-known thing", 12, "", ""),
            vec!["one", "well-known", "thing"]
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(wrap("a   b\n\nc\td", 70, "", ""), vec!["a b c d"]);
    }

    #[test]
    fn non_breaking_space_keeps_words_together() {
        assert_eq!(wrap("a\u{a0}b c", 3, "", ""), vec!["a\u{a0}b", "c"]);
    }

    #[test]
    fn width_is_measured_in_characters() {
        assert_eq!(wrap("äöü äöü", 7, "", ""), vec!["äöü äöü"]);
    }

    #[test]
    fn rejoining_reproduces_word_sequence() {
        let text = "The quick  brown fox jumps over the lazy dog and keeps on running \
                    until the   end of the paragraph is finally reached.";
        let lines = wrap(text, 20, "- ", "  ");
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        let rejoined: Vec<&str> = lines
            .iter()
            .map(|l| l.trim_start_matches("- ").trim_start())
            .collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined.join(" "), expected.join(" "));
    }
}
