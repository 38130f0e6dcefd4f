//! Markdown quoting for ansible-doc prose.
//!
//! Plain text gets its underscores escaped so markdown renderers don't read
//! them as emphasis. Ansible's `C(...)` inline-code markup becomes a backtick
//! span whose content is left untouched.

use regex::Regex;
use std::sync::LazyLock;

// Non-greedy by construction: the content may not contain `)`.
static RE_CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"C\(([^)]*)\)").unwrap());

/// Quote a piece of ansible-doc text for markdown output.
///
/// `C(foo_bar) and baz_qux` → `` `foo_bar` and baz\_qux ``
///
/// An unterminated `C(` is not a code span; it is escaped like any other text.
pub fn markdown_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut last = 0;

    for caps in RE_CODE_SPAN.captures_iter(text) {
        let span = caps.get_match();
        out.push_str(&quote_fragment(&text[last..span.start()]));
        out.push('`');
        out.push_str(&caps[1]);
        out.push('`');
        last = span.end();
    }

    out.push_str(&quote_fragment(&text[last..]));
    out
}

/// Escape a plain-text fragment (no code spans).
fn quote_fragment(text: &str) -> String {
    text.replace('_', "\\_")
}
