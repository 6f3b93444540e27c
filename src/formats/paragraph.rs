use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

/// Blank-line separated paragraphs of `text`, each flowed onto a single line.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    BLANK_RUN_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.replace('\n', " "))
        .collect()
}
