use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Section, Transcript};

/// `Name (MM:SS)` with optional trailing whitespace; the timestamp group is the last one on the line.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+\((\d+:\d+)\)\s*$").expect("speaker header pattern is valid")
});

/// Returns `(speaker, timestamp)` when `line` announces a new speaker.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let caps = HEADER_RE.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

enum State<'a> {
    BeforeFirstHeader,
    InSection {
        speaker: &'a str,
        timestamp: &'a str,
        lines: Vec<&'a str>,
    },
}

impl State<'_> {
    fn finish(self, out: &mut Vec<Section>) {
        if let State::InSection {
            speaker,
            timestamp,
            lines,
        } = self
        {
            out.push(Section {
                speaker: speaker.to_string(),
                timestamp: timestamp.to_string(),
                text: lines.join("\n").trim().to_string(),
            });
        }
    }
}

/// Splits a transcript into speaker sections. Text before the first header is dropped.
pub fn parse_transcript(input: &str) -> Transcript {
    let mut sections = Vec::new();
    let mut state = State::BeforeFirstHeader;

    for line in input.lines() {
        if let Some((speaker, timestamp)) = parse_header(line) {
            let prev = std::mem::replace(
                &mut state,
                State::InSection {
                    speaker,
                    timestamp,
                    lines: Vec::new(),
                },
            );
            prev.finish(&mut sections);
            continue;
        }

        match &mut state {
            State::InSection { lines, .. } => lines.push(line),
            State::BeforeFirstHeader => {
                tracing::trace!(line, "dropping text before first speaker header");
            }
        }
    }

    state.finish(&mut sections);

    Transcript::new(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(speaker: &str, timestamp: &str, text: &str) -> Section {
        Section {
            speaker: speaker.to_string(),
            timestamp: timestamp.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn header_basic() {
        assert_eq!(parse_header("Alice (00:01)"), Some(("Alice", "00:01")));
        assert_eq!(
            parse_header("Apurva Mehta (12:34)  \t"),
            Some(("Apurva Mehta", "12:34"))
        );
        assert_eq!(parse_header("Host 2 (1:5)"), Some(("Host 2", "1:5")));
    }

    #[test]
    fn header_rejects_other_shapes() {
        assert_eq!(parse_header("Alice(00:01)"), None);
        assert_eq!(parse_header("Alice (00:01) and more"), None);
        assert_eq!(parse_header("Alice (1:02:03)"), None);
        assert_eq!(parse_header("Alice (00:01.451)"), None);
        assert_eq!(parse_header("(00:01)"), None);
        assert_eq!(parse_header("Alice (ab:cd)"), None);
        assert_eq!(parse_header("just some words"), None);
        assert_eq!(parse_header(""), None);
    }

    #[test]
    fn header_with_several_timestamps_uses_the_last() {
        assert_eq!(
            parse_header("Bob (aka B) (10:00) (10:05)"),
            Some(("Bob (aka B) (10:00)", "10:05"))
        );
    }

    #[test]
    fn two_speakers() {
        let t = parse_transcript("Alice (00:01)\nHello there.\n\nBob (00:05)\nHi Alice!");
        assert_eq!(
            t.sections,
            vec![
                section("Alice", "00:01", "Hello there."),
                section("Bob", "00:05", "Hi Alice!"),
            ]
        );
    }

    #[test]
    fn text_before_first_header_is_dropped() {
        let t = parse_transcript(
            "intro text with no header\nAlice (01:00)\nline one\nline two\n\nline three\n",
        );
        assert_eq!(
            t.sections,
            vec![section("Alice", "01:00", "line one\nline two\n\nline three")]
        );
    }

    #[test]
    fn no_headers_no_sections() {
        let t = parse_transcript("just talk\n\nmore talk (not a header)\n");
        assert!(t.is_empty());
        assert!(parse_transcript("").is_empty());
    }

    #[test]
    fn back_to_back_headers_give_empty_text() {
        let t = parse_transcript("Alice (00:01)\nBob (00:02)\nHi.\nCarol (00:03)\n\n  \n");
        assert_eq!(
            t.sections,
            vec![
                section("Alice", "00:01", ""),
                section("Bob", "00:02", "Hi."),
                section("Carol", "00:03", ""),
            ]
        );
    }

    #[test]
    fn only_block_edges_are_trimmed() {
        let t = parse_transcript("Alice (00:01)\n\n   first\n  indented\n\n\nlast   \n\n");
        assert_eq!(t.sections[0].text, "first\n  indented\n\n\nlast");
    }

    #[test]
    fn crlf_input() {
        let t = parse_transcript("Alice (00:01)\r\nHello.\r\nBob (00:05)\r\nHi.\r\n");
        assert_eq!(
            t.sections,
            vec![
                section("Alice", "00:01", "Hello."),
                section("Bob", "00:05", "Hi."),
            ]
        );
    }

    #[test]
    fn one_section_per_header_in_order() {
        let input = "noise\nA (0:1)\nx\nB (0:2)\nA (0:3)\ny\nz\nC (9:59)\nnot (a:header)\n";
        let headers: Vec<(&str, &str)> = input.lines().filter_map(parse_header).collect();
        let t = parse_transcript(input);

        assert_eq!(t.sections.len(), headers.len());
        let got: Vec<(&str, &str)> = t
            .sections
            .iter()
            .map(|s| (s.speaker.as_str(), s.timestamp.as_str()))
            .collect();
        assert_eq!(got, headers);
        assert_eq!(t.sections[3].text, "not (a:header)");
    }
}
