//! Text normalization for narrative reports
//!
//! Upstream analysis services decorate their narratives with lightweight
//! markup (emphasis markers, table separators, bullets). Downstream
//! pattern matching wants plain prose, so normalization runs two
//! sequenced passes:
//!
//! 1. [`strip_markup`] removes paired emphasis delimiters and structural
//!    markers (tables, rules, headings, blockquotes, code spans).
//! 2. [`strip_decoration`] removes decorative punctuation characters.
//!
//! Both passes are pure and total. The decoration pass is deliberately
//! lossy, with one guard: hyphens, colons and slashes between digits are
//! preserved so numeric ranges ("90-120"), times ("12:30") and blood
//! pressure readings ("120/80") survive.

use regex::Regex;
use std::sync::LazyLock;

// Paired emphasis delimiters, longest markers first so "**" wins over "*".
static EMPHASIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\*\*(.+?)\*\*", // bold
        r"\*(.+?)\*",     // italic
        r"__(.+?)__",     // underline
        r"_(.+?)_",       // emphasis
        r"\+\+(.+?)\+\+", // inserted
        r"~~(.+?)~~",     // strikethrough
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid emphasis pattern"))
    .collect()
});

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{3,}").expect("valid horizontal rule pattern"));

static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));

/// Decorative punctuation removed by the second pass. Hyphens and colons
/// are handled separately because of the digit-adjacency guard.
const DECORATIVE_CHARS: &[char] = &['*', '+', '=', '(', ')', '[', ']', '{', '}', '\u{2022}'];

/// Characters kept when they sit between two digits
const DIGIT_GUARDED_CHARS: &[char] = &['-', ':'];

/// Removes lightweight markup from a narrative
///
/// Paired emphasis delimiters are unwrapped (the enclosed text is kept),
/// table separators, horizontal rules, heading/blockquote/code markers
/// are dropped, and runs of blank lines collapse to a single blank line.
pub fn strip_markup(text: &str) -> String {
    let mut out = text.to_string();

    for pattern in EMPHASIS_PATTERNS.iter() {
        out = pattern.replace_all(&out, "$1").into_owned();
    }

    out = HORIZONTAL_RULE.replace_all(&out, "").into_owned();
    out = out.replace(['|', '#', '>', '`'], "");
    out = BLANK_LINE_RUNS.replace_all(&out, "\n\n").into_owned();

    out
}

/// Removes decorative punctuation from a narrative
///
/// Colons and hyphens between two digits are preserved; everything else
/// in the decorative set is dropped unconditionally. This is lossy by
/// contract: punctuation that carried meaning in prose does not survive.
pub fn strip_decoration(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if DECORATIVE_CHARS.contains(&c) {
            continue;
        }
        if DIGIT_GUARDED_CHARS.contains(&c) {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if prev_digit && next_digit {
                out.push(c);
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Normalizes a raw narrative for pattern matching
///
/// Runs [`strip_markup`] then [`strip_decoration`]. Idempotent: a second
/// pass over normalized text is a no-op.
pub fn normalize(raw: &str) -> String {
    strip_decoration(&strip_markup(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_strip_markup_emphasis() {
        assert_eq!(strip_markup("**bold** and *italic*"), "bold and italic");
        assert_eq!(strip_markup("__under__ and _emph_"), "under and emph");
        assert_eq!(strip_markup("~~gone~~ ++ins++"), "gone ins");
    }

    #[test]
    fn test_strip_markup_structure() {
        assert_eq!(strip_markup("# Heading\n> quote\n`code`"), " Heading\n quote\ncode");
        assert_eq!(strip_markup("a | b | c"), "a  b  c");
        assert_eq!(strip_markup("before\n---\nafter"), "before\n\nafter");
    }

    #[test]
    fn test_strip_markup_collapses_blank_lines() {
        assert_eq!(strip_markup("a\n\n\n\nb"), "a\n\nb");
        // A single blank line is left alone
        assert_eq!(strip_markup("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_strip_decoration_removes_punctuation() {
        assert_eq!(
            strip_decoration("Result: positive (confirmed) [note]"),
            "Result positive confirmed note"
        );
        assert_eq!(strip_decoration("a + b = c"), "a  b  c");
        assert_eq!(strip_decoration("\u{2022} item"), " item");
    }

    #[test]
    fn test_strip_decoration_preserves_numeric_ranges() {
        // Hyphens/colons between digits carry meaning and must survive
        assert_eq!(strip_decoration("range 90-120 at 12:30"), "range 90-120 at 12:30");
        // Non-numeric hyphens are decorative
        assert_eq!(strip_decoration("follow-up"), "followup");
    }

    #[test]
    fn test_blood_pressure_survives() {
        assert_eq!(normalize("BP: 120/80 mmHg"), "BP 120/80 mmHg");
    }

    #[rstest]
    #[case("**Assessment:** positive")]
    #[case("# Report\n\n\n- item (one)\n---")]
    #[case("plain prose stays plain prose")]
    #[case("")]
    #[case("90-120 and 12:30")]
    fn test_normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_is_total_on_junk() {
        // Pure punctuation, non-English text and empty input all pass
        assert_eq!(normalize("***[]{}()++~~"), "~~");
        let cyrillic = normalize("Результат положительный");
        assert_eq!(cyrillic, "Результат положительный");
        assert_eq!(normalize(""), "");
    }
}
