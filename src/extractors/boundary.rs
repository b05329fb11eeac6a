// src/extractors/boundary.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Boundary Matching (Lazy Static) ---

// Pattern 1 (strict): a line containing only the word "abstract",
// anchored to line start/end, immediately followed by a line break.
static ABSTRACT_STRICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*abstract[ \t]*\r?\n")
        .expect("Failed to compile ABSTRACT_STRICT_RE")
});

// Pattern 2 (loose, fallback only): the word "abstract" anywhere,
// followed by optional horizontal whitespace and a line break.
static ABSTRACT_LOOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\babstract\b[ \t]*\r?\n")
        .expect("Failed to compile ABSTRACT_LOOSE_RE")
});

// The References block:
//   References
//   This article references <NUMBER> other publications.
// Blank lines are allowed between the two lines; the number is captured
// but unused.
static REFERENCES_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*references[ \t]*\r?\n\s*this\s+article\s+references\s+(\d+)\s+other\s+publications\.",
    )
    .expect("Failed to compile REFERENCES_BLOCK_RE")
});

// A single leading blank line (horizontal whitespace + line break at the
// very start of the slice).
static LEADING_BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*\r?\n").expect("Failed to compile LEADING_BLANK_LINE_RE")
});

/// Extracts the article body between an "Abstract" heading and the
/// "References" block.
///
/// - If both markers are found and Abstract precedes References, returns
///   the text between them.
/// - If only one marker is found, returns the corresponding half.
/// - If neither is found, returns the input unchanged (modulo trimming).
///
/// Pure function: no I/O, no state, deterministic for a given input.
pub fn condense(text: &str) -> String {
    // Strict standalone heading first, then the looser fallback. The two
    // patterns are tried in fixed priority order, never combined.
    let abstract_after = ABSTRACT_STRICT_RE
        .find(text)
        .or_else(|| ABSTRACT_LOOSE_RE.find(text))
        .map(|m| m.end());

    let references_start = REFERENCES_BLOCK_RE.find(text).map(|m| m.start());

    let result = match (abstract_after, references_start) {
        (Some(after), Some(start)) if after < start => &text[after..start],
        // Inverted order: the intersection is empty, so the References
        // boundary is ignored and everything after Abstract is kept.
        // Suspect behavior, preserved for compatibility (see DESIGN.md).
        (Some(after), Some(_)) => &text[after..],
        (Some(after), None) => &text[after..],
        (None, Some(start)) => &text[..start],
        (None, None) => text,
    };

    // Drop at most one leading blank line, then trim surrounding
    // newlines and spaces.
    let result = LEADING_BLANK_LINE_RE.replace(result, "");
    result
        .trim_matches(|c: char| c == '\n' || c == '\r' || c == ' ')
        .to_string()
}
