//! Greedy word wrap at a fixed column budget.
//!
//! The published figure wraps box text at 28 columns, so widths are measured
//! in display columns rather than pixels.

use std::collections::VecDeque;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` so no returned line exceeds `max_cols` display columns.
///
/// Explicit `\n` breaks are honored first. A single word wider than the
/// budget is split mid-word rather than overflowing.
pub fn wrap_columns(text: &str, max_cols: usize) -> Vec<String> {
    let max_cols = max_cols.max(1);
    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        out.extend(wrap_line(line, max_cols));
    }
    if out.is_empty() {
        vec![String::new()]
    } else {
        out
    }
}

fn wrap_line(line: &str, max_cols: usize) -> Vec<String> {
    let mut tokens: VecDeque<&str> = line.split_whitespace().collect();
    let mut out: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut split_tail = String::new();

    while let Some(tok) = if split_tail.is_empty() {
        tokens.pop_front().map(|t| t.to_string())
    } else {
        Some(std::mem::take(&mut split_tail))
    } {
        let candidate = if cur.is_empty() {
            tok.clone()
        } else {
            format!("{cur} {tok}")
        };
        if UnicodeWidthStr::width(candidate.as_str()) <= max_cols {
            cur = candidate;
            continue;
        }

        if !cur.is_empty() {
            out.push(std::mem::take(&mut cur));
            // Re-process the token against the fresh line.
            split_tail = tok;
            continue;
        }

        // Token alone is too wide for an empty line; split by columns.
        let (head, tail) = split_token(&tok, max_cols);
        out.push(head);
        split_tail = tail;
    }

    if !cur.is_empty() {
        out.push(cur);
    }
    if out.is_empty() {
        vec![String::new()]
    } else {
        out
    }
}

fn split_token(tok: &str, max_cols: usize) -> (String, String) {
    let mut cols = 0usize;
    let mut split_at = 0usize;
    for (idx, ch) in tok.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + w > max_cols && idx > 0 {
            break;
        }
        cols += w;
        split_at = idx + ch.len_utf8();
        if cols >= max_cols {
            break;
        }
    }
    if split_at == 0 {
        split_at = tok.chars().next().map_or(0, |c| c.len_utf8());
    }
    (tok[..split_at].to_string(), tok[split_at..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    const OHM: &str = "Ohm's law governs the relationship between voltage V and \
                       current I in resistive circuit of resistance R. V = I x R. \
                       For example, if the a voltage of 12 volts is applied across \
                       a 3 Ohm resistance then the current will be 4 Amperes.";

    #[test]
    fn no_line_exceeds_the_budget() {
        for line in wrap_columns(OHM, 28) {
            assert!(
                UnicodeWidthStr::width(line.as_str()) <= 28,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn words_survive_the_wrap() {
        let rejoined = wrap_columns(OHM, 28).join(" ");
        let original = OHM.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, original);
    }

    #[test]
    fn explicit_breaks_are_kept() {
        assert_eq!(wrap_columns("Contiguous\nMasking", 28), ["Contiguous", "Masking"]);
    }

    #[test]
    fn long_word_is_split_not_overflowed() {
        let lines = wrap_columns("[MASKED_TEXT_SEGMENT_MARKER]", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 10);
        }
        assert_eq!(lines.concat(), "[MASKED_TEXT_SEGMENT_MARKER]");
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap_columns("a   b", 28), ["a b"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_columns("", 28), [""]);
    }
}
