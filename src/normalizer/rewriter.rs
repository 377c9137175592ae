//! Line rewriting: applies the pattern table to one line of text.

use super::patterns::{TimePattern, TIME_PATTERNS};
use log::debug;
use std::ops::Range;

/// Result of rewriting a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    pub text: String,
    /// Expressions whose text changed to a canonical form
    pub rewritten: usize,
    /// Matches left verbatim because they did not convert
    pub rejected: usize,
}

/// Applies an ordered pattern table to lines of text
pub struct LineRewriter<'a> {
    patterns: &'a [TimePattern],
}

impl Default for LineRewriter<'static> {
    fn default() -> Self {
        Self { patterns: TIME_PATTERNS.as_slice() }
    }
}

impl<'a> LineRewriter<'a> {
    pub fn with_patterns(patterns: &'a [TimePattern]) -> Self {
        Self { patterns }
    }

    /// Rewrite every valid time expression in `line`.
    ///
    /// Patterns run in table order and each one scans the output of the
    /// previous ones. Spans already matched by an earlier pattern, whether
    /// rewritten or kept verbatim, are claimed: a later match overlapping a
    /// claim is skipped. Otherwise `8h en punto` would become `08:00 en punto`
    /// and then `08:00:00`.
    pub fn rewrite(&self, line: &str) -> RewrittenLine {
        let mut text = line.to_string();
        let mut claimed: Vec<Range<usize>> = Vec::new();
        let mut rewritten = 0;
        let mut rejected = 0;

        for pattern in self.patterns {
            let mut edits = Vec::new();

            for caps in pattern.regex.captures_iter(&text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                let range = whole.range();

                if claimed.iter().any(|span| span.start < range.end && range.start < span.end) {
                    debug!("Skipping '{}' ({}): already matched earlier", whole.as_str(), pattern.name);
                    continue;
                }

                let replacement = match pattern.convert(&caps) {
                    Ok(time) => {
                        let canonical = time.to_string();
                        // input already in canonical form is not a new rewrite
                        if canonical != whole.as_str() {
                            debug!("Rewriting '{}' ({}) -> {}", whole.as_str(), pattern.name, canonical);
                            rewritten += 1;
                        }
                        Some(canonical)
                    }
                    Err(reason) => {
                        debug!("Keeping '{}' ({}): {}", whole.as_str(), pattern.name, reason);
                        rejected += 1;
                        None
                    }
                };
                edits.push(Edit { range, replacement });
            }

            if !edits.is_empty() {
                let (next_text, next_claimed) = apply_edits(&text, &edits, &claimed);
                text = next_text;
                claimed = next_claimed;
            }
        }

        RewrittenLine { text, rewritten, rejected }
    }
}

/// A matched span and its canonical replacement, `None` when kept verbatim
struct Edit {
    range: Range<usize>,
    replacement: Option<String>,
}

impl Edit {
    fn new_len(&self) -> usize {
        self.replacement.as_ref().map_or(self.range.len(), String::len)
    }
}

/// Apply one pattern's edits and return the new text with every claimed span
/// (earlier ones and this pattern's) moved to its position in that text.
fn apply_edits(text: &str, edits: &[Edit], claimed: &[Range<usize>]) -> (String, Vec<Range<usize>>) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for edit in edits {
        out.push_str(&text[last..edit.range.start]);
        out.push_str(edit.replacement.as_deref().unwrap_or(&text[edit.range.clone()]));
        last = edit.range.end;
    }
    out.push_str(&text[last..]);

    // offsets never fall strictly inside an edit
    let shift = |pos: usize| {
        edits
            .iter()
            .filter(|edit| edit.range.end <= pos)
            .fold(pos, |acc, edit| acc + edit.new_len() - edit.range.len())
    };

    let mut spans: Vec<Range<usize>> = claimed.iter().map(|span| shift(span.start)..shift(span.end)).collect();
    spans.extend(edits.iter().map(|edit| {
        let start = shift(edit.range.start);
        start..start + edit.new_len()
    }));
    spans.sort_by_key(|span| span.start);

    (out, spans)
}

/// Rewrite one line with the default pattern table
pub fn rewrite_line(line: &str) -> String {
    LineRewriter::default().rewrite(line).text
}
