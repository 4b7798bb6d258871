//! Blank line arithmetic on whitespace text
//!
//! The whitespace before a node ends on the node's own line, so a span with
//! `n` line breaks holds `n - 1` blank lines. A span without any line break
//! has `-1`: the node starts on the line of the previous token.
//!
//! Operations return [`Cow::Borrowed`] exactly when they leave the span
//! unchanged, which lets callers skip rebuilding the tree.

use std::borrow::Cow;

/// Positions of the line breaks in a whitespace span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan<'a> {
    text: &'a str,
    newlines: Vec<usize>,
}

impl<'a> LineScan<'a> {
    pub fn new(text: &'a str) -> Self {
        let newlines = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { text, newlines }
    }

    /// Byte offsets of every `\n`
    pub fn newlines(&self) -> &[usize] {
        &self.newlines
    }

    pub fn blank_lines(&self) -> i64 {
        self.newlines.len() as i64 - 1
    }

    /// Whether line breaks are written as `\r\n`
    pub fn uses_crlf(&self) -> bool {
        self.text.contains("\r\n")
    }

    /// Where the retained tail starts when at most `max` blank lines may
    /// remain; `None` if the span is within the bound
    ///
    /// The tail starts at the line break that leaves exactly `max` blank
    /// lines, including the `\r` of a `\r\n` pair.
    pub fn cut_index(&self, max: u32) -> Option<usize> {
        let excess = self.blank_lines() - i64::from(max);
        if excess <= 0 {
            return None;
        }
        let offset = self.newlines[excess as usize];
        if offset > 0 && self.text.as_bytes()[offset - 1] == b'\r' {
            Some(offset - 1)
        } else {
            Some(offset)
        }
    }
}

/// Number of blank lines in `whitespace`, `-1` when it has no line break
pub fn blank_lines(whitespace: &str) -> i64 {
    LineScan::new(whitespace).blank_lines()
}

/// Drop leading lines until at most `max` blank lines remain
///
/// The last line, which holds the indentation of the code that follows, is
/// always kept.
pub fn cap_at(whitespace: &str, max: u32) -> Cow<'_, str> {
    match LineScan::new(whitespace).cut_index(max) {
        Some(cut) => Cow::Owned(whitespace[cut..].to_string()),
        None => Cow::Borrowed(whitespace),
    }
}

/// Prepend line breaks until at least `min` blank lines are present
///
/// A minimum of zero never changes anything, including a span without a line
/// break.
pub fn pad_to(whitespace: &str, min: u32) -> Cow<'_, str> {
    if min == 0 {
        return Cow::Borrowed(whitespace);
    }

    let scan = LineScan::new(whitespace);
    let missing = i64::from(min) - scan.blank_lines();
    if missing <= 0 {
        return Cow::Borrowed(whitespace);
    }

    let line_break = if scan.uses_crlf() { "\r\n" } else { "\n" };
    let mut padded = line_break.repeat(missing as usize);
    padded.push_str(whitespace);
    Cow::Owned(padded)
}

/// Text after the last line break, or all of `whitespace` if there is none
pub fn indent(whitespace: &str) -> &str {
    match whitespace.rfind('\n') {
        Some(newline) => &whitespace[newline + 1..],
        None => whitespace,
    }
}
