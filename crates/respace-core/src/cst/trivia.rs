//! Trivia splitting for the Java CST
//!
//! Prefix text handed to the node factory (see [`super::make`]) is split into
//! whitespace and comment tokens here, so that every prefix in a tree has the
//! same shape no matter who built it:
//!
//! ```text
//! [Whitespace] (Comment [Whitespace])*
//! ```
//!
//! Splitting is lossless: concatenating the pieces gives back the input.
//!
//! # Example
//!
//! ```rust,ignore
//! use respace_core::cst::trivia::split_trivia;
//!
//! let pieces = split_trivia("\n\n    /** Docs */\n    ");
//! assert_eq!(pieces.len(), 3);
//! assert!(pieces[1].is_comment());
//! ```

use super::JavaSyntaxKind;

/// A single piece of trivia text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaPiece<'a> {
    /// The kind of trivia
    pub kind: JavaSyntaxKind,
    /// The text content
    pub text: &'a str,
}

impl<'a> TriviaPiece<'a> {
    /// Check if this is a comment
    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    /// Check if this is whitespace
    pub fn is_whitespace(&self) -> bool {
        self.kind == JavaSyntaxKind::Whitespace
    }

    /// Get the comment content (without the comment delimiters)
    pub fn comment_content(&self) -> Option<&'a str> {
        match self.kind {
            JavaSyntaxKind::LineComment => Some(self.text.trim_start_matches("//").trim()),
            JavaSyntaxKind::JavadocComment => Some(
                self.text
                    .trim_start_matches("/**")
                    .trim_end_matches("*/")
                    .trim(),
            ),
            JavaSyntaxKind::BlockComment => Some(
                self.text
                    .trim_start_matches("/*")
                    .trim_end_matches("*/")
                    .trim(),
            ),
            _ => None,
        }
    }
}

/// Split prefix text into whitespace and comment pieces
///
/// Text that is neither whitespace nor a comment ends up in a
/// [`JavaSyntaxKind::Code`] piece; the factory never produces such prefixes,
/// but splitting stays lossless for them.
pub fn split_trivia(text: &str) -> Vec<TriviaPiece<'_>> {
    let mut pieces = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let start = pos;
        let rest = &text[pos..];

        let kind = if rest.starts_with(char::is_whitespace) {
            pos += rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            JavaSyntaxKind::Whitespace
        } else if rest.starts_with("//") {
            // Line comments stop before the line break, which belongs to the
            // whitespace that follows
            pos += rest.find(&['\r', '\n'][..]).unwrap_or(rest.len());
            JavaSyntaxKind::LineComment
        } else if rest.starts_with("/*") {
            // An unterminated block comment runs to the end of the text
            pos += rest[2..].find("*/").map(|end| end + 4).unwrap_or(rest.len());
            if rest.starts_with("/**") && !rest.starts_with("/**/") {
                JavaSyntaxKind::JavadocComment
            } else {
                JavaSyntaxKind::BlockComment
            }
        } else {
            pos += rest
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c.is_whitespace() || c == '/')
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            JavaSyntaxKind::Code
        };

        pieces.push(TriviaPiece {
            kind,
            text: &text[start..pos],
        });
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<JavaSyntaxKind> {
        split_trivia(text).iter().map(|p| p.kind).collect()
    }

    #[test]
    fn test_plain_whitespace() {
        assert_eq!(kinds("\n\n    "), vec![JavaSyntaxKind::Whitespace]);
        assert!(split_trivia("").is_empty());
    }

    #[test]
    fn test_comment_with_suffix() {
        let pieces = split_trivia("\n    // note\n    ");
        assert_eq!(
            pieces.iter().map(|p| p.kind).collect::<Vec<_>>(),
            vec![
                JavaSyntaxKind::Whitespace,
                JavaSyntaxKind::LineComment,
                JavaSyntaxKind::Whitespace
            ]
        );
        assert_eq!(pieces[1].text, "// note");
        assert_eq!(pieces[2].text, "\n    ");
    }

    #[test]
    fn test_block_and_javadoc_comments() {
        assert_eq!(
            kinds("/*\n * Header\n */\n/** Docs */"),
            vec![
                JavaSyntaxKind::BlockComment,
                JavaSyntaxKind::Whitespace,
                JavaSyntaxKind::JavadocComment
            ]
        );
        assert_eq!(kinds("/**/"), vec![JavaSyntaxKind::BlockComment]);
    }

    #[test]
    fn test_split_is_lossless() {
        let text = " \t\n/* a */ // b\r\n  /** c */\n\n  stray ";
        let joined: String = split_trivia(text).iter().map(|p| p.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_comment_content_extraction() {
        let pieces = split_trivia("// Test comment\n/** Docs */\n/* Block */");
        assert_eq!(pieces[0].comment_content(), Some("Test comment"));
        assert_eq!(pieces[2].comment_content(), Some("Docs"));
        assert_eq!(pieces[4].comment_content(), Some("Block"));
        assert_eq!(pieces[1].comment_content(), None);
    }
}
