//! Views over runs of trivia tokens
//!
//! A [`Space`] is the whitespace and comments a node owns before its first
//! significant token (its prefix), or the trivia before a block's closing
//! brace (the block's end). Every run has the shape
//!
//! ```text
//! [Whitespace] (Comment [Whitespace])*
//! ```
//!
//! The leading `Whitespace` is what [`Space::whitespace`] returns; the
//! whitespace after a comment is that comment's suffix. Editing methods
//! return the rebuilt owner node, or `None` when the edit changes nothing, so
//! callers can keep the original allocation on a no-op.

use std::borrow::Cow;

use rowan::{GreenNode, NodeOrToken};

use super::{GreenNodeData, GreenTokenData, JavaSyntaxKind, ast::element_kind, make};

/// A comment inside a trivia run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    /// Position of the comment token among the owner's children
    pub index: usize,
    pub kind: JavaSyntaxKind,
    pub text: &'a str,
    /// Whitespace between this comment and whatever follows it
    pub suffix: &'a str,
}

/// A run of trivia tokens owned by `node`, spanning children `start..end`
#[derive(Debug, Clone, Copy)]
pub struct Space<'a> {
    node: &'a GreenNodeData,
    start: usize,
    end: usize,
}

impl<'a> Space<'a> {
    /// Leading trivia of `node`
    pub fn prefix(node: &'a GreenNodeData) -> Self {
        let end = node
            .children()
            .take_while(|&child| element_kind(child).is_trivia())
            .count();
        Self { node, start: 0, end }
    }

    /// Trivia before the closing brace of a block; `None` if there is no brace
    pub fn before_closing(node: &'a GreenNodeData) -> Option<Self> {
        let children: Vec<_> = node.children().collect();
        let end = children
            .iter()
            .rposition(|&child| element_kind(child) == JavaSyntaxKind::RBrace)?;
        let trivia = children[..end]
            .iter()
            .rev()
            .take_while(|&&child| element_kind(child).is_trivia())
            .count();
        Some(Self {
            node,
            start: end - trivia,
            end,
        })
    }

    /// The node owning this run
    pub fn owner(&self) -> &'a GreenNodeData {
        self.node
    }

    fn tokens(&self) -> impl Iterator<Item = (usize, &'a GreenTokenData)> + '_ {
        self.node
            .children()
            .enumerate()
            .skip(self.start)
            .take(self.end - self.start)
            .filter_map(|(index, child)| child.into_token().map(|token| (index, token)))
    }

    fn token_kind(token: &GreenTokenData) -> JavaSyntaxKind {
        element_kind(NodeOrToken::Token(token))
    }

    fn whitespace_at(&self, index: usize) -> Option<&'a str> {
        if index >= self.end {
            return None;
        }
        self.node
            .children()
            .nth(index)
            .and_then(NodeOrToken::into_token)
            .filter(|token| Self::token_kind(token) == JavaSyntaxKind::Whitespace)
            .map(GreenTokenData::text)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whitespace before the first comment, `""` if there is none
    pub fn whitespace(&self) -> &'a str {
        self.whitespace_at(self.start).unwrap_or("")
    }

    pub fn comments(&self) -> Vec<Comment<'a>> {
        self.tokens()
            .filter(|(_, token)| Self::token_kind(token).is_comment())
            .map(|(index, token)| Comment {
                index,
                kind: Self::token_kind(token),
                text: token.text(),
                suffix: self.whitespace_at(index + 1).unwrap_or(""),
            })
            .collect()
    }

    pub fn last_comment(&self) -> Option<Comment<'a>> {
        self.comments().pop()
    }

    pub fn has_comments(&self) -> bool {
        self.tokens()
            .any(|(_, token)| Self::token_kind(token).is_comment())
    }

    /// Whitespace right before the code: the last comment's suffix, or the
    /// leading whitespace when there are no comments
    pub fn adjacent_whitespace(&self) -> &'a str {
        match self.last_comment() {
            Some(comment) => comment.suffix,
            None => self.whitespace(),
        }
    }

    /// Indentation of the line the code starts on
    pub fn indent(&self) -> &'a str {
        let whitespace = self.adjacent_whitespace();
        match whitespace.rfind('\n') {
            Some(newline) => &whitespace[newline + 1..],
            None => whitespace,
        }
    }

    /// Replace the leading whitespace
    pub fn with_whitespace(&self, whitespace: &str) -> Option<GreenNode> {
        self.set_whitespace_at(self.start, whitespace)
    }

    pub fn map_whitespace<F>(&self, f: F) -> Option<GreenNode>
    where
        F: FnOnce(&'a str) -> Cow<'a, str>,
    {
        match f(self.whitespace()) {
            Cow::Borrowed(_) => None,
            Cow::Owned(whitespace) => self.with_whitespace(&whitespace),
        }
    }

    /// Rewrite the suffix of the last comment; `None` if there is no comment
    /// or the suffix stays the same
    pub fn map_last_comment_suffix<F>(&self, f: F) -> Option<GreenNode>
    where
        F: FnOnce(&'a str) -> Cow<'a, str>,
    {
        let comment = self.last_comment()?;
        match f(comment.suffix) {
            Cow::Borrowed(_) => None,
            Cow::Owned(suffix) => self.set_whitespace_at(comment.index + 1, &suffix),
        }
    }

    /// Set the whitespace token expected at `index`, inserting or removing it
    /// when the run has none there or the new text is empty
    fn set_whitespace_at(&self, index: usize, whitespace: &str) -> Option<GreenNode> {
        match self.whitespace_at(index) {
            Some(current) if current == whitespace => None,
            Some(_) if whitespace.is_empty() => Some(self.node.remove_child(index)),
            Some(_) => Some(
                self.node
                    .replace_child(index, NodeOrToken::Token(make::whitespace(whitespace))),
            ),
            None if whitespace.is_empty() => None,
            None => Some(
                self.node
                    .insert_child(index, NodeOrToken::Token(make::whitespace(whitespace))),
            ),
        }
    }
}

impl std::fmt::Display for Space<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, token) in self.tokens() {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}
