//! Tree rewriting over immutable green trees
//!
//! A rewrite is a single post-order walk: the children of a node are
//! rewritten first, the node is rebuilt only if one of them changed, and then
//! the [`TreeRewriter`] method for the node's kind gets a chance to replace
//! it. Untouched subtrees are shared between the input and the output tree,
//! and a rewrite that changes nothing returns the input allocation.
//!
//! Rewriters see their ancestors through a [`Cursor`], an explicit stack
//! maintained by the walker.
//!
//! # Example
//!
//! ```rust,ignore
//! use respace_core::cst::rewrite::{rewrite, Cursor, TreeRewriter};
//!
//! struct DropBlankLinesInBlocks;
//!
//! impl TreeRewriter for DropBlankLinesInBlocks {
//!     fn visit_statement(&mut self, node: &GreenNodeData, _: &Cursor<'_>) -> Option<GreenNode> {
//!         Space::prefix(node).with_whitespace("\n")
//!     }
//! }
//!
//! let formatted = rewrite(&unit, &mut DropBlankLinesInBlocks);
//! ```

use rowan::{GreenNode, NodeOrToken};

use super::{
    GreenElement, GreenNodeData, JavaSyntaxKind,
    ast::{child_node, node_kind},
    to_owned_element,
};

/// Per-kind hooks of a rewrite
///
/// Each method receives the node with its children already rewritten and
/// returns a replacement, or `None` to keep it.
pub trait TreeRewriter {
    fn visit_compilation_unit(
        &mut self,
        _node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        None
    }

    fn visit_class_decl(
        &mut self,
        _node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        None
    }

    fn visit_method_decl(
        &mut self,
        _node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        None
    }

    fn visit_new_class(
        &mut self,
        _node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        None
    }

    fn visit_block(&mut self, _node: &GreenNodeData, _cursor: &Cursor<'_>) -> Option<GreenNode> {
        None
    }

    /// Called for every node sitting directly in a block, after the method
    /// for its own kind
    fn visit_statement(
        &mut self,
        _node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        None
    }
}

/// Ancestors of the node being visited, root first
#[derive(Debug, Default, Clone)]
pub struct Cursor<'a> {
    stack: Vec<&'a GreenNodeData>,
}

impl<'a> Cursor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: &'a GreenNodeData) {
        self.stack.push(node);
    }

    pub fn pop(&mut self) -> Option<&'a GreenNodeData> {
        self.stack.pop()
    }

    pub fn parent(&self) -> Option<&'a GreenNodeData> {
        self.stack.last().copied()
    }

    pub fn grandparent(&self) -> Option<&'a GreenNodeData> {
        self.ancestors().nth(1)
    }

    /// Ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = &'a GreenNodeData> + '_ {
        self.stack.iter().rev().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn parent_kind(&self) -> Option<JavaSyntaxKind> {
        self.parent().map(node_kind)
    }
}

/// Successive edits of one node
///
/// Keeps the original until the first edit that changes something, so a
/// chain of no-op edits never allocates.
#[derive(Debug)]
pub struct NodeEdit<'a> {
    original: &'a GreenNodeData,
    current: Option<GreenNode>,
}

impl<'a> NodeEdit<'a> {
    pub fn new(original: &'a GreenNodeData) -> Self {
        Self {
            original,
            current: None,
        }
    }

    /// The node with every edit so far applied
    pub fn current(&self) -> &GreenNodeData {
        self.current.as_deref().unwrap_or(self.original)
    }

    pub fn is_changed(&self) -> bool {
        self.current.is_some()
    }

    /// Apply an edit; returns whether it changed the node
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&GreenNodeData) -> Option<GreenNode>,
    {
        match f(self.current()) {
            Some(node) => {
                self.current = Some(node);
                true
            }
            None => false,
        }
    }

    /// Apply an edit to the child node at `index`
    pub fn update_child<F>(&mut self, index: usize, f: F) -> bool
    where
        F: FnOnce(&GreenNodeData) -> Option<GreenNode>,
    {
        self.update(|node| map_child(node, index, f))
    }

    /// The edited node, or `None` if no edit changed anything
    pub fn into_changed(self) -> Option<GreenNode> {
        self.current
    }
}

/// Replace the child node at `index` with `f(child)`, if `f` changes it
pub fn map_child<F>(node: &GreenNodeData, index: usize, f: F) -> Option<GreenNode>
where
    F: FnOnce(&GreenNodeData) -> Option<GreenNode>,
{
    let child = child_node(node, index)?;
    let replacement = f(child)?;
    Some(node.replace_child(index, NodeOrToken::Node(replacement)))
}

/// Rewrite a tree, returning `root` itself when nothing changed
pub fn rewrite<R: TreeRewriter + ?Sized>(root: &GreenNode, rewriter: &mut R) -> GreenNode {
    let mut cursor = Cursor::new();
    rewrite_node(root, rewriter, &mut cursor).unwrap_or_else(|| root.clone())
}

fn rewrite_node<'a, R: TreeRewriter + ?Sized>(
    node: &'a GreenNodeData,
    rewriter: &mut R,
    cursor: &mut Cursor<'a>,
) -> Option<GreenNode> {
    let mut edit = NodeEdit::new(node);
    if let Some(rebuilt) = rewrite_children(node, rewriter, cursor) {
        edit.update(|_| Some(rebuilt));
    }

    edit.update(|current| match node_kind(node) {
        JavaSyntaxKind::CompilationUnit => rewriter.visit_compilation_unit(current, cursor),
        JavaSyntaxKind::ClassDecl => rewriter.visit_class_decl(current, cursor),
        JavaSyntaxKind::MethodDecl => rewriter.visit_method_decl(current, cursor),
        JavaSyntaxKind::NewClass => rewriter.visit_new_class(current, cursor),
        JavaSyntaxKind::Block => rewriter.visit_block(current, cursor),
        JavaSyntaxKind::PackageDecl
        | JavaSyntaxKind::Import
        | JavaSyntaxKind::VariableDecls
        | JavaSyntaxKind::Statement
        | JavaSyntaxKind::Error => None,
        kind => {
            tracing::warn!("Unexpected node kind in tree: {}", kind);
            None
        }
    });

    if cursor.parent_kind() == Some(JavaSyntaxKind::Block) {
        edit.update(|current| rewriter.visit_statement(current, cursor));
    }

    edit.into_changed()
}

/// Rewrite the child nodes of `node`; the children list is only copied once
/// the first child changes
fn rewrite_children<'a, R: TreeRewriter + ?Sized>(
    node: &'a GreenNodeData,
    rewriter: &mut R,
    cursor: &mut Cursor<'a>,
) -> Option<GreenNode> {
    let mut children: Option<Vec<GreenElement>> = None;

    cursor.push(node);
    for (index, child) in node.children().enumerate() {
        let rewritten = match child {
            NodeOrToken::Node(child) => rewrite_node(child, rewriter, cursor),
            NodeOrToken::Token(_) => None,
        };
        if let Some(children) = children.as_mut() {
            children.push(rewritten.map_or_else(|| to_owned_element(child), NodeOrToken::Node));
        } else if let Some(new_child) = rewritten {
            let mut copied: Vec<GreenElement> =
                node.children().take(index).map(to_owned_element).collect();
            copied.push(NodeOrToken::Node(new_child));
            children = Some(copied);
        }
    }
    cursor.pop();

    children.map(|children| GreenNode::new(node.kind(), children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::{ast::ClassKind, make, print, space::Space};

    fn sample() -> GreenNode {
        let method = make::method_decl(
            "\n\n    ",
            "void run()",
            Some(make::block(
                " ",
                vec![
                    make::statement("\n        ", "a();"),
                    make::statement("\n\n\n        ", "b();"),
                ],
                "\n    ",
            )),
        );
        let body = make::block(
            " ",
            vec![make::variable_decls("\n    ", "int x;"), method],
            "\n",
        );
        make::compilation_unit(
            "",
            None,
            vec![],
            vec![make::class_decl("", "", ClassKind::Class, "Foo", body)],
            "\n",
        )
    }

    #[derive(Default)]
    struct Recorder {
        visited: Vec<JavaSyntaxKind>,
        statements: Vec<(JavaSyntaxKind, Option<JavaSyntaxKind>)>,
    }

    impl TreeRewriter for Recorder {
        fn visit_compilation_unit(
            &mut self,
            node: &GreenNodeData,
            cursor: &Cursor<'_>,
        ) -> Option<GreenNode> {
            assert_eq!(cursor.depth(), 0);
            self.visited.push(node_kind(node));
            None
        }

        fn visit_class_decl(
            &mut self,
            node: &GreenNodeData,
            cursor: &Cursor<'_>,
        ) -> Option<GreenNode> {
            assert_eq!(cursor.parent_kind(), Some(JavaSyntaxKind::CompilationUnit));
            self.visited.push(node_kind(node));
            None
        }

        fn visit_method_decl(&mut self, node: &GreenNodeData, _: &Cursor<'_>) -> Option<GreenNode> {
            self.visited.push(node_kind(node));
            None
        }

        fn visit_block(&mut self, node: &GreenNodeData, _: &Cursor<'_>) -> Option<GreenNode> {
            self.visited.push(node_kind(node));
            None
        }

        fn visit_statement(
            &mut self,
            node: &GreenNodeData,
            cursor: &Cursor<'_>,
        ) -> Option<GreenNode> {
            self.statements
                .push((node_kind(node), cursor.grandparent().map(node_kind)));
            None
        }
    }

    #[test]
    fn test_post_order_dispatch() {
        let tree = sample();
        let mut recorder = Recorder::default();
        let result = rewrite(&tree, &mut recorder);

        assert_eq!(
            recorder.visited,
            vec![
                JavaSyntaxKind::Block,
                JavaSyntaxKind::MethodDecl,
                JavaSyntaxKind::Block,
                JavaSyntaxKind::ClassDecl,
                JavaSyntaxKind::CompilationUnit,
            ]
        );
        assert_eq!(
            recorder.statements,
            vec![
                (JavaSyntaxKind::VariableDecls, Some(JavaSyntaxKind::ClassDecl)),
                (JavaSyntaxKind::Statement, Some(JavaSyntaxKind::MethodDecl)),
                (JavaSyntaxKind::Statement, Some(JavaSyntaxKind::MethodDecl)),
                (JavaSyntaxKind::MethodDecl, Some(JavaSyntaxKind::ClassDecl)),
            ]
        );

        // nothing changed, same allocation
        assert!(std::ptr::eq::<GreenNodeData>(&*result, &*tree));
    }

    struct SingleLineStatements;

    impl TreeRewriter for SingleLineStatements {
        fn visit_statement(
            &mut self,
            node: &GreenNodeData,
            cursor: &Cursor<'_>,
        ) -> Option<GreenNode> {
            if cursor.grandparent().map(node_kind) == Some(JavaSyntaxKind::ClassDecl) {
                return None;
            }
            let indent = Space::prefix(node).indent().to_string();
            Space::prefix(node).with_whitespace(&format!("\n{indent}"))
        }
    }

    #[test]
    fn test_rewrite_replaces_only_changed_spine() {
        let tree = sample();
        let result = rewrite(&tree, &mut SingleLineStatements);

        assert_eq!(
            print(&result),
            "class Foo {\n    int x;\n\n    void run() {\n        a();\n        b();\n    }\n}\n"
        );

        // the field was not touched and is shared with the input tree
        let field = |root: &GreenNode| -> *const GreenNodeData {
            let class = child_node(root, 0).unwrap();
            let body = child_node(class, 3).unwrap();
            child_node(body, 2).unwrap()
        };
        assert!(std::ptr::eq(field(&tree), field(&result)));
    }

    #[test]
    fn test_cursor_ancestors() {
        let outer = make::block("", vec![], "");
        let inner = make::statement("", "x();");
        let mut cursor = Cursor::new();
        assert!(cursor.parent().is_none());

        cursor.push(&outer);
        cursor.push(&inner);
        assert_eq!(cursor.depth(), 2);
        assert_eq!(cursor.parent_kind(), Some(JavaSyntaxKind::Statement));
        assert_eq!(cursor.grandparent().map(node_kind), Some(JavaSyntaxKind::Block));
        let kinds: Vec<_> = cursor.ancestors().map(node_kind).collect();
        assert_eq!(kinds, vec![JavaSyntaxKind::Statement, JavaSyntaxKind::Block]);

        cursor.pop();
        assert_eq!(cursor.parent_kind(), Some(JavaSyntaxKind::Block));
        assert!(cursor.grandparent().is_none());
    }

    #[test]
    fn test_node_edit_tracks_changes() {
        let stmt = make::statement("\n", "x();");
        let mut edit = NodeEdit::new(&stmt);
        assert!(!edit.update(|node| Space::prefix(node).with_whitespace("\n")));
        assert!(!edit.is_changed());

        assert!(edit.update(|node| Space::prefix(node).with_whitespace("\n\n")));
        assert!(edit.update(|node| Space::prefix(node).with_whitespace("\n\n\n")));
        let changed = edit.into_changed().unwrap();
        assert_eq!(Space::prefix(&changed).whitespace(), "\n\n\n");
    }

    #[test]
    fn test_map_child_ignores_tokens_and_no_ops() {
        let block = make::block(" ", vec![make::statement("\n", "x();")], "\n");
        // index 1 is the opening brace
        assert!(map_child(&block, 1, |_| Some(make::statement("", "y();"))).is_none());
        assert!(map_child(&block, 2, |_| None).is_none());

        let replaced =
            map_child(&block, 2, |stmt| Space::prefix(stmt).with_whitespace("\n\n")).unwrap();
        assert_eq!(print(&replaced), " {\n\nx();\n}");
    }
}
