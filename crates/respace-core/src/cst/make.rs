//! Node factory for the Java CST
//!
//! Every constructor takes the node's prefix as plain text; it is split into
//! trivia tokens (see [`super::trivia`]) and stored as the first children of the
//! node. The leading trivia of a file is passed to [`compilation_unit`], so the
//! first declaration of a file should be built with an empty prefix.
//!
//! Declaration and statement text the passes never look into is stored as a
//! single opaque [`JavaSyntaxKind::Code`] token.
//!
//! # Example
//!
//! ```rust,ignore
//! use respace_core::cst::{make, print, ast::ClassKind};
//!
//! let body = make::block(" ", vec![make::variable_decls("\n    ", "int x;")], "\n");
//! let class = make::class_decl("", "public", ClassKind::Class, "Foo", body);
//! let unit = make::compilation_unit("", None, vec![], vec![class], "\n");
//!
//! assert_eq!(print(&unit), "public class Foo {\n    int x;\n}\n");
//! ```

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::{GreenElement, JavaSyntaxKind, ast::ClassKind, trivia::split_trivia};

fn token(kind: JavaSyntaxKind, text: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(kind.into(), text))
}

fn punct(kind: JavaSyntaxKind) -> GreenElement {
    token(kind, kind.token_text().unwrap_or_default())
}

fn node(kind: JavaSyntaxKind, children: Vec<GreenElement>) -> GreenNode {
    GreenNode::new(kind.into(), children)
}

/// Whitespace token, used when a prefix has to be created from scratch
pub fn whitespace(text: &str) -> GreenToken {
    GreenToken::new(JavaSyntaxKind::Whitespace.into(), text)
}

/// Trivia tokens for a piece of prefix text
pub fn trivia(text: &str) -> Vec<GreenElement> {
    split_trivia(text)
        .into_iter()
        .map(|piece| token(piece.kind, piece.text))
        .collect()
}

fn with_prefix(prefix: &str, rest: impl IntoIterator<Item = GreenElement>) -> Vec<GreenElement> {
    let mut children = trivia(prefix);
    children.extend(rest);
    children
}

/// Root of a source file
///
/// `prefix` is the trivia before the first declaration, `eof` the trivia
/// after the last one.
pub fn compilation_unit(
    prefix: &str,
    package: Option<GreenNode>,
    imports: Vec<GreenNode>,
    types: Vec<GreenNode>,
    eof: &str,
) -> GreenNode {
    let mut children = trivia(prefix);
    children.extend(package.map(NodeOrToken::Node));
    children.extend(imports.into_iter().map(NodeOrToken::Node));
    children.extend(types.into_iter().map(NodeOrToken::Node));
    children.extend(trivia(eof));
    node(JavaSyntaxKind::CompilationUnit, children)
}

/// `package <name>;`
pub fn package_decl(prefix: &str, name: &str) -> GreenNode {
    node(
        JavaSyntaxKind::PackageDecl,
        with_prefix(
            prefix,
            [
                punct(JavaSyntaxKind::PackageKw),
                token(JavaSyntaxKind::Whitespace, " "),
                token(JavaSyntaxKind::Code, name),
                punct(JavaSyntaxKind::Semicolon),
            ],
        ),
    )
}

/// `import <name>;`
pub fn import(prefix: &str, name: &str) -> GreenNode {
    node(
        JavaSyntaxKind::Import,
        with_prefix(
            prefix,
            [
                punct(JavaSyntaxKind::ImportKw),
                token(JavaSyntaxKind::Whitespace, " "),
                token(JavaSyntaxKind::Code, name),
                punct(JavaSyntaxKind::Semicolon),
            ],
        ),
    )
}

/// `import static <name>;`
pub fn static_import(prefix: &str, name: &str) -> GreenNode {
    node(
        JavaSyntaxKind::Import,
        with_prefix(
            prefix,
            [
                punct(JavaSyntaxKind::ImportKw),
                token(JavaSyntaxKind::Whitespace, " "),
                punct(JavaSyntaxKind::StaticKw),
                token(JavaSyntaxKind::Whitespace, " "),
                token(JavaSyntaxKind::Code, name),
                punct(JavaSyntaxKind::Semicolon),
            ],
        ),
    )
}

/// Type declaration: `<modifiers> <keyword> <name><body>`
///
/// The body block carries its own prefix, usually `" "`.
pub fn class_decl(
    prefix: &str,
    modifiers: &str,
    kind: ClassKind,
    name: &str,
    body: GreenNode,
) -> GreenNode {
    let mut children = trivia(prefix);
    if !modifiers.is_empty() {
        children.push(token(JavaSyntaxKind::Code, modifiers));
        children.push(token(JavaSyntaxKind::Whitespace, " "));
    }
    children.push(punct(kind.keyword()));
    children.push(token(JavaSyntaxKind::Whitespace, " "));
    children.push(token(JavaSyntaxKind::Ident, name));
    children.push(NodeOrToken::Node(body));
    node(JavaSyntaxKind::ClassDecl, children)
}

/// `{ <members> <end>}`
///
/// `end` is the trivia before the closing brace.
pub fn block(prefix: &str, members: Vec<GreenNode>, end: &str) -> GreenNode {
    let mut children = with_prefix(prefix, [punct(JavaSyntaxKind::LBrace)]);
    children.extend(members.into_iter().map(NodeOrToken::Node));
    children.extend(trivia(end));
    children.push(punct(JavaSyntaxKind::RBrace));
    node(JavaSyntaxKind::Block, children)
}

/// Method or constructor; `signature` runs up to the body, or includes the
/// terminating `;` of a body-less method
pub fn method_decl(prefix: &str, signature: &str, body: Option<GreenNode>) -> GreenNode {
    let mut children = with_prefix(prefix, [token(JavaSyntaxKind::Code, signature)]);
    children.extend(body.map(NodeOrToken::Node));
    node(JavaSyntaxKind::MethodDecl, children)
}

/// Field or local variable declaration, e.g. `private int count = 0;`
pub fn variable_decls(prefix: &str, text: &str) -> GreenNode {
    node(
        JavaSyntaxKind::VariableDecls,
        with_prefix(prefix, [token(JavaSyntaxKind::Code, text)]),
    )
}

/// Any other statement, e.g. `return x;`
pub fn statement(prefix: &str, text: &str) -> GreenNode {
    node(
        JavaSyntaxKind::Statement,
        with_prefix(prefix, [token(JavaSyntaxKind::Code, text)]),
    )
}

/// Statement wrapping an expression node, terminated by `;`
pub fn expression_statement(prefix: &str, expression: GreenNode) -> GreenNode {
    node(
        JavaSyntaxKind::Statement,
        with_prefix(
            prefix,
            [NodeOrToken::Node(expression), punct(JavaSyntaxKind::Semicolon)],
        ),
    )
}

/// `new <constructor><body>`; a body makes it an anonymous class
pub fn new_class(prefix: &str, constructor: &str, body: Option<GreenNode>) -> GreenNode {
    let mut children = with_prefix(
        prefix,
        [
            punct(JavaSyntaxKind::NewKw),
            token(JavaSyntaxKind::Whitespace, " "),
            token(JavaSyntaxKind::Code, constructor),
        ],
    );
    children.extend(body.map(NodeOrToken::Node));
    node(JavaSyntaxKind::NewClass, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::print;

    #[test]
    fn test_unit_prints_losslessly() {
        let method = method_decl(
            "\n\n    ",
            "void run()",
            Some(block(" ", vec![statement("\n        ", "go();")], "\n    ")),
        );
        let body = block(
            " ",
            vec![variable_decls("\n    ", "private int count;"), method],
            "\n",
        );
        let unit = compilation_unit(
            "/* header */\n",
            Some(package_decl("", "com.example")),
            vec![
                import("\n\n", "java.util.List"),
                static_import("\n", "java.util.Objects.requireNonNull"),
            ],
            vec![class_decl("\n\n", "public", ClassKind::Class, "Foo", body)],
            "\n",
        );

        assert_eq!(
            print(&unit),
            "/* header */\npackage com.example;\n\nimport java.util.List;\nimport static java.util.Objects.requireNonNull;\n\npublic class Foo {\n    private int count;\n\n    void run() {\n        go();\n    }\n}\n"
        );
    }

    #[test]
    fn test_anonymous_class_statement() {
        let run = method_decl("\n    ", "public void run()", Some(block(" ", vec![], "")));
        let body = block(" ", vec![run], "\n");
        let stmt = expression_statement("", new_class("", "Runnable()", Some(body)));
        let text = crate::cst::JavaSyntaxNode::new_root(stmt).to_string();
        assert_eq!(text, "new Runnable() {\n    public void run() {}\n};");
    }

    #[test]
    fn test_annotation_and_interface_keywords() {
        let annotation =
            class_decl("", "public", ClassKind::Annotation, "Marker", block(" ", vec![], ""));
        let interface = class_decl("", "", ClassKind::Interface, "Shape", block(" ", vec![], ""));
        assert_eq!(
            crate::cst::JavaSyntaxNode::new_root(annotation).to_string(),
            "public @interface Marker {}"
        );
        assert_eq!(
            crate::cst::JavaSyntaxNode::new_root(interface).to_string(),
            "interface Shape {}"
        );
    }
}
