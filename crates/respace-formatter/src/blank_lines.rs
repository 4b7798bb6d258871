//! Blank line normalization
//!
//! Rewrites the leading whitespace of declarations and statements so that
//! the number of blank lines around them stays within the bounds of a
//! [`BlankLineStyle`]. Only the whitespace before a node (or before a
//! closing brace) is touched; comments, the indentation of the node's own
//! line and everything else keep their text.
//!
//! The walk is post-order, so upper bounds applied to a statement run before
//! the lower bounds its enclosing declaration applies. A minimum therefore
//! always wins over a maximum on the same prefix.

use std::borrow::Cow;

use respace_core::cst::{
    Cursor, GreenNode, GreenNodeData, JavaSyntaxKind, NodeEdit, Space, TreeRewriter,
    ast::{AstNode, Block, ClassDecl, ClassKind, CompilationUnit, MethodDecl, NewClass, node_kind},
    map_child, rewrite,
};
use tracing::{debug, trace};

use crate::format::FormatPass;
use crate::source::SourceFile;
use crate::style::{self, BlankLineStyle};
use crate::whitespace::{cap_at, indent, pad_to};

/// The blank line pass
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLines;

impl BlankLines {
    pub fn new() -> Self {
        Self
    }

    /// Format one tree with an already resolved style
    pub fn format_tree(tree: &GreenNode, style: &BlankLineStyle) -> GreenNode {
        rewrite(tree, &mut BlankLineRewriter { style })
    }
}

impl FormatPass for BlankLines {
    fn name(&self) -> &'static str {
        "blank-lines"
    }

    fn run(&self, source: &SourceFile) -> GreenNode {
        let style = style::resolve(source);
        match source.path() {
            Some(path) => debug!("Normalizing blank lines in {}", path.display()),
            None => debug!("Normalizing blank lines"),
        }
        Self::format_tree(source.tree(), &style)
    }
}

struct BlankLineRewriter<'s> {
    style: &'s BlankLineStyle,
}

fn cap_prefix(node: &GreenNodeData, max: u32, context: &'static str) -> Option<GreenNode> {
    let changed = Space::prefix(node).map_whitespace(|whitespace| cap_at(whitespace, max));
    if changed.is_some() {
        trace!(context, max, "Removed blank lines");
    }
    changed
}

fn pad_prefix(node: &GreenNodeData, min: u32, context: &'static str) -> Option<GreenNode> {
    let changed = Space::prefix(node).map_whitespace(|whitespace| pad_to(whitespace, min));
    if changed.is_some() {
        trace!(context, min, "Inserted blank lines");
    }
    changed
}

fn cap_end(block: &GreenNodeData, max: u32, context: &'static str) -> Option<GreenNode> {
    let changed =
        Space::before_closing(block)?.map_whitespace(|whitespace| cap_at(whitespace, max));
    if changed.is_some() {
        trace!(context, max, "Removed blank lines");
    }
    changed
}

fn pad_end(block: &GreenNodeData, min: u32, context: &'static str) -> Option<GreenNode> {
    let changed =
        Space::before_closing(block)?.map_whitespace(|whitespace| pad_to(whitespace, min));
    if changed.is_some() {
        trace!(context, min, "Inserted blank lines");
    }
    changed
}

/// Cap, then pad; owned whenever either step changed the text
fn cap_then_pad(whitespace: &str, max: u32, min: u32) -> Cow<'_, str> {
    match cap_at(whitespace, max) {
        Cow::Borrowed(whitespace) => pad_to(whitespace, min),
        Cow::Owned(capped) => Cow::Owned(pad_to(&capped, min).into_owned()),
    }
}

/// Put the closing brace of an emptied method body under the method
fn indent_closing_line<'a>(whitespace: &'a str, method_indent: &str) -> Cow<'a, str> {
    if whitespace.contains('\n') && indent(whitespace).is_empty() {
        Cow::Owned(format!("{whitespace}{method_indent}"))
    } else {
        Cow::Borrowed(whitespace)
    }
}

impl BlankLineRewriter<'_> {
    /// Lower bound for a non-first member of a type body, by member kind
    ///
    /// Only interfaces have their own bounds; enums and annotation types use
    /// the class ones.
    fn member_minimum(
        &self,
        member: JavaSyntaxKind,
        class: ClassKind,
    ) -> Option<(u32, &'static str)> {
        let min = &self.style.minimum;
        let interface = class == ClassKind::Interface;
        match member {
            JavaSyntaxKind::VariableDecls if interface => {
                Some((min.around_field_in_interface, "aroundFieldInInterface"))
            }
            JavaSyntaxKind::VariableDecls => Some((min.around_field, "aroundField")),
            JavaSyntaxKind::MethodDecl if interface => {
                Some((min.around_method_in_interface, "aroundMethodInInterface"))
            }
            JavaSyntaxKind::MethodDecl => Some((min.around_method, "aroundMethod")),
            JavaSyntaxKind::Block => Some((min.around_initializer, "aroundInitializer")),
            _ => None,
        }
    }

    fn format_class_body(&self, body: &GreenNodeData, class: ClassKind) -> Option<GreenNode> {
        let members = Block::cast(body)?.members();
        let keep = &self.style.keep_maximum;
        let min = &self.style.minimum;

        let mut edit = NodeEdit::new(body);
        for (position, member) in members.iter().enumerate() {
            let follows_initializer =
                position > 0 && members[position - 1].kind == JavaSyntaxKind::Block;
            let own_minimum = if position == 0 {
                Some((min.after_class_header, "afterClassHeader"))
            } else {
                self.member_minimum(member.kind, class)
            };

            edit.update_child(member.index, |node| {
                let mut member_edit = NodeEdit::new(node);
                member_edit.update(|node| cap_prefix(node, keep.in_declarations, "inDeclarations"));
                if let Some((minimum, context)) = own_minimum {
                    member_edit.update(|node| pad_prefix(node, minimum, context));
                }
                if follows_initializer {
                    member_edit.update(|node| {
                        pad_prefix(node, min.around_initializer, "aroundInitializer")
                    });
                }
                member_edit.into_changed()
            });
        }

        edit.update(|body| pad_end(body, min.before_class_end, "beforeClassEnd"));
        edit.into_changed()
    }

    fn format_empty_method_body(
        &self,
        body: &GreenNodeData,
        method_indent: &str,
    ) -> Option<GreenNode> {
        let minimum = self.style.minimum.before_method_body;
        let mut edit = NodeEdit::new(body);
        edit.update(|body| pad_end(body, minimum, "beforeMethodBody"));

        if minimum > 0 && !method_indent.is_empty() {
            edit.update(|body| {
                let end = Space::before_closing(body)?;
                if end.has_comments() {
                    end.map_last_comment_suffix(|suffix| indent_closing_line(suffix, method_indent))
                } else {
                    end.map_whitespace(|whitespace| indent_closing_line(whitespace, method_indent))
                }
            });
        }
        edit.into_changed()
    }

    /// Blank lines around the file header, package and imports
    ///
    /// Children are edited before the unit's own leading trivia, since
    /// inserting or removing a whitespace token there shifts child positions.
    fn format_unit_header(
        &self,
        node: &GreenNodeData,
        unit: CompilationUnit<'_>,
    ) -> Option<GreenNode> {
        let keep = &self.style.keep_maximum;
        let min = &self.style.minimum;
        let has_package = unit.has_package();
        let imports = unit.import_indices();
        let types = unit.type_indices();
        let has_header_comments = Space::prefix(node).has_comments();

        let mut edit = NodeEdit::new(node);

        if has_package {
            if let Some(&first) = imports.first() {
                edit.update_child(first, |import| {
                    pad_prefix(import, min.before_imports.max(min.after_package), "beforeImports")
                });
            } else if let Some(&first) = types.first() {
                edit.update_child(first, |class| {
                    pad_prefix(class, min.after_package, "afterPackage")
                });
            }
        } else if let Some(&first) = imports.first() {
            if !has_header_comments {
                edit.update_child(first, |import| Space::prefix(import).with_whitespace(""));
            }
        }

        for (position, &index) in types.iter().enumerate() {
            if position == 0 {
                // a type opening the file has nothing above it to separate from
                if has_package || !imports.is_empty() {
                    edit.update_child(index, |class| {
                        pad_prefix(class, min.after_imports, "afterImports")
                    });
                }
            } else {
                edit.update_child(index, |class| {
                    pad_prefix(class, min.around_class, "aroundClass")
                });
            }
        }

        if has_package {
            if has_header_comments {
                edit.update(|unit| {
                    Space::prefix(unit).map_last_comment_suffix(|suffix| {
                        cap_then_pad(suffix, keep.between_header_and_package, min.before_package)
                    })
                });
            } else {
                edit.update(|unit| pad_prefix(unit, min.before_package, "beforePackage"));
            }
        } else if has_header_comments {
            edit.update(|unit| {
                Space::prefix(unit)
                    .map_last_comment_suffix(|suffix| pad_to(suffix, min.before_imports))
            });
        } else if !imports.is_empty() {
            edit.update(|unit| Space::prefix(unit).with_whitespace(""));
        }

        edit.into_changed()
    }
}

impl TreeRewriter for BlankLineRewriter<'_> {
    fn visit_compilation_unit(
        &mut self,
        node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        let unit = CompilationUnit::cast(node)?;
        self.format_unit_header(node, unit)
    }

    fn visit_class_decl(
        &mut self,
        node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        let class = ClassDecl::cast(node)?;
        let kind = class.kind();
        map_child(node, class.body_index()?, |body| self.format_class_body(body, kind))
    }

    fn visit_method_decl(
        &mut self,
        node: &GreenNodeData,
        _cursor: &Cursor<'_>,
    ) -> Option<GreenNode> {
        let method = MethodDecl::cast(node)?;
        let minimum = self.style.minimum.before_method_body;
        let method_indent = Space::prefix(node).indent();

        map_child(node, method.body_index()?, |body| {
            match Block::cast(body)?.members().first() {
                Some(first) => map_child(body, first.index, |statement| {
                    pad_prefix(statement, minimum, "beforeMethodBody")
                }),
                None => self.format_empty_method_body(body, method_indent),
            }
        })
    }

    fn visit_new_class(&mut self, node: &GreenNodeData, _cursor: &Cursor<'_>) -> Option<GreenNode> {
        let new_class = NewClass::cast(node)?;
        let minimum = self.style.minimum.after_anonymous_class_header;

        map_child(node, new_class.body_index()?, |body| {
            let first = *Block::cast(body)?.members().first()?;
            map_child(body, first.index, |member| {
                pad_prefix(member, minimum, "afterAnonymousClassHeader")
            })
        })
    }

    fn visit_block(&mut self, node: &GreenNodeData, _cursor: &Cursor<'_>) -> Option<GreenNode> {
        cap_end(node, self.style.keep_maximum.before_end_of_block, "beforeEndOfBlock")
    }

    fn visit_statement(&mut self, node: &GreenNodeData, cursor: &Cursor<'_>) -> Option<GreenNode> {
        // members of a type body are bounded by inDeclarations instead
        let in_code = cursor
            .grandparent()
            .is_some_and(|owner| node_kind(owner) != JavaSyntaxKind::ClassDecl);
        if in_code {
            cap_prefix(node, self.style.keep_maximum.in_code, "inCode")
        } else {
            None
        }
    }
}
