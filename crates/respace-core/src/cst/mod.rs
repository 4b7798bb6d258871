//! Concrete Syntax Tree (CST) for Java sources
//!
//! This module implements a lossless syntax tree using the Rowan library.
//! The CST preserves all source information including whitespace, comments,
//! and formatting, so passes can rewrite a handful of tokens and leave every
//! other byte of the file untouched.
//!
//! ## Architecture
//!
//! The CST uses Rowan's green/red tree pattern:
//!
//! - **Green Tree**: Immutable, position-independent storage
//!   - Stores actual source text with trivia (whitespace, comments)
//!   - Cheap to clone (uses Arc internally)
//!   - What passes consume and produce (see [`rewrite`])
//!
//! - **Red Tree**: Dynamically constructed view with parent pointers
//!   - Created on-demand for printing and navigation
//!
//! ## Trivia Handling
//!
//! Trivia is owned by the node that follows it:
//! - The leading trivia of the file belongs to the compilation unit
//! - Every other node stores the trivia before it as its first children
//! - The trivia before a block's `}` belongs to the block
//!
//! [`space::Space`] gives a structured view of such a run.
//!
//! ## Example
//!
//! ```rust,ignore
//! use respace_core::cst::{make, print, ast::ClassKind};
//!
//! let body = make::block(" ", vec![make::variable_decls("\n\n\n    ", "int x;")], "\n");
//! let unit = make::compilation_unit(
//!     "",
//!     None,
//!     vec![],
//!     vec![make::class_decl("", "", ClassKind::Class, "Foo", body)],
//!     "\n",
//! );
//!
//! // Lossless property
//! assert_eq!(print(&unit), "class Foo {\n\n\n    int x;\n}\n");
//! ```

mod language;
mod nodes;
mod syntax_kind;

pub mod ast;
pub mod make;
pub mod rewrite;
pub mod space;
pub mod trivia;

pub use language::JavaLanguage;
pub use nodes::*;
pub use rewrite::{Cursor, NodeEdit, TreeRewriter, map_child, rewrite};
pub use space::{Comment, Space};
pub use syntax_kind::JavaSyntaxKind;
pub use trivia::{TriviaPiece, split_trivia};
