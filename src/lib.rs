//! lstkit: lossless syntax trees with exact reprinting.
//!
//! A tree built by a parser keeps every byte of its source: tokens live in
//! node fields, whitespace and comments in `Space` values. Printing the tree
//! reproduces the source exactly, and edits through the with-protocol touch
//! only what they change.

// Core value types - re-exported from lstkit-core
pub use lstkit_core::error;
pub use lstkit_core::identity;
pub use lstkit_core::markers;
pub use lstkit_core::padding;
pub use lstkit_core::space;
pub use lstkit_core::span;
pub use lstkit_core::text;
pub use lstkit_core::types;
pub use lstkit_core::version;

// Tree, visitors, printing, folding and boundaries - re-exported from lstkit-cst
pub use lstkit_cst::cache;
pub use lstkit_cst::directive;
pub use lstkit_cst::nodes;
pub use lstkit_cst::parse;
pub use lstkit_cst::printer;
pub use lstkit_cst::rpc;
pub use lstkit_cst::tree;
pub use lstkit_cst::visitor;

pub use lstkit_core::{
    Container, JavaType, LeftPadded, LstError, LstResult, Markers, NodeId, ParseOptions,
    RightPadded, Space,
};
pub use lstkit_cst::{
    parse_source, print_tree, CSharpVisitor, CompilationUnit, Dialect, JavaVisitor, PrintOptions,
    Printer, SourceParser, Tree, TypeResolver,
};

// Tracing setup for binaries and tests embedding the library
pub mod logging;
