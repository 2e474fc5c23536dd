// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A lossless syntax tree for a C-family base language and its derived
//! dialect.
//!
//! Every byte of the source lives somewhere in the tree: tokens in node
//! fields, whitespace and comments in [`Space`](lstkit_core::Space) values
//! attached before each node and inside padding wrappers. Printing a tree
//! therefore reproduces its source exactly, and edits made through the
//! with-protocol change only what they touch.
//!
//! # Overview
//!
//! - **Nodes**: the closed [`Tree`] enum over base-language ([`J`]) and
//!   derived-dialect ([`Cs`]) kinds, each an immutable shared handle.
//! - **Visitors**: [`JavaVisitor`] and [`CSharpVisitor`] rebuild only the
//!   changed spine; a base-language visitor treats derived nodes as opaque.
//! - **Printing**: [`Printer`] and [`print_tree`] replay every space and token.
//! - **Conditional regions**: a [`ConditionalDirective`] holds one parse per
//!   `#if` arm selection and folds them back into one text.
//! - **Boundaries**: [`SourceParser`], [`TypeResolver`], the [`rpc`] wire
//!   form, and [`PrintOverride`].
//!
//! # Quick Start
//!
//! ```
//! use lstkit_cst::{parse_source, print_tree, RawTextParser};
//! use lstkit_core::ParseOptions;
//!
//! let source = "#if DEBUG\nlog();\n#endif\nrun();\n";
//! let parsed = parse_source(&RawTextParser, source, &ParseOptions::default()).unwrap();
//! assert_eq!(print_tree(&parsed.compilation_unit.into()), source);
//! ```

// ============================================================================
// Internal macros
// ============================================================================

#[macro_use]
mod macros;

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Node types, kind enums and the dialect switch.
pub mod nodes;
pub use nodes::{CompilationUnit, ConditionalDirective, Dialect};

/// The closed node enum and conversions.
pub mod tree;
pub use tree::{Cs, Tree, TreeElement, TypedTree, J};

/// Visitor traits, dispatch and the cursor.
pub mod visitor;
pub use visitor::{visit_tree, CSharpVisitor, Cursor, JavaVisitor, Walkable};

/// Exact-reprint printer.
pub mod printer;
pub use printer::{
    needs_terminator, print_tree, MarkerPrinter, PrintOptions, PrintOutputCapture, PrintOverride,
    Printer,
};

/// Preprocessor conditional regions.
pub mod directive;
pub use directive::{DirectiveError, DirectiveKind, DirectiveLine};

/// Parser and type-resolver boundaries.
pub mod parse;
pub use parse::{
    parse_source, ParseError, ParseResult, RawTextParser, SourceParser, TypeAttributor,
    TypeResolver,
};

pub mod cache;
pub use cache::{TypesInUse, TypesInUseCache};

pub mod rpc;
pub use rpc::{RpcError, RpcObjectData, RpcState};
