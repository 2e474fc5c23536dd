// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Boundaries to the parser and the type resolver.
//!
//! Neither lives in this crate. A parser produces a [`CompilationUnit`]
//! together with a [`SpanTable`] mapping node ids back to byte offsets; a
//! type resolver answers "what is the type of this tree" once, during
//! attribution, and is never called while printing or editing.
//!
//! [`RawTextParser`] is the trivial parser: it keeps the whole text in an
//! [`Unknown`] node, which is enough to round-trip any source and to fold
//! conditional regions whose branches nobody inspects.

use lstkit_core::span::{Span, SpanTable};
use lstkit_core::space::Space;
use lstkit_core::types::JavaType;
use lstkit_core::version::{LanguageVersion, ParseOptions};
use thiserror::Error;
use tracing::debug;

use crate::directive::{scan_directives, DirectiveError};
use crate::nodes::{CompilationUnit, ConditionalDirective, Unknown};
use crate::tree::{Tree, TreeElement};
use crate::visitor::{visit_tree, CSharpVisitor, JavaVisitor};

/// Errors reported by a parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: u32,
        column: u32,
        message: String,
    },

    #[error("{feature} is not available in language version {version}")]
    Unsupported {
        feature: String,
        version: LanguageVersion,
    },

    #[error("malformed conditional region: {0}")]
    Directive(#[from] DirectiveError),
}

/// A parsed file and the source span of every node in it.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub compilation_unit: CompilationUnit,
    pub spans: SpanTable,
}

/// Turns source text into a tree.
pub trait SourceParser {
    fn parse(&self, source: &str, options: &ParseOptions) -> Result<ParseResult, ParseError>;
}

/// Parse `source`, folding conditional regions when it has any.
///
/// Without `#if` directives this is `parser.parse`. Otherwise the result is a
/// unit whose single member is a [`ConditionalDirective`] holding one parsed
/// branch per arm selection, and the span table covers every branch.
pub fn parse_source<P>(
    parser: &P,
    source: &str,
    options: &ParseOptions,
) -> Result<ParseResult, ParseError>
where
    P: SourceParser + ?Sized,
{
    if scan_directives(source).is_empty() {
        return parser.parse(source, options);
    }
    let (folded, spans) = ConditionalDirective::parse_branches(source, parser, options)?;
    Ok(ParseResult {
        compilation_unit: CompilationUnit::build(vec![folded.into()]),
        spans,
    })
}

/// Parses any text into a single [`Unknown`] node.
///
/// Leading whitespace becomes the node's prefix and trailing whitespace the
/// unit's end-of-file space.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTextParser;

impl SourceParser for RawTextParser {
    fn parse(&self, source: &str, _options: &ParseOptions) -> Result<ParseResult, ParseError> {
        let body = source.trim();
        let mut spans = SpanTable::new();

        let unit = if body.is_empty() {
            CompilationUnit::new(Space::EMPTY, Vec::new(), Vec::new(), Space::format(source))
        } else {
            let start = source.len() - source.trim_start().len();
            let end = start + body.len();
            let unknown = Unknown::build(Space::format(&source[..start]), body);
            spans.insert(unknown.id(), Span::new(start as u64, end as u64));
            CompilationUnit::new(
                Space::EMPTY,
                Vec::new(),
                vec![lstkit_core::padding::RightPadded::build(unknown.into_tree())],
                Space::format(&source[end..]),
            )
        };
        spans.insert(unit.id(), Span::new(0, source.len() as u64));
        Ok(ParseResult {
            compilation_unit: unit,
            spans,
        })
    }
}

/// Answers the type of a syntactic reference.
pub trait TypeResolver {
    /// The type of `tree`, or `None` when it has none or it is unknown.
    fn resolve(&self, tree: &Tree) -> Option<JavaType>;
}

/// A visitor that attaches resolved types bottom-up.
///
/// Each node is rebuilt from its visited children first, then offered to the
/// resolver. Kinds without a type slot are left as they are.
pub struct TypeAttributor<'r, R: TypeResolver + ?Sized> {
    resolver: &'r R,
    attributed: usize,
}

impl<'r, R: TypeResolver + ?Sized> TypeAttributor<'r, R> {
    pub fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            attributed: 0,
        }
    }

    /// Number of nodes that received a type so far.
    pub fn attributed(&self) -> usize {
        self.attributed
    }

    pub fn attribute(&mut self, unit: &CompilationUnit) -> CompilationUnit {
        let tree = self.visit(&unit.clone().into_tree(), &mut ());
        CompilationUnit::from_tree(tree)
    }
}

impl<P, R: TypeResolver + ?Sized> JavaVisitor<P> for TypeAttributor<'_, R> {
    fn visit(&mut self, tree: &Tree, p: &mut P) -> Tree {
        let visited = visit_tree(self, tree, p);
        let Some(ty) = self.resolver.resolve(&visited) else {
            return visited;
        };
        if visited.ty().as_ref() == Some(&ty) {
            return visited;
        }
        match visited.try_with_type(ty) {
            Ok(typed) => {
                self.attributed += 1;
                typed
            }
            Err(err) => {
                debug!(kind = visited.kind_name(), %err, "resolved type not attached");
                visited
            }
        }
    }

    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<P>> {
        Some(self)
    }
}

impl<P, R: TypeResolver + ?Sized> CSharpVisitor<P> for TypeAttributor<'_, R> {}
