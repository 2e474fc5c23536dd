// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Exact reprint of a tree.
//!
//! [`Printer`] is a visitor that writes every stored [`Space`] and token back
//! in source order, so `print(parse(s)) == s` for any parser that accounts
//! for all of its input. Printing can start at any subtree.
//!
//! For each node the printer:
//! 1. stops if output was stopped,
//! 2. offers the node to the [`PrintOverride`], which may claim the subtree,
//! 3. writes the node's prefix,
//! 4. writes marker decorations (search results),
//! 5. stops here in `stop_after_first` mode,
//! 6. writes the node's tokens and children.
//!
//! ```
//! use lstkit_cst::nodes::{Binary, BinaryOperator, Identifier};
//! use lstkit_cst::printer::print_tree;
//! use lstkit_cst::tree::Tree;
//! use lstkit_core::{LeftPadded, Space};
//!
//! let sum: Tree = Binary::new(
//!     Space::EMPTY,
//!     Identifier::build("a").into(),
//!     LeftPadded::new(Space::single(), BinaryOperator::Addition),
//!     Identifier::build("b").with_prefix(Space::single()).into(),
//!     None,
//! )
//! .into();
//! assert_eq!(print_tree(&sum), "a + b");
//! ```

mod csharp;
mod java;

use std::fmt;
use std::sync::Arc;

use lstkit_core::markers::{Marker, TrailingComma};
use lstkit_core::padding::{Container, LeftPadded, RightPadded};
use lstkit_core::space::Space;
use serde::{Deserialize, Serialize};

use crate::nodes::*;
use crate::tree::{Cs, Tree, TreeElement, J};
use crate::visitor::{visit_tree, CSharpVisitor, JavaVisitor};

/// Accumulated printer output.
#[derive(Debug, Clone, Default)]
pub struct PrintOutputCapture {
    out: String,
    stopped: bool,
}

impl PrintOutputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text unless output has been stopped.
    pub fn append(&mut self, text: &str) {
        if !self.stopped {
            self.out.push_str(text);
        }
    }

    pub fn append_space(&mut self, space: &Space) {
        if !self.stopped {
            space.write_to(&mut self.out);
        }
    }

    /// Ignore all further output.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

/// How marker decorations are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerPrinter {
    /// Search results print as `/*~~>*/` or `/*~~(description)~~>*/`.
    #[default]
    Default,
    /// No decorations; the output is the source text only.
    Sanitized,
}

/// Printer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    #[serde(default)]
    pub marker_printer: MarkerPrinter,
    /// Print only the decorations and prefix of the first node, then stop.
    #[serde(default)]
    pub stop_after_first: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker_printer(mut self, marker_printer: MarkerPrinter) -> Self {
        self.marker_printer = marker_printer;
        self
    }

    pub fn with_stop_after_first(mut self, stop_after_first: bool) -> Self {
        self.stop_after_first = stop_after_first;
        self
    }
}

/// An external printer that may take over any subtree.
pub trait PrintOverride: Send + Sync {
    /// Print `tree` (prefix included) and return `true`, or return `false`
    /// to leave it to the core printer.
    fn print(&self, tree: &Tree, out: &mut PrintOutputCapture) -> bool;
}

/// The exact-reprint visitor.
#[derive(Clone, Default)]
pub struct Printer {
    dialect: Dialect,
    options: PrintOptions,
    print_override: Option<Arc<dyn PrintOverride>>,
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("dialect", &self.dialect)
            .field("options", &self.options)
            .field("print_override", &self.print_override.is_some())
            .finish()
    }
}

impl Printer {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            options: PrintOptions::default(),
            print_override: None,
        }
    }

    pub fn with_options(mut self, options: PrintOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_override(mut self, print_override: Arc<dyn PrintOverride>) -> Self {
        self.print_override = Some(print_override);
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Print a tree to a string.
    pub fn print(&mut self, tree: &Tree) -> String {
        let mut out = PrintOutputCapture::new();
        self.visit(tree, &mut out);
        out.into_string()
    }

    /// A printer for a nested unit, sharing dialect, markers and override.
    fn sub_printer(&self) -> Printer {
        Printer {
            dialect: self.dialect,
            options: self.options.clone().with_stop_after_first(false),
            print_override: self.print_override.clone(),
        }
    }

    fn print_markers(&self, tree: &Tree, out: &mut PrintOutputCapture) {
        if self.options.marker_printer == MarkerPrinter::Sanitized {
            return;
        }
        for marker in tree.markers().entries() {
            if let Marker::SearchResult(result) = marker {
                match &result.description {
                    Some(description) => {
                        out.append("/*~~(");
                        out.append(description);
                        out.append(")~~>*/");
                    }
                    None => out.append("/*~~>*/"),
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Shared shapes
    // -----------------------------------------------------------------------

    fn node<T: TreeElement>(&mut self, node: &T, out: &mut PrintOutputCapture) {
        self.visit(&node.clone().into_tree(), out);
    }

    fn node_opt<T: TreeElement>(&mut self, node: Option<&T>, out: &mut PrintOutputCapture) {
        if let Some(node) = node {
            self.node(node, out);
        }
    }

    fn space(&mut self, space: &Space, out: &mut PrintOutputCapture) {
        self.visit_space(space, out);
    }

    /// `before token element`
    fn left<T: TreeElement>(
        &mut self,
        padded: &LeftPadded<T>,
        token: &str,
        out: &mut PrintOutputCapture,
    ) {
        self.space(&padded.before, out);
        out.append(token);
        self.node(&padded.element, out);
    }

    fn left_opt<T: TreeElement>(
        &mut self,
        padded: Option<&LeftPadded<T>>,
        token: &str,
        out: &mut PrintOutputCapture,
    ) {
        if let Some(padded) = padded {
            self.left(padded, token, out);
        }
    }

    /// `element after token`
    fn right<T: TreeElement>(
        &mut self,
        padded: &RightPadded<T>,
        token: &str,
        out: &mut PrintOutputCapture,
    ) {
        self.node(&padded.element, out);
        self.space(&padded.after, out);
        out.append(token);
    }

    /// Elements separated by `delim`, with an optional trailing delimiter.
    fn right_list<T: TreeElement>(
        &mut self,
        list: &[RightPadded<T>],
        delim: &str,
        out: &mut PrintOutputCapture,
    ) {
        let last = list.len().saturating_sub(1);
        for (index, padded) in list.iter().enumerate() {
            self.node(&padded.element, out);
            self.space(&padded.after, out);
            if index < last {
                out.append(delim);
            } else if let Some(trailing) = padded.markers.find::<TrailingComma>() {
                out.append(delim);
                self.space(&trailing.suffix, out);
            }
        }
    }

    /// `before open elements close`
    fn container<T: TreeElement>(
        &mut self,
        container: &Container<T>,
        open: &str,
        delim: &str,
        close: &str,
        out: &mut PrintOutputCapture,
    ) {
        self.space(&container.before, out);
        out.append(open);
        self.right_list(&container.elements, delim, out);
        out.append(close);
    }

    fn container_opt<T: TreeElement>(
        &mut self,
        container: Option<&Container<T>>,
        open: &str,
        delim: &str,
        close: &str,
        out: &mut PrintOutputCapture,
    ) {
        if let Some(container) = container {
            self.container(container, open, delim, close, out);
        }
    }

    /// One statement in statement position, with its terminator.
    fn statement(&mut self, padded: &RightPadded<Tree>, out: &mut PrintOutputCapture) {
        self.node(&padded.element, out);
        self.space(&padded.after, out);
        if needs_terminator(&padded.element) {
            out.append(";");
        }
    }

    fn statements(&mut self, list: &[RightPadded<Tree>], out: &mut PrintOutputCapture) {
        for padded in list {
            self.statement(padded, out);
        }
    }

    fn modifiers(&mut self, modifiers: &[Modifier], out: &mut PrintOutputCapture) {
        for modifier in modifiers {
            self.node(modifier, out);
        }
    }

    /// `=> expression`
    fn expression_body(&mut self, body: Option<&LeftPadded<Tree>>, out: &mut PrintOutputCapture) {
        self.left_opt(body, "=>", out);
    }
}

/// Whether a statement of this kind ends with `;` in statement position.
pub fn needs_terminator(tree: &Tree) -> bool {
    match tree {
        Tree::J(j) => match j {
            J::Assignment(_)
            | J::AssignmentOperation(_)
            | J::Break(_)
            | J::Continue(_)
            | J::Empty(_)
            | J::MethodInvocation(_)
            | J::NewClass(_)
            | J::Return(_)
            | J::Throw(_)
            | J::Unary(_)
            | J::VariableDeclarations(_) => true,
            J::MethodDeclaration(m) => m.body().is_none(),
            J::ClassDeclaration(c) => c.body().is_none(),
            J::Label(l) => needs_terminator(l.statement()),
            _ => false,
        },
        Tree::Cs(cs) => match cs {
            Cs::UsingDirective(_)
            | Cs::DelegateDeclaration(_)
            | Cs::Yield(_)
            | Cs::GotoStatement(_)
            | Cs::AwaitExpression(_)
            | Cs::CsNewClass(_) => true,
            Cs::PropertyDeclaration(p) => {
                p.initializer().is_some() || p.expression_body().is_some()
            }
            Cs::IndexerDeclaration(i) => i.expression_body().is_some(),
            Cs::AccessorDeclaration(a) => a.body().is_none(),
            Cs::EventDeclaration(e) => e.accessors().is_none(),
            Cs::OperatorDeclaration(o) => o.body().is_none(),
            Cs::ConversionOperatorDeclaration(c) => c.body().is_none(),
            Cs::DestructorDeclaration(d) => d.body().is_none(),
            _ => false,
        },
    }
}

/// Print any tree with the default printer.
pub fn print_tree(tree: &Tree) -> String {
    Printer::default().print(tree)
}

macro_rules! printer_methods {
    ([ $($snake:ident : $node:ident),* $(,)? ]) => {
        paste::paste! {
            $(
                fn [<visit_ $snake>](&mut self, node: &$node, out: &mut PrintOutputCapture) -> Tree {
                    self.[<print_ $snake>](node, out);
                    node.clone().into()
                }
            )*
        }
    };
}

impl JavaVisitor<PrintOutputCapture> for Printer {
    fn visit(&mut self, tree: &Tree, out: &mut PrintOutputCapture) -> Tree {
        if out.is_stopped() {
            return tree.clone();
        }
        if let Some(print_override) = &self.print_override {
            if print_override.print(tree, out) {
                return tree.clone();
            }
        }
        self.visit_space(tree.prefix(), out);
        self.print_markers(tree, out);
        if self.options.stop_after_first {
            out.stop();
            return tree.clone();
        }
        visit_tree(self, tree, out)
    }

    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<PrintOutputCapture>> {
        Some(self)
    }

    fn visit_space(&mut self, space: &Space, out: &mut PrintOutputCapture) -> Space {
        out.append_space(space);
        space.clone()
    }

    for_each_java_kind!(printer_methods!());
}

impl CSharpVisitor<PrintOutputCapture> for Printer {
    for_each_csharp_kind!(printer_methods!());
}

#[cfg(test)]
mod tests {
    use super::*;
    use lstkit_core::markers::SearchResult;

    fn ident(name: &str, prefix: &str) -> Identifier {
        Identifier::build(name).with_prefix(Space::format(prefix))
    }

    fn call(args: Option<Vec<(&str, &str)>>) -> Tree {
        let arguments = match args {
            Some(args) => Container::new(
                Space::EMPTY,
                args.into_iter()
                    .map(|(name, after)| {
                        RightPadded::new(Tree::from(ident(name, "")), Space::format(after))
                    })
                    .collect(),
            ),
            None => Container::new(
                Space::EMPTY,
                vec![RightPadded::build(Tree::from(Empty::build(Space::single())))],
            ),
        };
        MethodInvocation::new(Space::EMPTY, None, None, ident("f", ""), arguments, None).into()
    }

    #[test]
    fn container_delimiters_and_padding() {
        let tree = call(Some(vec![("a", " "), ("b", "")]));
        assert_eq!(print_tree(&tree), "f(a ,b)");
        assert_eq!(print_tree(&call(None)), "f( )");
    }

    #[test]
    fn trailing_comma_marker() {
        let padded = RightPadded::new(Tree::from(ident("A", " ")), Space::EMPTY)
            .with_markers(lstkit_core::Markers::EMPTY.add(TrailingComma::new(Space::single())));
        let init: Tree = InitializerExpression::new(Space::EMPTY, vec![padded]).into();
        assert_eq!(print_tree(&init), "{ A, }");
    }

    #[test]
    fn search_result_decorations() {
        let marked: Tree = ident("x", " ")
            .with_markers(lstkit_core::Markers::EMPTY.add(SearchResult::new(None)))
            .into();
        assert_eq!(print_tree(&marked), " /*~~>*/x");

        let described: Tree = ident("x", "")
            .with_markers(lstkit_core::Markers::EMPTY.add(SearchResult::new(Some("hit".into()))))
            .into();
        assert_eq!(print_tree(&described), "/*~~(hit)~~>*/x");

        let sanitized = Printer::default()
            .with_options(PrintOptions::new().with_marker_printer(MarkerPrinter::Sanitized))
            .print(&marked);
        assert_eq!(sanitized, " x");
    }

    #[test]
    fn stop_after_first_prints_only_leading_decorations() {
        let marked: Tree = ident("x", "\n  ")
            .with_markers(lstkit_core::Markers::EMPTY.add(SearchResult::new(None)))
            .into();
        let out = Printer::default()
            .with_options(PrintOptions::new().with_stop_after_first(true))
            .print(&marked);
        assert_eq!(out, "\n  /*~~>*/");
    }

    struct Shout;

    impl PrintOverride for Shout {
        fn print(&self, tree: &Tree, out: &mut PrintOutputCapture) -> bool {
            match tree.cast::<Identifier>() {
                Some(id) => {
                    out.append_space(id.prefix());
                    out.append(&id.simple_name().to_uppercase());
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn override_claims_subtrees() {
        let tree = call(Some(vec![("a", ""), ("b", "")]));
        let out = Printer::default().with_override(Arc::new(Shout)).print(&tree);
        assert_eq!(out, "F(A,B)");
    }

    #[test]
    fn terminators() {
        let ret: Tree = Return::new(Space::EMPTY, None).into();
        assert!(needs_terminator(&ret));
        let block: Tree = Block::new(Space::EMPTY, Vec::new(), Space::EMPTY).into();
        assert!(!needs_terminator(&block));
        let label: Tree = Label::new(
            Space::EMPTY,
            RightPadded::build(Identifier::build("l")),
            ret.clone(),
        )
        .into();
        assert!(needs_terminator(&label));
    }
}
