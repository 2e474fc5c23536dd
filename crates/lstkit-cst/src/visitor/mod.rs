// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal and rewriting.
//!
//! # Dispatch
//!
//! [`JavaVisitor::visit`] takes a [`Tree`] and routes it to the matching
//! `visit_<kind>` method. Every `visit_<kind>` defaults to walking the node's
//! children through the with-protocol, so a visitor that changes nothing
//! returns the original handles at every level and allocates nothing.
//!
//! Derived-dialect nodes are routed through [`JavaVisitor::adapt_csharp`].
//! A base-only visitor returns `None` there and sees derived nodes as opaque
//! leaves through [`JavaVisitor::visit_opaque`]; it never panics on them. A
//! visitor that also implements [`CSharpVisitor`] returns `Some(self)` and
//! gets `visit_<cs kind>` calls.
//!
//! # Traversal order
//!
//! - Depth-first, pre-order into `visit_<kind>`
//! - Children in field order: prefix, markers, then declared fields
//!
//! # Example
//!
//! ```
//! use lstkit_cst::nodes::Identifier;
//! use lstkit_cst::tree::Tree;
//! use lstkit_cst::visitor::JavaVisitor;
//!
//! struct NameCounter {
//!     count: usize,
//! }
//!
//! impl JavaVisitor<()> for NameCounter {
//!     fn visit_identifier(&mut self, node: &Identifier, p: &mut ()) -> Tree {
//!         self.count += 1;
//!         node.walk_children(self, p).into()
//!     }
//! }
//!
//! let tree: Tree = Identifier::build("x").into();
//! let mut counter = NameCounter { count: 0 };
//! let out = counter.visit(&tree, &mut ());
//! assert!(out.ptr_eq(&tree));
//! assert_eq!(counter.count, 1);
//! ```

mod cursor;

pub use cursor::Cursor;

use lstkit_core::identity::RefEq;
use lstkit_core::markers::Markers;
use lstkit_core::padding::{Container, LeftPadded, RightPadded};
use lstkit_core::space::Space;
use lstkit_core::types::JavaType;

use crate::directive::DirectiveLine;
use crate::nodes::*;
use crate::tree::{Cs, Tree, J};

macro_rules! visitor_methods {
    ([ $($snake:ident : $node:ident),* $(,)? ]) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a [`", stringify!($node), "`]. Defaults to walking its children.")]
                fn [<visit_ $snake>](&mut self, node: &$node, p: &mut P) -> Tree {
                    node.walk_children(self, p).into()
                }
            )*
        }
    };
}

/// A visitor over base-language nodes, with optional derived-dialect support.
///
/// All methods have defaults; override the ones you need. The trait is
/// object safe.
pub trait JavaVisitor<P> {
    /// Entry point for any tree. Override to act before or after every node;
    /// call [`visit_tree`] to continue with dispatch.
    fn visit(&mut self, tree: &Tree, p: &mut P) -> Tree {
        visit_tree(self, tree, p)
    }

    /// The ancestor stack, when this visitor tracks one.
    fn cursor(&mut self) -> Option<&mut Cursor> {
        None
    }

    /// This visitor as a derived-dialect visitor, if it is one.
    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<P>> {
        None
    }

    /// Called for a derived-dialect node when [`adapt_csharp`](Self::adapt_csharp)
    /// returns `None`. The default returns the node unchanged.
    fn visit_opaque(&mut self, tree: &Tree, _p: &mut P) -> Tree {
        tree.clone()
    }

    fn visit_space(&mut self, space: &Space, _p: &mut P) -> Space {
        space.clone()
    }

    fn visit_markers(&mut self, markers: &Markers, _p: &mut P) -> Markers {
        markers.clone()
    }

    for_each_java_kind!(visitor_methods!());
}

/// A visitor that also understands derived-dialect nodes.
///
/// Implementors return `Some(self)` from [`JavaVisitor::adapt_csharp`].
pub trait CSharpVisitor<P>: JavaVisitor<P> {
    for_each_csharp_kind!(visitor_methods!());
}

/// Dispatch a tree to its `visit_<kind>` method, maintaining the cursor.
pub fn visit_tree<V, P>(v: &mut V, tree: &Tree, p: &mut P) -> Tree
where
    V: JavaVisitor<P> + ?Sized,
{
    if let Some(cursor) = v.cursor() {
        cursor.push(tree.clone());
    }
    let result = match tree {
        Tree::J(node) => dispatch_java(v, node, p),
        Tree::Cs(node) => match v.adapt_csharp() {
            Some(cs_visitor) => dispatch_csharp(cs_visitor, node, p),
            None => v.visit_opaque(tree, p),
        },
    };
    if let Some(cursor) = v.cursor() {
        cursor.pop();
    }
    result
}

macro_rules! dispatch_fn {
    ($name:ident, $family:ident, $bound:ident, $doc:literal [ $($snake:ident : $node:ident),* $(,)? ]) => {
        paste::paste! {
            #[doc = $doc]
            pub fn $name<V, P>(v: &mut V, node: &$family, p: &mut P) -> Tree
            where
                V: $bound<P> + ?Sized,
            {
                match node {
                    $($family::$node(n) => v.[<visit_ $snake>](n, p),)*
                }
            }
        }
    };
}

for_each_java_kind!(dispatch_fn!(
    dispatch_java,
    J,
    JavaVisitor,
    "Route a base-language node to its `visit_<kind>` method."
));
for_each_csharp_kind!(dispatch_fn!(
    dispatch_csharp,
    Cs,
    CSharpVisitor,
    "Route a derived-dialect node to its `visit_<kind>` method."
));

/// A value that can be walked by a visitor and rebuilt from the result.
///
/// Nodes re-enter dispatch through [`JavaVisitor::visit`]; padding wrappers
/// walk their space and element; plain data comes back as a clone. Every
/// implementation returns a clone of `self` (sharing its allocation) when
/// nothing inside changed.
pub trait Walkable: Sized {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized;
}

impl Walkable for Tree {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        v.visit(self, p)
    }
}

impl Walkable for Space {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        v.visit_space(self, p)
    }
}

impl<T: Walkable + RefEq + Clone> Walkable for Option<T> {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        self.as_ref().map(|inner| inner.walk_with(v, p))
    }
}

impl<T: Walkable + RefEq + Clone> Walkable for Vec<T> {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        let walked: Vec<T> = self.iter().map(|item| item.walk_with(v, p)).collect();
        if walked.ref_eq(self) {
            return self.clone();
        }
        walked
    }
}

impl<T: Walkable + RefEq + Clone> Walkable for LeftPadded<T> {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        let before = v.visit_space(&self.before, p);
        let element = self.element.walk_with(v, p);
        if before.ref_eq(&self.before) && element.ref_eq(&self.element) {
            return self.clone();
        }
        LeftPadded {
            before,
            element,
            markers: self.markers.clone(),
        }
    }
}

impl<T: Walkable + RefEq + Clone> Walkable for RightPadded<T> {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        let element = self.element.walk_with(v, p);
        let after = v.visit_space(&self.after, p);
        if element.ref_eq(&self.element) && after.ref_eq(&self.after) {
            return self.clone();
        }
        RightPadded {
            element,
            after,
            markers: self.markers.clone(),
        }
    }
}

impl<T: Walkable + RefEq + Clone> Walkable for Container<T> {
    fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
    where
        V: JavaVisitor<P> + ?Sized,
    {
        let before = v.visit_space(&self.before, p);
        let elements = self.elements.walk_with(v, p);
        if before.ref_eq(&self.before) && elements.ref_eq(&self.elements) {
            return self.clone();
        }
        Container {
            before,
            elements,
            markers: self.markers.clone(),
        }
    }
}

macro_rules! walk_as_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walkable for $ty {
                fn walk_with<V, P>(&self, _v: &mut V, _p: &mut P) -> Self
                where
                    V: JavaVisitor<P> + ?Sized,
                {
                    self.clone()
                }
            }
        )*
    };
}

walk_as_leaf!(
    String,
    bool,
    JavaType,
    DirectiveLine,
    BinaryOperator,
    UnaryOperator,
    AssignmentOperator,
    PrimitiveKind,
    ModifierKind,
    ClassKind,
    AccessorKind,
    ConversionKind,
    OverloadableOperator,
    CsBinaryOperator,
    CsUnaryOperator,
    RelationalOperator,
    PatternOperator,
    KeywordKind,
    CheckedKind,
    YieldKind,
    ClassOrStructKind,
    PragmaWarningAction,
    NullableSetting,
    NullableTarget,
    LineDirectiveKind,
);

#[cfg(test)]
mod tests {
    use super::*;
    use lstkit_core::padding::RightPadded;

    /// Renames every identifier called `from`.
    struct Rename {
        from: &'static str,
        to: &'static str,
    }

    impl<P> JavaVisitor<P> for Rename {
        fn visit_identifier(&mut self, node: &Identifier, _p: &mut P) -> Tree {
            if node.simple_name() == self.from {
                node.with_simple_name(self.to.to_string()).into()
            } else {
                node.clone().into()
            }
        }
    }

    fn binary(left: &str, right: &str) -> Tree {
        Binary::new(
            Space::EMPTY,
            Identifier::build(left).into(),
            LeftPadded::new(Space::single(), BinaryOperator::Addition),
            Identifier::build(right).with_prefix(Space::single()).into(),
            None,
        )
        .into()
    }

    #[test]
    fn no_op_visit_is_identity() {
        let tree = binary("a", "b");
        let out = Rename { from: "zz", to: "yy" }.visit(&tree, &mut ());
        assert!(out.ptr_eq(&tree));
    }

    #[test]
    fn rewrite_keeps_untouched_siblings() {
        let tree = binary("a", "b");
        let out = Rename { from: "a", to: "c" }.visit(&tree, &mut ());
        assert!(!out.ptr_eq(&tree));
        assert_eq!(out.id(), tree.id());

        let before = tree.cast::<Binary>().unwrap();
        let after = out.cast::<Binary>().unwrap();
        assert!(after.right().ptr_eq(before.right()));
        assert_eq!(
            after.left().cast::<Identifier>().unwrap().simple_name(),
            "c"
        );
        assert_eq!(after.padding().operator().before, Space::single());
    }

    #[test]
    fn base_visitor_treats_derived_nodes_as_opaque() {
        let inner: Tree = Identifier::build("a").into();
        let await_expr: Tree = AwaitExpression::new(Space::EMPTY, inner, None).into();
        let block: Tree = Block::new(
            Space::EMPTY,
            vec![RightPadded::build(await_expr.clone())],
            Space::EMPTY,
        )
        .into();
        // The identifier inside the derived node is never reached.
        let out = Rename { from: "a", to: "b" }.visit(&block, &mut ());
        assert!(out.ptr_eq(&block));
    }

    #[test]
    #[should_panic(expected = "expected Identifier but found Literal")]
    fn wrong_kind_for_typed_slot_panics() {
        struct Bad;
        impl JavaVisitor<()> for Bad {
            fn visit_identifier(&mut self, _node: &Identifier, _p: &mut ()) -> Tree {
                Literal::build("1", PrimitiveKind::Int).into()
            }
        }
        let access: Tree = FieldAccess::new(
            Space::EMPTY,
            Identifier::build("a").into(),
            LeftPadded::build(Identifier::build("b")),
            None,
        )
        .into();
        // `FieldAccess::name` only holds identifiers.
        let _ = Bad.visit(&access, &mut ());
    }
}
