// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor dispatch across both dialects.

mod common;

use std::collections::BTreeSet;

use common::*;
use lstkit_core::space::Space;
use lstkit_cst::nodes::*;
use lstkit_cst::{print_tree, CSharpVisitor, Cursor, JavaVisitor, Tree, TreeElement};

/// Walks everything and changes nothing.
struct Noop;

impl JavaVisitor<()> for Noop {
    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
        Some(self)
    }
}

impl CSharpVisitor<()> for Noop {}

/// Knows only the base language.
#[derive(Default)]
struct BaseOnly {
    opaque: usize,
    identifiers: usize,
}

impl JavaVisitor<()> for BaseOnly {
    fn visit_opaque(&mut self, tree: &Tree, _p: &mut ()) -> Tree {
        self.opaque += 1;
        tree.clone()
    }

    fn visit_identifier(&mut self, node: &Identifier, p: &mut ()) -> Tree {
        self.identifiers += 1;
        node.walk_children(self, p).into()
    }
}

struct Rename {
    from: &'static str,
    to: &'static str,
}

impl JavaVisitor<()> for Rename {
    fn visit_identifier(&mut self, node: &Identifier, _p: &mut ()) -> Tree {
        if node.simple_name() == self.from {
            node.with_simple_name(self.to.to_string()).into()
        } else {
            node.clone().into()
        }
    }

    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
        Some(self)
    }
}

impl CSharpVisitor<()> for Rename {}

fn every_csharp_node_in_a_block() -> Tree {
    block("", every_csharp_node(), "").into()
}

#[test]
fn noop_visit_shares_every_level() {
    let unit: Tree = greeter_unit().into();
    let out = Noop.visit(&unit, &mut ());
    assert!(out.ptr_eq(&unit));

    let class: Tree = greeter_class().into();
    assert!(Noop.visit(&class, &mut ()).ptr_eq(&class));
}

#[test]
fn rename_rebuilds_only_the_changed_spine() {
    let unit = greeter_unit();
    let mut rename = Rename {
        from: "count",
        to: "total",
    };
    let out = CompilationUnit::from_tree(rename.visit(&unit.clone().into(), &mut ()));

    assert!(!out.ptr_eq(&unit));
    assert_eq!(out.id(), unit.id());
    assert_eq!(
        print_tree(&out.clone().into()),
        GREETER_SOURCE.replace("count", "total")
    );
    // The using directive holds no `count` and is shared.
    assert!(out.usings()[0].ptr_eq(&unit.usings()[0]));
}

#[test]
fn base_only_visitor_treats_derived_nodes_as_opaque() {
    let tree = every_csharp_node_in_a_block();
    let mut visitor = BaseOnly::default();
    let out = visitor.visit(&tree, &mut ());
    assert!(out.ptr_eq(&tree));
    assert_eq!(visitor.opaque, every_csharp_node().len());
    // Identifiers inside derived nodes are never reached.
    assert_eq!(visitor.identifiers, 0);
}

#[test]
fn base_only_visitor_on_a_derived_root() {
    let unit: Tree = greeter_unit().into();
    let mut visitor = BaseOnly::default();
    assert!(visitor.visit(&unit, &mut ()).ptr_eq(&unit));
    assert_eq!(visitor.opaque, 1);
}

#[test]
fn adapting_visitor_reaches_every_derived_kind() {
    #[derive(Default)]
    struct Kinds {
        seen: BTreeSet<&'static str>,
    }

    impl JavaVisitor<()> for Kinds {
        fn visit(&mut self, tree: &Tree, p: &mut ()) -> Tree {
            if tree.is_csharp() {
                self.seen.insert(tree.kind_name());
            }
            lstkit_cst::visit_tree(self, tree, p)
        }

        fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
            Some(self)
        }
    }

    impl CSharpVisitor<()> for Kinds {}

    let nodes = every_csharp_node();
    let expected: BTreeSet<&'static str> = nodes.iter().map(Tree::kind_name).collect();
    assert_eq!(expected.len(), nodes.len(), "one sample per kind");

    let mut kinds = Kinds::default();
    let tree = every_csharp_node_in_a_block();
    assert!(kinds.visit(&tree, &mut ()).ptr_eq(&tree));
    assert_eq!(kinds.seen, expected);
}

#[test]
fn every_derived_kind_prints() {
    for node in every_csharp_node() {
        let _ = print_tree(&node);
    }
}

#[test]
fn cursor_reports_enclosing_nodes() {
    #[derive(Default)]
    struct Enclosing {
        cursor: Cursor,
        found: Vec<(String, Option<String>)>,
    }

    impl JavaVisitor<()> for Enclosing {
        fn cursor(&mut self) -> Option<&mut Cursor> {
            Some(&mut self.cursor)
        }

        fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
            Some(self)
        }

        fn visit_identifier(&mut self, node: &Identifier, p: &mut ()) -> Tree {
            let class = self
                .cursor
                .first_enclosing::<ClassDeclaration>()
                .map(|class| class.name().simple_name().clone());
            self.found.push((node.simple_name().clone(), class));
            node.walk_children(self, p).into()
        }
    }

    impl CSharpVisitor<()> for Enclosing {}

    let mut visitor = Enclosing::default();
    let _ = visitor.visit(&greeter_unit().into(), &mut ());
    assert_eq!(visitor.cursor.depth(), 0);

    let lookup = |name: &str| {
        visitor
            .found
            .iter()
            .find(|(found, _)| found == name)
            .map(|(_, class)| class.clone())
    };
    assert_eq!(lookup("System"), Some(None));
    assert_eq!(lookup("Demo"), Some(None));
    assert_eq!(lookup("count"), Some(Some("Greeter".to_string())));
    assert_eq!(lookup("name"), Some(Some("Greeter".to_string())));
}

#[test]
fn space_hook_sees_every_space() {
    struct StripComments;

    impl JavaVisitor<()> for StripComments {
        fn visit_space(&mut self, space: &Space, _p: &mut ()) -> Space {
            if space.comments().is_empty() {
                space.clone()
            } else {
                Space::format(space.whitespace())
            }
        }

        fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
            Some(self)
        }
    }

    impl CSharpVisitor<()> for StripComments {}

    let out = StripComments.visit(&greeter_unit().into(), &mut ());
    let printed = print_tree(&out);
    assert!(!printed.contains("Greets people"));
    assert!(printed.contains("public class Greeter : IGreeter"));
}
