// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Round-trip tests: printing a tree reproduces its source byte for byte.
//!
//! # Test Organization
//!
//! - Hand-built fixtures from `common`, printed whole and in parts
//! - Raw-text parsing, with and without conditional regions
//! - Serialized trees printed after deserialization

mod common;

use common::*;
use difference::assert_diff;
use itertools::Itertools;
use lstkit_core::padding::Container;
use lstkit_core::space::Space;
use lstkit_core::ParseOptions;
use lstkit_cst::nodes::*;
use lstkit_cst::{parse_source, print_tree, Printer, RawTextParser, Tree};

/// Helper to visualize whitespace differences in test output
fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

fn assert_prints(tree: &Tree, expected: &str) {
    let generated = print_tree(tree);
    if generated != expected {
        let got = visualize(&generated);
        let expected = visualize(expected);
        assert_diff!(expected.as_ref(), got.as_ref(), "", 0);
    }
}

fn assert_raw_roundtrip(source: &str) {
    let parsed = parse_source(&RawTextParser, source, &ParseOptions::default())
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_prints(&parsed.compilation_unit.into(), source);
}

// =============================================================================
// Hand-built fixtures
// =============================================================================

#[test]
fn greeter_prints_verbatim() {
    assert_prints(&greeter_unit().into(), GREETER_SOURCE);
}

#[test]
fn subtrees_print_their_own_text() {
    let method = print_tree(&greet_method().into());
    assert!(method.starts_with("\n\n        public string Greet(string name)"));
    assert!(GREETER_SOURCE.contains(&method));

    let class = print_tree(&greeter_class().into());
    assert!(class.ends_with("    }"));
    assert!(GREETER_SOURCE.contains(&class));
}

#[test]
fn comments_stay_with_their_node() {
    let class = greeter_class();
    assert_eq!(class.prefix().comments().len(), 1);
    let moved = class.with_prefix(Space::format("\n    "));
    let printed = print_tree(&moved.into());
    assert!(!printed.contains("Greets people"));
}

#[test]
fn renaming_touches_only_the_name() {
    let class = greeter_class();
    let renamed = class.with_name(class.name().with_simple_name("Welcomer".to_string()));
    let expected = print_tree(&class.clone().into()).replace("class Greeter", "class Welcomer");
    assert_prints(&renamed.into(), &expected);
}

#[test]
fn absent_and_empty_type_arguments_differ() {
    let call = |type_parameters: Option<Container<Tree>>| -> Tree {
        MethodInvocation::new(
            Space::EMPTY,
            None,
            type_parameters,
            Identifier::build("f"),
            Container::empty(),
            None,
        )
        .into()
    };
    assert_prints(&call(None), "f()");
    assert_prints(&call(Some(Container::empty())), "f<>()");
    assert_prints(
        &call(Some(Container::build(vec![Identifier::build("T").into()]))),
        "f<T>()",
    );
}

#[test]
fn base_dialect_spelling() {
    let body = block(
        "",
        vec![field(
            " ",
            Vec::new(),
            primitive(PrimitiveKind::Boolean, ""),
            "ok",
            Some(Literal::build("true", PrimitiveKind::Boolean).with_prefix(sp(" ")).into()),
        )],
        "\n",
    );
    let tree: Tree = body.into();
    assert_eq!(Printer::new(Dialect::Java).print(&tree), "{ boolean ok = true;\n}");
    assert_eq!(print_tree(&tree), "{ bool ok = true;\n}");
}

// =============================================================================
// Raw text
// =============================================================================

#[test]
fn raw_text_without_directives() {
    assert_raw_roundtrip("");
    assert_raw_roundtrip("\n\n");
    assert_raw_roundtrip("class A { }");
    assert_raw_roundtrip(GREETER_SOURCE);
}

#[test]
fn raw_text_with_directives() {
    assert_raw_roundtrip("#if DEBUG\nlog();\n#endif\nrun();\n");
    assert_raw_roundtrip("#if A\na();\n#elif B\nb();\n#else\nc();\n#endif");
    assert_raw_roundtrip(
        "class C\n{\n#if A\n    int x;\n#if B\n    int y;\n#else\n    int z;\n#endif\n#endif\n}\n",
    );
    assert_raw_roundtrip("  #if X // trailing\r\nwin();\r\n  #endif\r\n");
}

#[test]
fn raw_text_keeps_comments_and_blank_lines() {
    let source = "\n// header\n\n/* block\n   comment */\nusing System;\n\n\n";
    assert_raw_roundtrip(source);
}

// =============================================================================
// Serialized form
// =============================================================================

#[test]
fn deserialized_tree_prints_the_same() {
    let tree: Tree = greeter_unit().into();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Tree = serde_json::from_str(&json).unwrap();
    assert!(back.structurally_eq(&tree));
    assert_eq!(back.id(), tree.id());
    assert_prints(&back, GREETER_SOURCE);
}
