// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree builders shared by the integration tests.
//!
//! There is no concrete parser in this crate, so fixtures are assembled by
//! hand the way a parser would build them: every byte of the expected source
//! is stored in exactly one `Space` or token.

#![allow(dead_code)]

use lstkit_core::padding::{Container, LeftPadded, RightPadded};
use lstkit_core::space::Space;
use lstkit_cst::nodes::*;
use lstkit_cst::tree::Tree;

pub fn sp(text: &str) -> Space {
    Space::format(text)
}

pub fn ident(name: &str, prefix: &str) -> Identifier {
    Identifier::build(name).with_prefix(sp(prefix))
}

pub fn int(value: &str, prefix: &str) -> Tree {
    Literal::build(value, PrimitiveKind::Int)
        .with_prefix(sp(prefix))
        .into()
}

pub fn string_literal(value: &str, prefix: &str) -> Tree {
    Literal::build(value, PrimitiveKind::String)
        .with_prefix(sp(prefix))
        .into()
}

pub fn primitive(kind: PrimitiveKind, prefix: &str) -> Tree {
    Primitive::new(sp(prefix), kind).into()
}

pub fn modifier(kind: ModifierKind, prefix: &str) -> Modifier {
    Modifier::build(sp(prefix), kind)
}

pub fn rp<T>(element: T, after: &str) -> RightPadded<T> {
    RightPadded::new(element, sp(after))
}

pub fn lp<T>(before: &str, element: T) -> LeftPadded<T> {
    LeftPadded::new(sp(before), element)
}

/// `modifiers type name = initializer`
pub fn field(
    prefix: &str,
    modifiers: Vec<Modifier>,
    ty: Tree,
    name: &str,
    initializer: Option<Tree>,
) -> Tree {
    let variable = NamedVariable::new(
        Space::EMPTY,
        ident(name, " "),
        initializer.map(|init| lp(" ", init)),
        None,
    );
    VariableDeclarations::new(sp(prefix), modifiers, Some(ty), vec![rp(variable, "")]).into()
}

/// `type name` as a method parameter.
pub fn parameter(ty: Tree, name: &str) -> Tree {
    let variable = NamedVariable::new(Space::EMPTY, ident(name, " "), None, None);
    VariableDeclarations::new(Space::EMPTY, Vec::new(), Some(ty), vec![rp(variable, "")]).into()
}

pub fn block(prefix: &str, statements: Vec<Tree>, end: &str) -> Block {
    Block::new(
        sp(prefix),
        statements.into_iter().map(|s| rp(s, "")).collect(),
        sp(end),
    )
}

pub const GREETER_SOURCE: &str = r#"using System;

namespace Demo
{
    // Greets people.
    public class Greeter : IGreeter
    {
        private int count = 0;

        public string Greet(string name)
        {
            count += 1;
            return $"Hello, {name}!";
        }
    }
}
"#;

/// The method body of [`GREETER_SOURCE`]'s `Greet`.
pub fn greet_method() -> MethodDeclaration {
    let increment: Tree = AssignmentOperation::new(
        sp("\n            "),
        ident("count", "").into(),
        lp(" ", AssignmentOperator::Addition),
        int("1", " "),
        None,
    )
    .into();
    let interpolation: Tree = Interpolation::new(
        Space::EMPTY,
        rp(Tree::from(ident("name", "")), ""),
        None,
        None,
    )
    .into();
    let greeting: Tree = InterpolatedString::new(
        sp(" "),
        "$\"".to_string(),
        vec![
            string_literal("Hello, ", ""),
            interpolation,
            string_literal("!", ""),
        ],
        "\"".to_string(),
        None,
    )
    .into();
    let ret: Tree = Return::new(sp("\n            "), Some(greeting)).into();

    MethodDeclaration::new(
        sp("\n\n        "),
        vec![modifier(ModifierKind::Public, "")],
        None,
        Some(primitive(PrimitiveKind::String, " ")),
        ident("Greet", " "),
        Container::new(
            Space::EMPTY,
            vec![rp(parameter(primitive(PrimitiveKind::String, ""), "name"), "")],
        ),
        Vec::new(),
        Some(block("\n        ", vec![increment, ret], "\n        ")),
        None,
        None,
    )
}

pub fn greeter_class() -> ClassDeclaration {
    let count = field(
        "\n        ",
        vec![modifier(ModifierKind::Private, "")],
        primitive(PrimitiveKind::Int, " "),
        "count",
        Some(int("0", " ")),
    );
    ClassDeclaration::new(
        sp("\n    // Greets people.\n    "),
        vec![modifier(ModifierKind::Public, "")],
        lp(" ", ClassKind::Class),
        ident("Greeter", " "),
        None,
        None,
        Some(lp(" ", Tree::from(ident("IGreeter", " ")))),
        None,
        Vec::new(),
        Some(block(
            "\n    ",
            vec![count, greet_method().into()],
            "\n    ",
        )),
        None,
    )
}

/// A hand-built tree whose print is [`GREETER_SOURCE`].
pub fn greeter_unit() -> CompilationUnit {
    let using: Tree = UsingDirective::new(
        Space::EMPTY,
        rp(false, ""),
        lp("", false),
        None,
        ident("System", " ").into(),
    )
    .into();
    let namespace: Tree = BlockScopeNamespaceDeclaration::new(
        sp("\n\n"),
        rp(Tree::from(ident("Demo", " ")), "\n"),
        Vec::new(),
        vec![rp(Tree::from(greeter_class()), "")],
        sp("\n"),
    )
    .into();
    CompilationUnit::new(
        Space::EMPTY,
        vec![rp(using, "")],
        vec![rp(namespace, "")],
        sp("\n"),
    )
}

fn name(text: &str) -> Tree {
    Identifier::build(text).into()
}

fn empty_block() -> Block {
    Block::new(Space::EMPTY, Vec::new(), Space::EMPTY)
}

fn condition(text: &str) -> ControlParentheses {
    ControlParentheses::new(Space::EMPTY, RightPadded::build(name(text)))
}

/// One minimal node of every derived-dialect kind.
pub fn every_csharp_node() -> Vec<Tree> {
    let e = || Space::EMPTY;
    vec![
        CompilationUnit::build(Vec::new()).into(),
        UsingDirective::new(
            e(),
            RightPadded::build(false),
            LeftPadded::build(false),
            None,
            name("System"),
        )
        .into(),
        BlockScopeNamespaceDeclaration::new(
            e(),
            RightPadded::build(name("N")),
            Vec::new(),
            Vec::new(),
            e(),
        )
        .into(),
        FileScopeNamespaceDeclaration::new(e(), RightPadded::build(name("N")), Vec::new(), Vec::new())
            .into(),
        PropertyDeclaration::new(e(), Vec::new(), name("int"), None, ident("P", " "), None, None, None)
            .into(),
        AccessorDeclaration::new(e(), Vec::new(), LeftPadded::build(AccessorKind::Get), None, None)
            .into(),
        IndexerDeclaration::new(
            e(),
            Vec::new(),
            name("int"),
            name("this"),
            Container::empty(),
            None,
            None,
        )
        .into(),
        EventDeclaration::new(
            e(),
            Vec::new(),
            LeftPadded::build(name("H")),
            None,
            ident("E", " "),
            None,
        )
        .into(),
        DelegateDeclaration::new(
            e(),
            Vec::new(),
            LeftPadded::build(name("void")),
            ident("D", " "),
            None,
            Container::empty(),
            Vec::new(),
        )
        .into(),
        EnumDeclaration::new(e(), Vec::new(), LeftPadded::build(ident("E", " ")), None, None).into(),
        EnumMemberDeclaration::new(e(), ident("A", ""), None).into(),
        TypeParameterConstraintClause::new(e(), ident("T", " "), Container::empty()).into(),
        ClassOrStructConstraint::new(e(), ClassOrStructKind::Class).into(),
        ConstructorConstraint::new(e(), e(), e()).into(),
        OperatorDeclaration::new(
            e(),
            Vec::new(),
            name("int"),
            LeftPadded::build(e()),
            OverloadableOperator::Plus,
            Container::empty(),
            None,
            None,
        )
        .into(),
        ConversionOperatorDeclaration::new(
            e(),
            Vec::new(),
            LeftPadded::build(ConversionKind::Implicit),
            LeftPadded::build(name("int")),
            Container::empty(),
            None,
            None,
        )
        .into(),
        DestructorDeclaration::new(
            e(),
            Vec::new(),
            LeftPadded::build(ident("C", "")),
            Container::empty(),
            None,
            None,
        )
        .into(),
        CsBinary::new(
            e(),
            name("a"),
            LeftPadded::build(CsBinaryOperator::NullCoalescing),
            name("b"),
            None,
        )
        .into(),
        CsUnary::new(e(), LeftPadded::build(CsUnaryOperator::FromEnd), name("a"), None).into(),
        RangeExpression::new(e(), None, None, None).into(),
        InterpolatedString::new(e(), "$\"".to_string(), Vec::new(), "\"".to_string(), None).into(),
        Interpolation::new(e(), RightPadded::build(name("x")), None, None).into(),
        TupleExpression::new(e(), Container::empty(), None).into(),
        NamedArgument::new(e(), None, name("x")).into(),
        CollectionExpression::new(e(), Vec::new(), None).into(),
        InitializerExpression::new(e(), Vec::new()).into(),
        AnonymousObjectCreationExpression::new(e(), InitializerExpression::new(e(), Vec::new()), None)
            .into(),
        CsLambda::new(
            e(),
            Vec::new(),
            None,
            Lambda::new(
                e(),
                LambdaParameters::new(e(), true, Vec::new()),
                e(),
                name("x"),
                None,
            ),
        )
        .into(),
        IsPattern::new(e(), name("x"), LeftPadded::build(name("T")), None).into(),
        SwitchExpression::new(e(), RightPadded::build(name("x")), Container::empty(), None).into(),
        SwitchExpressionArm::new(
            e(),
            DiscardPattern::new(e(), None).into(),
            None,
            LeftPadded::build(name("x")),
        )
        .into(),
        AwaitExpression::new(e(), name("t"), None).into(),
        DefaultExpression::new(e(), None, None).into(),
        CsNewClass::new(
            e(),
            NewClass::new(e(), None, e(), Some(name("C")), Some(Container::empty()), None, None),
            None,
        )
        .into(),
        Keyword::new(e(), KeywordKind::Ref).into(),
        UsingStatement::new(
            e(),
            None,
            condition("x"),
            RightPadded::build(Tree::from(empty_block())),
        )
        .into(),
        FixedStatement::new(e(), condition("p"), empty_block()).into(),
        CheckedStatement::new(e(), CheckedKind::Checked, empty_block()).into(),
        UnsafeStatement::new(e(), empty_block()).into(),
        Yield::new(e(), LeftPadded::build(YieldKind::Break), None).into(),
        GotoStatement::new(e(), None, Some(name("L"))).into(),
        ConstantPattern::new(e(), name("x")).into(),
        DiscardPattern::new(e(), None).into(),
        ListPattern::new(e(), Container::empty(), None).into(),
        SlicePattern::new(e(), None).into(),
        RecursivePattern::new(e(), None, None, None, None).into(),
        Subpattern::new(e(), None, name("x")).into(),
        RelationalPattern::new(e(), RelationalOperator::LessThan, name("x")).into(),
        TypePattern::new(e(), name("T"), None).into(),
        BinaryPattern::new(e(), name("a"), LeftPadded::build(PatternOperator::Or), name("b")).into(),
        UnaryPattern::new(e(), name("a")).into(),
        SingleVariableDesignation::new(e(), ident("v", "")).into(),
        PragmaWarningDirective::new(
            e(),
            e(),
            sp(" "),
            LeftPadded::new(sp(" "), PragmaWarningAction::Disable),
            Vec::new(),
        )
        .into(),
        NullableDirective::new(e(), LeftPadded::build(NullableSetting::Enable), None).into(),
        RegionDirective::new(e(), String::new()).into(),
        EndRegionDirective::new(e(), String::new()).into(),
        DefineDirective::new(e(), ident("X", " ")).into(),
        UndefDirective::new(e(), ident("X", " ")).into(),
        ErrorDirective::new(e(), String::new()).into(),
        WarningDirective::new(e(), String::new()).into(),
        LineDirective::new(e(), LeftPadded::build(LineDirectiveKind::Hidden), None, None).into(),
        ConditionalDirective::new(e(), Vec::new(), Vec::new()).into(),
    ]
}
