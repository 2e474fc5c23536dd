// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Derived-dialect nodes: namespaces, members, expressions, patterns and
//! preprocessor directives that have no base-language counterpart.

use lstkit_core::space::Space;
use lstkit_core::types::JavaType;

use super::java::{Block, ControlParentheses, Identifier, Lambda, Modifier, NewClass, TypeParameter};
use super::kinds::{
    AccessorKind, CheckedKind, ClassOrStructKind, ConversionKind, CsBinaryOperator,
    CsUnaryOperator, KeywordKind, LineDirectiveKind, NullableSetting, NullableTarget,
    OverloadableOperator, PatternOperator, PragmaWarningAction, RelationalOperator, YieldKind,
};
use crate::directive::DirectiveLine;
use crate::tree::Tree;

// ---------------------------------------------------------------------------
// Compilation units and namespaces
// ---------------------------------------------------------------------------

lst_node! {
    /// The root of a source file. `eof` holds the trailing whitespace and
    /// comments.
    pub struct CompilationUnit {
        [right_list] usings: Tree,
        [right_list] members: Tree,
        eof: Space,
    }
}

lst_node! {
    /// `global· using ·static alias· = namespace_or_type`
    pub struct UsingDirective {
        [right] global: bool,
        [left] is_static: bool,
        [right_opt] alias: Identifier,
        namespace_or_type: Tree,
    }
}

lst_node! {
    /// `namespace name· { usings members end}`
    pub struct BlockScopeNamespaceDeclaration {
        [right] name: Tree,
        [right_list] usings: Tree,
        [right_list] members: Tree,
        end: Space,
    }
}

lst_node! {
    /// `namespace name·;` followed by the rest of the file.
    pub struct FileScopeNamespaceDeclaration {
        [right] name: Tree,
        [right_list] usings: Tree,
        [right_list] members: Tree,
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

lst_node! {
    /// `modifiers type Iface.name { accessors } = initializer` or `=> body`.
    pub struct PropertyDeclaration {
        modifiers: Vec<Modifier>,
        type_expression: Tree,
        [right_opt] interface_specifier: Tree,
        name: Identifier,
        accessors: Option<Block>,
        [left_opt] expression_body: Tree,
        [left_opt] initializer: Tree,
    }
}

lst_node! {
    /// `get`, `set`, `init`, `add` or `remove`, with a block, an expression
    /// body, or neither.
    pub struct AccessorDeclaration {
        modifiers: Vec<Modifier>,
        [left] kind: AccessorKind,
        body: Option<Block>,
        [left_opt] expression_body: Tree,
    }
}

lst_node! {
    /// `modifiers type this[parameters] { accessors }`
    pub struct IndexerDeclaration {
        modifiers: Vec<Modifier>,
        type_expression: Tree,
        /// `this`, or `Iface.this` for an explicit implementation.
        indexer: Tree,
        [container] parameters: Tree,
        [left_opt] expression_body: Tree,
        accessors: Option<Block>,
    }
}

lst_node! {
    /// `modifiers event type Iface.name { add; remove; }`
    pub struct EventDeclaration {
        modifiers: Vec<Modifier>,
        [left] type_expression: Tree,
        [right_opt] interface_specifier: Tree,
        name: Identifier,
        accessors: Option<Block>,
    }
}

lst_node! {
    /// `modifiers delegate return_type name<T>(parameters) where ...`
    pub struct DelegateDeclaration {
        modifiers: Vec<Modifier>,
        [left] return_type: Tree,
        name: Identifier,
        [container_opt] type_parameters: TypeParameter,
        [container] parameters: Tree,
        constraints: Vec<Tree>,
    }
}

lst_node! {
    /// `modifiers· enum name : base_type { members }`; the name's left
    /// padding is the space ahead of `enum`.
    pub struct EnumDeclaration {
        modifiers: Vec<Modifier>,
        [left] name: Identifier,
        [left_opt] base_type: Tree,
        [container_opt] members: Tree,
    }
}

lst_node! {
    pub struct EnumMemberDeclaration {
        name: Identifier,
        [left_opt] initializer: Tree,
    }
}

lst_node! {
    /// `where type_parameter : constraints`
    pub struct TypeParameterConstraintClause {
        type_parameter: Identifier,
        [container] constraints: Tree,
    }
}

lst_node! {
    pub struct ClassOrStructConstraint {
        kind: ClassOrStructKind,
    }
}

lst_node! {
    /// `new·(·)`
    pub struct ConstructorConstraint {
        open_paren: Space,
        close_paren: Space,
    }
}

lst_node! {
    /// `modifiers return_type ·operator token(parameters) body`
    pub struct OperatorDeclaration {
        modifiers: Vec<Modifier>,
        return_type: Tree,
        /// Space before `operator`, and before the operator token.
        [left] operator_keyword: Space,
        operator_token: OverloadableOperator,
        [container] parameters: Tree,
        body: Option<Block>,
        [left_opt] expression_body: Tree,
    }
}

lst_node! {
    /// `modifiers implicit ·operator return_type(parameters) body`
    pub struct ConversionOperatorDeclaration {
        modifiers: Vec<Modifier>,
        [left] kind: ConversionKind,
        /// Space before `operator`.
        [left] return_type: Tree,
        [container] parameters: Tree,
        body: Option<Block>,
        [left_opt] expression_body: Tree,
    }
}

lst_node! {
    /// `modifiers ~name(parameters) body`
    pub struct DestructorDeclaration {
        modifiers: Vec<Modifier>,
        [left] name: Identifier,
        [container] parameters: Tree,
        body: Option<Block>,
        [left_opt] expression_body: Tree,
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

lst_node! {
    /// `left ·as right`, `left ·?? right`
    pub struct CsBinary {
        left: Tree,
        [left] operator: CsBinaryOperator,
        right: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `^i`, `*p`, `&x`, or the postfix `x!`.
    pub struct CsUnary {
        [left] operator: CsUnaryOperator,
        expression: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `start·..end`; either end may be absent.
    pub struct RangeExpression {
        [right_opt] start: Tree,
        end: Option<Tree>,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `$"text {expr} text"`. `start` and `end` are the delimiters
    /// (`$"`, `$@"`, `$"""`), `parts` alternate raw text and interpolations.
    pub struct InterpolatedString {
        start: String,
        parts: Vec<Tree>,
        end: String,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `{expression·, alignment· : format}`
    pub struct Interpolation {
        [right] expression: Tree,
        [right_opt] alignment: Tree,
        format: Option<String>,
    }
}

lst_node! {
    /// `(a, b)`
    pub struct TupleExpression {
        [container] arguments: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `name·: expression`
    pub struct NamedArgument {
        [right_opt] name: Identifier,
        expression: Tree,
    }
}

lst_node! {
    /// `[a, b, ..c]`
    pub struct CollectionExpression {
        [right_list] elements: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `{ a, b }` after an object creation.
    pub struct InitializerExpression {
        [right_list] expressions: Tree,
    }
}

lst_node! {
    /// `new { A = 1 }`
    pub struct AnonymousObjectCreationExpression {
        initializer: InitializerExpression,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// A lambda with modifiers or an explicit return type:
    /// `static int (x) => x`.
    pub struct CsLambda {
        modifiers: Vec<Modifier>,
        return_type: Option<Tree>,
        lambda_expression: Lambda,
    }
}

lst_node! {
    /// `expression ·is pattern`
    pub struct IsPattern {
        expression: Tree,
        [left] pattern: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `expression· switch { arms }`
    pub struct SwitchExpression {
        [right] expression: Tree,
        [container] arms: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `pattern ·when guard ·=> expression`
    pub struct SwitchExpressionArm {
        pattern: Tree,
        [left_opt] when_expression: Tree,
        [left] expression: Tree,
    }
}

lst_node! {
    pub struct AwaitExpression {
        expression: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `default` or `default(T)`.
    pub struct DefaultExpression {
        [container_opt] type_operator: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// Object creation with an optional `{ ... }` initializer.
    pub struct CsNewClass {
        new_class_core: NewClass,
        initializer: Option<InitializerExpression>,
    }
}

lst_node! {
    /// A contextual keyword standing alone: `ref`, `out`, `await`, `case`.
    pub struct Keyword {
        kind: KeywordKind,
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

lst_node! {
    /// `await· using (expression) statement·`
    pub struct UsingStatement {
        [right_opt] await_keyword: Keyword,
        expression: ControlParentheses,
        [right] statement: Tree,
    }
}

lst_node! {
    /// `fixed (declarations) block`
    pub struct FixedStatement {
        declarations: ControlParentheses,
        block: Block,
    }
}

lst_node! {
    /// `checked { ... }` or `unchecked { ... }`.
    pub struct CheckedStatement {
        kind: CheckedKind,
        block: Block,
    }
}

lst_node! {
    pub struct UnsafeStatement {
        block: Block,
    }
}

lst_node! {
    /// `yield ·return expression` or `yield ·break`.
    pub struct Yield {
        [left] kind: YieldKind,
        expression: Option<Tree>,
    }
}

lst_node! {
    /// `goto label`, `goto case value`, `goto default`.
    pub struct GotoStatement {
        case_or_default: Option<Keyword>,
        target: Option<Tree>,
    }
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

lst_node! {
    pub struct ConstantPattern {
        value: Tree,
    }
}

lst_node! {
    /// `_`
    pub struct DiscardPattern {
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `[p1, p2, ..] designation`
    pub struct ListPattern {
        [container] patterns: Tree,
        designation: Option<Tree>,
    }
}

lst_node! {
    /// `..` or `.. pattern` inside a list pattern.
    pub struct SlicePattern {
        pattern: Option<Tree>,
    }
}

lst_node! {
    /// `Type (positional) { property } designation`
    pub struct RecursivePattern {
        type_qualifier: Option<Tree>,
        [container_opt] positional_pattern: Tree,
        [container_opt] property_pattern: Tree,
        designation: Option<Tree>,
    }
}

lst_node! {
    /// `name·: pattern`
    pub struct Subpattern {
        [right_opt] name: Tree,
        pattern: Tree,
    }
}

lst_node! {
    /// `< value`, `>= value`
    pub struct RelationalPattern {
        operator: RelationalOperator,
        value: Tree,
    }
}

lst_node! {
    pub struct TypePattern {
        type_identifier: Tree,
        designation: Option<Tree>,
    }
}

lst_node! {
    /// `left ·and right`, `left ·or right`
    pub struct BinaryPattern {
        left: Tree,
        [left] operator: PatternOperator,
        right: Tree,
    }
}

lst_node! {
    /// `not pattern`
    pub struct UnaryPattern {
        pattern: Tree,
    }
}

lst_node! {
    pub struct SingleVariableDesignation {
        name: Identifier,
    }
}

// ---------------------------------------------------------------------------
// Preprocessor directives
// ---------------------------------------------------------------------------

lst_node! {
    /// `#·pragma· warning ·disable CS0168·, CS0219`
    pub struct PragmaWarningDirective {
        after_hash: Space,
        before_warning: Space,
        [left] action: PragmaWarningAction,
        [right_list] warning_codes: Tree,
    }
}

lst_node! {
    /// `#nullable ·enable ·warnings`
    pub struct NullableDirective {
        [left] setting: NullableSetting,
        [left_opt] target: NullableTarget,
    }
}

lst_node! {
    /// `#region text`; `text` keeps its leading space.
    pub struct RegionDirective {
        text: String,
    }
}

lst_node! {
    pub struct EndRegionDirective {
        text: String,
    }
}

lst_node! {
    pub struct DefineDirective {
        symbol: Identifier,
    }
}

lst_node! {
    pub struct UndefDirective {
        symbol: Identifier,
    }
}

lst_node! {
    pub struct ErrorDirective {
        message: String,
    }
}

lst_node! {
    pub struct WarningDirective {
        message: String,
    }
}

lst_node! {
    /// `#line ·hidden`, `#line ·default`, `#line 200 "file.cs"`.
    pub struct LineDirective {
        [left] kind: LineDirectiveKind,
        line: Option<Tree>,
        file: Option<Tree>,
    }
}

lst_node! {
    /// A source file with `#if` regions, parsed once per branch.
    ///
    /// `directive_lines` records every `#if`/`#elif`/`#else`/`#endif` line
    /// with its 1-based line number. Each branch is a complete compilation
    /// unit of the same source with a different set of arms selected;
    /// printing folds them back into one text.
    pub struct ConditionalDirective {
        directive_lines: Vec<DirectiveLine>,
        branches: Vec<CompilationUnit>,
    }
}

impl CompilationUnit {
    /// A unit with no usings, the given members, and an empty end of file.
    pub fn build(members: Vec<Tree>) -> Self {
        CompilationUnit::new(
            Space::EMPTY,
            Vec::new(),
            members
                .into_iter()
                .map(lstkit_core::padding::RightPadded::build)
                .collect(),
            Space::EMPTY,
        )
    }
}
