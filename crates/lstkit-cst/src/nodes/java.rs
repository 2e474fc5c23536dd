// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Base-language nodes.
//!
//! Field comments give the source shape each node prints as; `·` marks a
//! padding [`Space`](lstkit_core::space::Space) boundary.

use lstkit_core::space::Space;
use lstkit_core::types::JavaType;

use super::kinds::{
    AssignmentOperator, BinaryOperator, ClassKind, ModifierKind, PrimitiveKind, UnaryOperator,
};
use crate::tree::Tree;

lst_node! {
    /// A simple name.
    pub struct Identifier {
        simple_name: String,
        ty: Option<JavaType>,
    }
}

impl Identifier {
    pub fn build(simple_name: impl Into<String>) -> Self {
        Identifier::new(Space::EMPTY, simple_name.into(), None)
    }
}

lst_node! {
    /// A literal, stored as its exact source text.
    pub struct Literal {
        value_source: String,
        kind: PrimitiveKind,
    }
}

impl Literal {
    pub fn build(value_source: impl Into<String>, kind: PrimitiveKind) -> Self {
        Literal::new(Space::EMPTY, value_source.into(), kind)
    }
}

lst_node! {
    /// A built-in keyword type: `int`, `bool`, `void`.
    pub struct Primitive {
        kind: PrimitiveKind,
    }
}

lst_node! {
    /// `left ·op right`
    pub struct Binary {
        left: Tree,
        [left] operator: BinaryOperator,
        right: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `op expression` or, for postfix operators, `expression ·op`.
    pub struct Unary {
        [left] operator: UnaryOperator,
        expression: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `variable ·= assignment`
    pub struct Assignment {
        variable: Tree,
        [left] assignment: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `variable ·op= assignment`
    pub struct AssignmentOperation {
        variable: Tree,
        [left] operator: AssignmentOperator,
        assignment: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `target ·.name`
    pub struct FieldAccess {
        target: Tree,
        [left] name: Identifier,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `select· . name <T> (arguments)`; type arguments precede the name in
    /// the base language and follow it in the derived dialect.
    pub struct MethodInvocation {
        [right_opt] select: Tree,
        [container_opt] type_parameters: Tree,
        name: Identifier,
        [container] arguments: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `enclosing· . new clazz (arguments) body`
    pub struct NewClass {
        [right_opt] enclosing: Tree,
        /// Space before `new` when there is an enclosing expression.
        new_keyword: Space,
        clazz: Option<Tree>,
        [container_opt] arguments: Tree,
        body: Option<Block>,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `(tree·)`
    pub struct Parentheses {
        [right] tree: Tree,
    }
}

lst_node! {
    /// The parenthesized condition of `if`, `while`, `using`, or a cast type.
    pub struct ControlParentheses {
        [right] tree: Tree,
    }
}

lst_node! {
    /// `condition ·? true_part ·: false_part`
    pub struct Ternary {
        condition: Tree,
        [left] true_part: Tree,
        [left] false_part: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `indexed[dimension, ...]`
    pub struct ArrayAccess {
        indexed: Tree,
        [container] dimension: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `element_type·[·]`; extra ranks (`[,,]`) live in a
    /// `MultiDimensionalArray` marker.
    pub struct ArrayType {
        element_type: Tree,
        [left] dimension: Space,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `(clazz) expression`
    pub struct TypeCast {
        clazz: ControlParentheses,
        expression: Tree,
    }
}

lst_node! {
    /// `parameters ·-> body` (`=>` in the derived dialect).
    pub struct Lambda {
        parameters: LambdaParameters,
        arrow: Space,
        body: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `(a, b)` or a single unparenthesized `a`.
    pub struct LambdaParameters {
        parenthesized: bool,
        [right_list] parameters: Tree,
    }
}

lst_node! {
    /// `{ statements· }`
    pub struct Block {
        [right_list] statements: Tree,
        end: Space,
    }
}

lst_node! {
    /// `if (condition) then_part· else_part`
    pub struct If {
        if_condition: ControlParentheses,
        [right] then_part: Tree,
        else_part: Option<Else>,
    }
}

lst_node! {
    /// `else body·`
    pub struct Else {
        [right] body: Tree,
    }
}

lst_node! {
    /// `while (condition) body·`
    pub struct WhileLoop {
        condition: ControlParentheses,
        [right] body: Tree,
    }
}

lst_node! {
    pub struct Return {
        expression: Option<Tree>,
    }
}

lst_node! {
    /// `throw exception`; a bare rethrow holds an [`Empty`].
    pub struct Throw {
        exception: Tree,
    }
}

lst_node! {
    pub struct Break {
        label: Option<Identifier>,
    }
}

lst_node! {
    pub struct Continue {
        label: Option<Identifier>,
    }
}

lst_node! {
    /// Nothing. A lone `;` in statement position, or the content of `( )`.
    pub struct Empty {}
}

impl Empty {
    pub fn build(prefix: Space) -> Self {
        Empty::new(prefix)
    }
}

lst_node! {
    /// `label·: statement`
    pub struct Label {
        [right] label: Identifier,
        statement: Tree,
    }
}

lst_node! {
    /// `modifiers type_expression a = 1·, b·`
    pub struct VariableDeclarations {
        modifiers: Vec<Modifier>,
        type_expression: Option<Tree>,
        [right_list] variables: NamedVariable,
    }
}

lst_node! {
    /// `name ·= initializer`
    pub struct NamedVariable {
        name: Identifier,
        [left_opt] initializer: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    pub struct Modifier {
        kind: ModifierKind,
    }
}

impl Modifier {
    pub fn build(prefix: Space, kind: ModifierKind) -> Self {
        Modifier::new(prefix, kind)
    }
}

lst_node! {
    /// A method or constructor. `return_type` is absent for constructors.
    pub struct MethodDeclaration {
        modifiers: Vec<Modifier>,
        [container_opt] type_parameters: TypeParameter,
        return_type: Option<Tree>,
        name: Identifier,
        [container] parameters: Tree,
        /// `where` clauses of the derived dialect.
        constraints: Vec<Tree>,
        body: Option<Block>,
        /// `·=> expression`
        [left_opt] expression_body: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// A class, interface, enum or record. A value type carries a `Struct`
    /// marker.
    pub struct ClassDeclaration {
        modifiers: Vec<Modifier>,
        [left] kind: ClassKind,
        name: Identifier,
        [container_opt] type_parameters: TypeParameter,
        /// `record R(int X)`
        [container_opt] primary_constructor: Tree,
        [left_opt] extends: Tree,
        [container_opt] implements: Tree,
        constraints: Vec<Tree>,
        body: Option<Block>,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// `name extends A & B` in the base language.
    pub struct TypeParameter {
        modifiers: Vec<Modifier>,
        name: Tree,
        [container_opt] bounds: Tree,
    }
}

lst_node! {
    /// `clazz<type_parameters>`
    pub struct ParameterizedType {
        clazz: Tree,
        [container_opt] type_parameters: Tree,
        ty: Option<JavaType>,
    }
}

lst_node! {
    /// Source text the parser did not model, printed verbatim.
    pub struct Unknown {
        text: String,
    }
}

impl Unknown {
    pub fn build(prefix: Space, text: impl Into<String>) -> Self {
        Unknown::new(prefix, text.into())
    }
}
