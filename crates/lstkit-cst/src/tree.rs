// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The closed node enum.
//!
//! [`Tree`] is a two-level sum type: the dialect family ([`J`] or [`Cs`]),
//! then the node kind. Each node type converts into a `Tree` and back through
//! [`TreeElement`]; a child slot typed as a concrete node (e.g. `Block`)
//! accepts only that kind, and putting anything else there is a programming
//! error that panics with the expected and found kind names.
//!
//! Structural roles are capability predicates rather than a type hierarchy:
//! [`Tree::is_statement`], [`Tree::is_expression`], [`Tree::is_type_tree`],
//! [`Tree::is_pattern`]. A node may hold several roles (a method invocation is
//! both a statement and an expression).

use lstkit_core::error::{LstError, LstResult};
use lstkit_core::identity::{HasId, NodeId, RefEq};
use lstkit_core::markers::Markers;
use lstkit_core::space::Space;
use lstkit_core::types::JavaType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::nodes::*;

/// A node type that can stand wherever a [`Tree`] is expected.
pub trait TreeElement: Sized + Clone {
    /// The kind name used in diagnostics and on the wire.
    const KIND: &'static str;

    fn into_tree(self) -> Tree;

    /// Recover the concrete node, or hand the tree back when it is another kind.
    fn try_from_tree(tree: Tree) -> Result<Self, Tree>;

    /// Recover the concrete node.
    ///
    /// # Panics
    ///
    /// Panics when `tree` is a different kind. This happens when a visitor
    /// returns the wrong kind for a typed child slot.
    fn from_tree(tree: Tree) -> Self {
        match Self::try_from_tree(tree) {
            Ok(node) => node,
            Err(other) => panic!("expected {} but found {}", Self::KIND, other.kind_name()),
        }
    }
}

/// Optional type attribution.
///
/// Kinds without a type slot report `None` and refuse `with_type`.
/// Kinds whose type is implied by their content (primitives, literals)
/// report it and also refuse `with_type`.
pub trait TypedTree: TreeElement {
    fn ty(&self) -> Option<JavaType> {
        None
    }

    fn try_with_type(&self, _ty: JavaType) -> LstResult<Self> {
        Err(LstError::unsupported(Self::KIND, "with_type"))
    }

    /// # Panics
    ///
    /// Panics where [`try_with_type`](Self::try_with_type) returns an error.
    fn with_type(&self, ty: JavaType) -> Self {
        match self.try_with_type(ty) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

macro_rules! define_family {
    ($family:ident, $doc:literal [ $($snake:ident : $node:ident),* $(,)? ]) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum $family {
            $($node($node),)*
        }

        impl $family {
            pub fn id(&self) -> NodeId {
                match self {
                    $(Self::$node(n) => n.id(),)*
                }
            }

            pub fn prefix(&self) -> &Space {
                match self {
                    $(Self::$node(n) => n.prefix(),)*
                }
            }

            pub fn markers(&self) -> &Markers {
                match self {
                    $(Self::$node(n) => n.markers(),)*
                }
            }

            pub fn with_prefix(&self, prefix: Space) -> Self {
                match self {
                    $(Self::$node(n) => Self::$node(n.with_prefix(prefix)),)*
                }
            }

            pub fn with_markers(&self, markers: Markers) -> Self {
                match self {
                    $(Self::$node(n) => Self::$node(n.with_markers(markers)),)*
                }
            }

            pub fn ptr_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$node(a), Self::$node(b)) => a.ptr_eq(b),)*
                    _ => false,
                }
            }

            pub fn kind_name(&self) -> &'static str {
                match self {
                    $(Self::$node(_) => stringify!($node),)*
                }
            }

            pub fn ty(&self) -> Option<JavaType> {
                match self {
                    $(Self::$node(n) => TypedTree::ty(n),)*
                }
            }

            pub fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
                match self {
                    $(Self::$node(n) => TypedTree::try_with_type(n, ty).map(Self::$node),)*
                }
            }

            pub(crate) fn with_serialized_fields(
                &self,
                fields: &Map<String, Value>,
            ) -> Result<Self, serde_json::Error> {
                match self {
                    $(Self::$node(n) => n.with_serialized_fields(fields).map(Self::$node),)*
                }
            }
        }

        $(
            impl From<$node> for $family {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }

            impl From<$node> for Tree {
                fn from(node: $node) -> Self {
                    Tree::$family($family::$node(node))
                }
            }

            impl TreeElement for $node {
                const KIND: &'static str = stringify!($node);

                fn into_tree(self) -> Tree {
                    self.into()
                }

                fn try_from_tree(tree: Tree) -> Result<Self, Tree> {
                    match tree {
                        Tree::$family($family::$node(node)) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

for_each_java_kind!(define_family!(J, "A base-language node."));
for_each_csharp_kind!(define_family!(Cs, "A derived-dialect node."));

/// Any node of either family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tree {
    J(J),
    Cs(Cs),
}

impl Tree {
    pub fn id(&self) -> NodeId {
        match self {
            Tree::J(j) => j.id(),
            Tree::Cs(cs) => cs.id(),
        }
    }

    pub fn prefix(&self) -> &Space {
        match self {
            Tree::J(j) => j.prefix(),
            Tree::Cs(cs) => cs.prefix(),
        }
    }

    pub fn markers(&self) -> &Markers {
        match self {
            Tree::J(j) => j.markers(),
            Tree::Cs(cs) => cs.markers(),
        }
    }

    pub fn with_prefix(&self, prefix: Space) -> Self {
        match self {
            Tree::J(j) => Tree::J(j.with_prefix(prefix)),
            Tree::Cs(cs) => Tree::Cs(cs.with_prefix(prefix)),
        }
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        match self {
            Tree::J(j) => Tree::J(j.with_markers(markers)),
            Tree::Cs(cs) => Tree::Cs(cs.with_markers(markers)),
        }
    }

    /// Whether both trees are the same node allocation.
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        match (self, other) {
            (Tree::J(a), Tree::J(b)) => a.ptr_eq(b),
            (Tree::Cs(a), Tree::Cs(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// The node kind, e.g. `"MethodInvocation"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Tree::J(j) => j.kind_name(),
            Tree::Cs(cs) => cs.kind_name(),
        }
    }

    pub fn is_csharp(&self) -> bool {
        matches!(self, Tree::Cs(_))
    }

    /// The concrete node, if this tree is of kind `T`.
    pub fn cast<T: TreeElement>(&self) -> Option<T> {
        T::try_from_tree(self.clone()).ok()
    }

    pub fn is<T: TreeElement>(&self) -> bool {
        self.cast::<T>().is_some()
    }

    pub fn ty(&self) -> Option<JavaType> {
        match self {
            Tree::J(j) => j.ty(),
            Tree::Cs(cs) => cs.ty(),
        }
    }

    pub fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        match self {
            Tree::J(j) => j.try_with_type(ty).map(Tree::J),
            Tree::Cs(cs) => cs.try_with_type(ty).map(Tree::Cs),
        }
    }

    /// Replace the named fields of the serialized form, keeping the handles
    /// of every field not named.
    pub(crate) fn with_serialized_fields(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        match self {
            Tree::J(j) => j.with_serialized_fields(fields).map(Tree::J),
            Tree::Cs(cs) => cs.with_serialized_fields(fields).map(Tree::Cs),
        }
    }

    /// # Panics
    ///
    /// Panics when the node kind has no settable type.
    pub fn with_type(&self, ty: JavaType) -> Self {
        match self.try_with_type(ty) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn is_statement(&self) -> bool {
        match self {
            Tree::J(j) => matches!(
                j,
                J::Assignment(_)
                    | J::AssignmentOperation(_)
                    | J::Block(_)
                    | J::Break(_)
                    | J::ClassDeclaration(_)
                    | J::Continue(_)
                    | J::Empty(_)
                    | J::If(_)
                    | J::Label(_)
                    | J::MethodDeclaration(_)
                    | J::MethodInvocation(_)
                    | J::NewClass(_)
                    | J::Return(_)
                    | J::Throw(_)
                    | J::Unary(_)
                    | J::Unknown(_)
                    | J::VariableDeclarations(_)
                    | J::WhileLoop(_)
            ),
            Tree::Cs(cs) => matches!(
                cs,
                Cs::UsingDirective(_)
                    | Cs::BlockScopeNamespaceDeclaration(_)
                    | Cs::FileScopeNamespaceDeclaration(_)
                    | Cs::PropertyDeclaration(_)
                    | Cs::IndexerDeclaration(_)
                    | Cs::EventDeclaration(_)
                    | Cs::DelegateDeclaration(_)
                    | Cs::EnumDeclaration(_)
                    | Cs::OperatorDeclaration(_)
                    | Cs::ConversionOperatorDeclaration(_)
                    | Cs::DestructorDeclaration(_)
                    | Cs::AwaitExpression(_)
                    | Cs::CsNewClass(_)
                    | Cs::UsingStatement(_)
                    | Cs::FixedStatement(_)
                    | Cs::CheckedStatement(_)
                    | Cs::UnsafeStatement(_)
                    | Cs::Yield(_)
                    | Cs::GotoStatement(_)
                    | Cs::PragmaWarningDirective(_)
                    | Cs::NullableDirective(_)
                    | Cs::RegionDirective(_)
                    | Cs::EndRegionDirective(_)
                    | Cs::DefineDirective(_)
                    | Cs::UndefDirective(_)
                    | Cs::ErrorDirective(_)
                    | Cs::WarningDirective(_)
                    | Cs::LineDirective(_)
                    | Cs::ConditionalDirective(_)
            ),
        }
    }

    pub fn is_expression(&self) -> bool {
        match self {
            Tree::J(j) => matches!(
                j,
                J::Identifier(_)
                    | J::Literal(_)
                    | J::Binary(_)
                    | J::Unary(_)
                    | J::Assignment(_)
                    | J::AssignmentOperation(_)
                    | J::FieldAccess(_)
                    | J::MethodInvocation(_)
                    | J::NewClass(_)
                    | J::Parentheses(_)
                    | J::ControlParentheses(_)
                    | J::Ternary(_)
                    | J::ArrayAccess(_)
                    | J::TypeCast(_)
                    | J::Lambda(_)
                    | J::Empty(_)
                    | J::Unknown(_)
            ),
            Tree::Cs(cs) => matches!(
                cs,
                Cs::CsBinary(_)
                    | Cs::CsUnary(_)
                    | Cs::RangeExpression(_)
                    | Cs::InterpolatedString(_)
                    | Cs::TupleExpression(_)
                    | Cs::NamedArgument(_)
                    | Cs::CollectionExpression(_)
                    | Cs::InitializerExpression(_)
                    | Cs::AnonymousObjectCreationExpression(_)
                    | Cs::CsLambda(_)
                    | Cs::IsPattern(_)
                    | Cs::SwitchExpression(_)
                    | Cs::AwaitExpression(_)
                    | Cs::DefaultExpression(_)
                    | Cs::CsNewClass(_)
                    | Cs::Keyword(_)
            ),
        }
    }

    pub fn is_type_tree(&self) -> bool {
        match self {
            Tree::J(j) => matches!(
                j,
                J::Identifier(_)
                    | J::FieldAccess(_)
                    | J::Primitive(_)
                    | J::ArrayType(_)
                    | J::ParameterizedType(_)
                    | J::Unknown(_)
            ),
            Tree::Cs(_) => false,
        }
    }

    pub fn is_pattern(&self) -> bool {
        match self {
            Tree::J(_) => false,
            Tree::Cs(cs) => matches!(
                cs,
                Cs::ConstantPattern(_)
                    | Cs::DiscardPattern(_)
                    | Cs::ListPattern(_)
                    | Cs::SlicePattern(_)
                    | Cs::RecursivePattern(_)
                    | Cs::RelationalPattern(_)
                    | Cs::TypePattern(_)
                    | Cs::BinaryPattern(_)
                    | Cs::UnaryPattern(_)
            ),
        }
    }

    /// Equality of content and formatting, ignoring node and marker ids.
    pub fn structurally_eq(&self, other: &Tree) -> bool {
        match (serde_json::to_value(self), serde_json::to_value(other)) {
            (Ok(mut a), Ok(mut b)) => {
                strip_ids(&mut a);
                strip_ids(&mut b);
                a == b
            }
            _ => false,
        }
    }
}

/// Remove node and marker ids. A custom marker's payload is content and is
/// left alone, even where it has an `id` key of its own.
fn strip_ids(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("id");
            for (key, child) in map.iter_mut() {
                if key == "markers" {
                    strip_marker_ids(child);
                } else {
                    strip_ids(child);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_ids),
        _ => {}
    }
}

fn strip_marker_ids(markers: &mut Value) {
    let Value::Array(markers) = markers else {
        return;
    };
    for marker in markers {
        let Value::Object(fields) = marker else {
            continue;
        };
        fields.remove("id");
        let custom = fields.get("kind").and_then(Value::as_str) == Some("Custom");
        for (key, child) in fields.iter_mut() {
            if !(custom && key == "data") {
                strip_ids(child);
            }
        }
    }
}

impl From<J> for Tree {
    fn from(j: J) -> Self {
        Tree::J(j)
    }
}

impl From<Cs> for Tree {
    fn from(cs: Cs) -> Self {
        Tree::Cs(cs)
    }
}

impl HasId for Tree {
    fn id(&self) -> NodeId {
        Tree::id(self)
    }
}

impl RefEq for Tree {
    fn ref_eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl TreeElement for Tree {
    const KIND: &'static str = "Tree";

    fn into_tree(self) -> Tree {
        self
    }

    fn try_from_tree(tree: Tree) -> Result<Self, Tree> {
        Ok(tree)
    }
}

impl TypedTree for Tree {
    fn ty(&self) -> Option<JavaType> {
        Tree::ty(self)
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        Tree::try_with_type(self, ty)
    }
}

// ---------------------------------------------------------------------------
// Type slots
// ---------------------------------------------------------------------------

macro_rules! typed_nodes {
    ($($node:ident),* $(,)?) => {
        $(
            impl TypedTree for $node {
                fn ty(&self) -> Option<JavaType> {
                    self.data().ty.clone()
                }

                fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
                    Ok(self.with_ty(Some(ty)))
                }
            }
        )*
    };
}

macro_rules! untyped_nodes {
    ($($node:ident),* $(,)?) => {
        $(impl TypedTree for $node {})*
    };
}

typed_nodes!(
    Identifier,
    Binary,
    Unary,
    Assignment,
    AssignmentOperation,
    FieldAccess,
    MethodInvocation,
    NewClass,
    Ternary,
    ArrayAccess,
    ArrayType,
    Lambda,
    NamedVariable,
    MethodDeclaration,
    ClassDeclaration,
    ParameterizedType,
    CsBinary,
    CsUnary,
    RangeExpression,
    InterpolatedString,
    TupleExpression,
    CollectionExpression,
    AnonymousObjectCreationExpression,
    IsPattern,
    SwitchExpression,
    AwaitExpression,
    DefaultExpression,
    DiscardPattern,
);

untyped_nodes!(
    LambdaParameters,
    Block,
    If,
    Else,
    WhileLoop,
    Return,
    Throw,
    Break,
    Continue,
    Empty,
    Label,
    VariableDeclarations,
    Modifier,
    TypeParameter,
    Unknown,
    CompilationUnit,
    UsingDirective,
    BlockScopeNamespaceDeclaration,
    FileScopeNamespaceDeclaration,
    PropertyDeclaration,
    AccessorDeclaration,
    IndexerDeclaration,
    EventDeclaration,
    DelegateDeclaration,
    EnumDeclaration,
    EnumMemberDeclaration,
    TypeParameterConstraintClause,
    ClassOrStructConstraint,
    ConstructorConstraint,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    DestructorDeclaration,
    Interpolation,
    NamedArgument,
    InitializerExpression,
    SwitchExpressionArm,
    Keyword,
    UsingStatement,
    FixedStatement,
    CheckedStatement,
    UnsafeStatement,
    Yield,
    GotoStatement,
    ConstantPattern,
    ListPattern,
    SlicePattern,
    RecursivePattern,
    Subpattern,
    RelationalPattern,
    TypePattern,
    BinaryPattern,
    UnaryPattern,
    SingleVariableDesignation,
    PragmaWarningDirective,
    NullableDirective,
    RegionDirective,
    EndRegionDirective,
    DefineDirective,
    UndefDirective,
    ErrorDirective,
    WarningDirective,
    LineDirective,
    ConditionalDirective,
);

/// The type a primitive keyword or literal implies.
fn implied_type(kind: PrimitiveKind) -> Option<JavaType> {
    kind.keyword(Dialect::CSharp).map(JavaType::primitive)
}

impl TypedTree for Primitive {
    fn ty(&self) -> Option<JavaType> {
        implied_type(*self.kind())
    }
}

impl TypedTree for Literal {
    fn ty(&self) -> Option<JavaType> {
        implied_type(*self.kind())
    }
}

impl TypedTree for Parentheses {
    fn ty(&self) -> Option<JavaType> {
        self.tree().ty()
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        let tree = self.tree().try_with_type(ty)?;
        Ok(self.with_tree(tree))
    }
}

impl TypedTree for ControlParentheses {
    fn ty(&self) -> Option<JavaType> {
        self.tree().ty()
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        let tree = self.tree().try_with_type(ty)?;
        Ok(self.with_tree(tree))
    }
}

impl TypedTree for TypeCast {
    fn ty(&self) -> Option<JavaType> {
        TypedTree::ty(self.clazz())
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        let clazz = TypedTree::try_with_type(self.clazz(), ty)?;
        Ok(self.with_clazz(clazz))
    }
}

impl TypedTree for CsNewClass {
    fn ty(&self) -> Option<JavaType> {
        TypedTree::ty(self.new_class_core())
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        let core = TypedTree::try_with_type(self.new_class_core(), ty)?;
        Ok(self.with_new_class_core(core))
    }
}

impl TypedTree for CsLambda {
    fn ty(&self) -> Option<JavaType> {
        TypedTree::ty(self.lambda_expression())
    }

    fn try_with_type(&self, ty: JavaType) -> LstResult<Self> {
        let lambda = TypedTree::try_with_type(self.lambda_expression(), ty)?;
        Ok(self.with_lambda_expression(lambda))
    }
}
