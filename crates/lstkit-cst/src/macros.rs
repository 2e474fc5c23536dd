// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declarative macros that generate node types and their with-protocol.
//!
//! A node is declared once with [`lst_node!`]:
//!
//! ```text
//! lst_node! {
//!     /// `left <op> right`
//!     pub struct Binary {
//!         left: Tree,
//!         [left] operator: BinaryOperator,
//!         right: Tree,
//!         ty: Option<JavaType>,
//!     }
//! }
//! ```
//!
//! A bracketed kind before a field wraps it in a padding type:
//!
//! | kind            | stored as                   | node accessor type |
//! |-----------------|-----------------------------|--------------------|
//! | (none)          | `T`                         | `&T`               |
//! | `left`          | `LeftPadded<T>`             | `&T`               |
//! | `left_opt`      | `Option<LeftPadded<T>>`     | `Option<&T>`       |
//! | `right`         | `RightPadded<T>`            | `&T`               |
//! | `right_opt`     | `Option<RightPadded<T>>`    | `Option<&T>`       |
//! | `container`     | `Container<T>`              | `Vec<T>`           |
//! | `container_opt` | `Option<Container<T>>`      | `Option<Vec<T>>`   |
//! | `right_list`    | `Vec<RightPadded<T>>`       | `Vec<T>`           |
//!
//! The wrapper itself is only reachable through the node's `padding()` view.

/// The stored type of a field with an optional padding kind.
macro_rules! padded_field_ty {
    (; $ty:ty) => { $ty };
    (left; $ty:ty) => { ::lstkit_core::padding::LeftPadded<$ty> };
    (left_opt; $ty:ty) => { Option<::lstkit_core::padding::LeftPadded<$ty>> };
    (right; $ty:ty) => { ::lstkit_core::padding::RightPadded<$ty> };
    (right_opt; $ty:ty) => { Option<::lstkit_core::padding::RightPadded<$ty>> };
    (container; $ty:ty) => { ::lstkit_core::padding::Container<$ty> };
    (container_opt; $ty:ty) => { Option<::lstkit_core::padding::Container<$ty>> };
    (right_list; $ty:ty) => { Vec<::lstkit_core::padding::RightPadded<$ty>> };
}

/// Element-level get/with pair on the node itself.
macro_rules! node_accessors {
    (; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> &$ty {
                &self.0.$field
            }

            pub fn [<with_ $field>](&self, $field: $ty) -> Self {
                if ::lstkit_core::identity::RefEq::ref_eq(&self.0.$field, &$field) {
                    return self.clone();
                }
                self.rebuild(|d| d.$field = $field)
            }
        }
    };
    (left; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> &$ty {
                &self.0.$field.element
            }

            pub fn [<with_ $field>](&self, $field: $ty) -> Self {
                let padded = self.0.$field.with_element($field);
                self.padding().[<with_ $field>](padded)
            }
        }
    };
    (right; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> &$ty {
                &self.0.$field.element
            }

            pub fn [<with_ $field>](&self, $field: $ty) -> Self {
                let padded = self.0.$field.with_element($field);
                self.padding().[<with_ $field>](padded)
            }
        }
    };
    (left_opt; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&$ty> {
                self.0.$field.as_ref().map(|padded| &padded.element)
            }

            pub fn [<with_ $field>](&self, $field: Option<$ty>) -> Self {
                let padded = match ($field, &self.0.$field) {
                    (None, _) => None,
                    (Some(element), Some(old)) => Some(old.with_element(element)),
                    (Some(element), None) => {
                        Some(::lstkit_core::padding::LeftPadded::build(element))
                    }
                };
                self.padding().[<with_ $field>](padded)
            }
        }
    };
    (right_opt; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&$ty> {
                self.0.$field.as_ref().map(|padded| &padded.element)
            }

            pub fn [<with_ $field>](&self, $field: Option<$ty>) -> Self {
                let padded = match ($field, &self.0.$field) {
                    (None, _) => None,
                    (Some(element), Some(old)) => Some(old.with_element(element)),
                    (Some(element), None) => {
                        Some(::lstkit_core::padding::RightPadded::build(element))
                    }
                };
                self.padding().[<with_ $field>](padded)
            }
        }
    };
    (container; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Vec<$ty> {
                self.0.$field.elements()
            }

            pub fn [<with_ $field>](&self, $field: Vec<$ty>) -> Self {
                let container = self.0.$field.with_elements($field);
                self.padding().[<with_ $field>](container)
            }
        }
    };
    (container_opt; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<Vec<$ty>> {
                self.0.$field.as_ref().map(|container| container.elements())
            }

            pub fn [<with_ $field>](&self, $field: Option<Vec<$ty>>) -> Self {
                let container = match ($field, &self.0.$field) {
                    (None, _) => None,
                    (Some(elements), Some(old)) => Some(old.with_elements(elements)),
                    (Some(elements), None) => {
                        Some(::lstkit_core::padding::Container::build(elements))
                    }
                };
                self.padding().[<with_ $field>](container)
            }
        }
    };
    (right_list; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Vec<$ty> {
                self.0.$field.iter().map(|padded| padded.element.clone()).collect()
            }

            pub fn [<with_ $field>](&self, $field: Vec<$ty>) -> Self {
                let padded = ::lstkit_core::padding::RightPadded::with_elements(&self.0.$field, $field);
                self.padding().[<with_ $field>](padded)
            }
        }
    };
}

/// Wrapper-level get/with pair on the padding view. Plain fields have none.
macro_rules! padding_accessors {
    ($node:ident ; ; $field:ident : $ty:ty) => {};
    ($node:ident ; $kind:ident ; $field:ident : $ty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> &'a padded_field_ty!($kind; $ty) {
                let node: &'a $node = self.0;
                &node.0.$field
            }

            pub fn [<with_ $field>](&self, $field: padded_field_ty!($kind; $ty)) -> $node {
                let node: &'a $node = self.0;
                if ::lstkit_core::identity::RefEq::ref_eq(&node.0.$field, &$field) {
                    return node.clone();
                }
                node.rebuild(|d| d.$field = $field)
            }
        }
    };
}

/// Declare a node: its data struct, its shared handle, the with-protocol,
/// the padding view, and the default child walk.
macro_rules! lst_node {
    (
        $(#[$meta:meta])*
        pub struct $node:ident {
            $(
                $(#[$fmeta:meta])*
                $([$kind:ident])? $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        paste::paste! {
            #[doc = concat!("Fields of a [`", stringify!($node), "`] node.")]
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct [<$node Data>] {
                pub id: ::lstkit_core::identity::NodeId,
                pub prefix: ::lstkit_core::space::Space,
                #[serde(default, skip_serializing_if = "::lstkit_core::markers::Markers::is_empty")]
                pub markers: ::lstkit_core::markers::Markers,
                $(
                    $(#[$fmeta])*
                    pub $field: padded_field_ty!($($kind)? ; $ty),
                )*
            }

            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(transparent)]
            pub struct $node(::std::sync::Arc<[<$node Data>]>);

            impl $node {
                /// Build a node with a fresh id and no markers.
                #[allow(clippy::too_many_arguments)]
                pub fn new(
                    prefix: ::lstkit_core::space::Space,
                    $($field: padded_field_ty!($($kind)? ; $ty),)*
                ) -> Self {
                    Self::from_data([<$node Data>] {
                        id: ::lstkit_core::identity::NodeId::random(),
                        prefix,
                        markers: ::lstkit_core::markers::Markers::EMPTY,
                        $($field,)*
                    })
                }

                pub fn from_data(data: [<$node Data>]) -> Self {
                    Self(::std::sync::Arc::new(data))
                }

                pub fn data(&self) -> &[<$node Data>] {
                    &self.0
                }

                pub fn id(&self) -> ::lstkit_core::identity::NodeId {
                    self.0.id
                }

                pub fn prefix(&self) -> &::lstkit_core::space::Space {
                    &self.0.prefix
                }

                pub fn markers(&self) -> &::lstkit_core::markers::Markers {
                    &self.0.markers
                }

                /// Whether both handles point at the same allocation.
                pub fn ptr_eq(&self, other: &Self) -> bool {
                    ::std::sync::Arc::ptr_eq(&self.0, &other.0)
                }

                pub fn downgrade(&self) -> ::std::sync::Weak<[<$node Data>]> {
                    ::std::sync::Arc::downgrade(&self.0)
                }

                pub fn with_id(&self, id: ::lstkit_core::identity::NodeId) -> Self {
                    if self.0.id == id {
                        return self.clone();
                    }
                    self.rebuild(|d| d.id = id)
                }

                pub fn with_prefix(&self, prefix: ::lstkit_core::space::Space) -> Self {
                    if self.0.prefix == prefix {
                        return self.clone();
                    }
                    self.rebuild(|d| d.prefix = prefix)
                }

                pub fn with_markers(&self, markers: ::lstkit_core::markers::Markers) -> Self {
                    if self.0.markers == markers {
                        return self.clone();
                    }
                    self.rebuild(|d| d.markers = markers)
                }

                /// The padding-level view of this node.
                pub fn padding(&self) -> [<$node Padding>]<'_> {
                    [<$node Padding>](self)
                }

                pub(crate) fn rebuild(&self, f: impl FnOnce(&mut [<$node Data>])) -> Self {
                    let mut data = (*self.0).clone();
                    f(&mut data);
                    Self(::std::sync::Arc::new(data))
                }

                /// A copy with the named serialized fields replaced. Every
                /// other field keeps its handles. A null `markers` clears them.
                pub(crate) fn with_serialized_fields(
                    &self,
                    fields: &::serde_json::Map<String, ::serde_json::Value>,
                ) -> Result<Self, ::serde_json::Error> {
                    if fields.is_empty() {
                        return Ok(self.clone());
                    }
                    let mut data = (*self.0).clone();
                    for (field, value) in fields {
                        match field.as_str() {
                            "id" => data.id = ::serde_json::from_value(value.clone())?,
                            "prefix" => data.prefix = ::serde_json::from_value(value.clone())?,
                            "markers" if value.is_null() => {
                                data.markers = ::lstkit_core::markers::Markers::EMPTY
                            }
                            "markers" => data.markers = ::serde_json::from_value(value.clone())?,
                            $(
                                stringify!($field) => {
                                    data.$field = ::serde_json::from_value(value.clone())?
                                }
                            )*
                            other => {
                                return Err(<::serde_json::Error as ::serde::de::Error>::unknown_field(
                                    other,
                                    &[],
                                ))
                            }
                        }
                    }
                    Ok(Self(::std::sync::Arc::new(data)))
                }

                /// Visit prefix, markers and every child in field order,
                /// returning `self` when nothing changed.
                pub fn walk_children<V, P>(&self, v: &mut V, p: &mut P) -> Self
                where
                    V: crate::visitor::JavaVisitor<P> + ?Sized,
                {
                    let prefix = v.visit_space(&self.0.prefix, p);
                    let markers = v.visit_markers(&self.0.markers, p);
                    $(
                        let $field = crate::visitor::Walkable::walk_with(&self.0.$field, v, p);
                    )*
                    if ::lstkit_core::identity::RefEq::ref_eq(&prefix, &self.0.prefix)
                        && ::lstkit_core::identity::RefEq::ref_eq(&markers, &self.0.markers)
                        $(&& ::lstkit_core::identity::RefEq::ref_eq(&$field, &self.0.$field))*
                    {
                        return self.clone();
                    }
                    Self(::std::sync::Arc::new([<$node Data>] {
                        id: self.0.id,
                        prefix,
                        markers,
                        $($field,)*
                    }))
                }

                $(
                    node_accessors!($($kind)? ; $field : $ty);
                )*
            }

            impl ::lstkit_core::identity::HasId for $node {
                fn id(&self) -> ::lstkit_core::identity::NodeId {
                    self.0.id
                }
            }

            impl ::lstkit_core::identity::RefEq for $node {
                fn ref_eq(&self, other: &Self) -> bool {
                    ::std::sync::Arc::ptr_eq(&self.0, &other.0)
                }
            }

            impl crate::visitor::Walkable for $node {
                fn walk_with<V, P>(&self, v: &mut V, p: &mut P) -> Self
                where
                    V: crate::visitor::JavaVisitor<P> + ?Sized,
                {
                    let visited = v.visit(&crate::tree::TreeElement::into_tree(self.clone()), p);
                    <$node as crate::tree::TreeElement>::from_tree(visited)
                }
            }

            #[doc = concat!("Padding view of a [`", stringify!($node), "`].")]
            pub struct [<$node Padding>]<'a>(&'a $node);

            impl<'a> [<$node Padding>]<'a> {
                pub fn node(&self) -> &'a $node {
                    self.0
                }

                $(
                    padding_accessors!($node ; $($kind)? ; $field : $ty);
                )*
            }
        }
    };
}

/// Invoke `$m!(args [name: Node, ...])` with every base-language node kind.
macro_rules! for_each_java_kind {
    ($m:ident ! ( $($args:tt)* )) => {
        $m! { $($args)* [
            identifier: Identifier,
            literal: Literal,
            primitive: Primitive,
            binary: Binary,
            unary: Unary,
            assignment: Assignment,
            assignment_operation: AssignmentOperation,
            field_access: FieldAccess,
            method_invocation: MethodInvocation,
            new_class: NewClass,
            parentheses: Parentheses,
            control_parentheses: ControlParentheses,
            ternary: Ternary,
            array_access: ArrayAccess,
            array_type: ArrayType,
            type_cast: TypeCast,
            lambda: Lambda,
            lambda_parameters: LambdaParameters,
            block: Block,
            if: If,
            else: Else,
            while_loop: WhileLoop,
            return: Return,
            throw: Throw,
            break: Break,
            continue: Continue,
            empty: Empty,
            label: Label,
            variable_declarations: VariableDeclarations,
            named_variable: NamedVariable,
            modifier: Modifier,
            method_declaration: MethodDeclaration,
            class_declaration: ClassDeclaration,
            type_parameter: TypeParameter,
            parameterized_type: ParameterizedType,
            unknown: Unknown,
        ] }
    };
}

/// Invoke `$m!(args [name: Node, ...])` with every derived-dialect node kind.
macro_rules! for_each_csharp_kind {
    ($m:ident ! ( $($args:tt)* )) => {
        $m! { $($args)* [
            compilation_unit: CompilationUnit,
            using_directive: UsingDirective,
            block_scope_namespace_declaration: BlockScopeNamespaceDeclaration,
            file_scope_namespace_declaration: FileScopeNamespaceDeclaration,
            property_declaration: PropertyDeclaration,
            accessor_declaration: AccessorDeclaration,
            indexer_declaration: IndexerDeclaration,
            event_declaration: EventDeclaration,
            delegate_declaration: DelegateDeclaration,
            enum_declaration: EnumDeclaration,
            enum_member_declaration: EnumMemberDeclaration,
            type_parameter_constraint_clause: TypeParameterConstraintClause,
            class_or_struct_constraint: ClassOrStructConstraint,
            constructor_constraint: ConstructorConstraint,
            operator_declaration: OperatorDeclaration,
            conversion_operator_declaration: ConversionOperatorDeclaration,
            destructor_declaration: DestructorDeclaration,
            cs_binary: CsBinary,
            cs_unary: CsUnary,
            range_expression: RangeExpression,
            interpolated_string: InterpolatedString,
            interpolation: Interpolation,
            tuple_expression: TupleExpression,
            named_argument: NamedArgument,
            collection_expression: CollectionExpression,
            initializer_expression: InitializerExpression,
            anonymous_object_creation_expression: AnonymousObjectCreationExpression,
            cs_lambda: CsLambda,
            is_pattern: IsPattern,
            switch_expression: SwitchExpression,
            switch_expression_arm: SwitchExpressionArm,
            await_expression: AwaitExpression,
            default_expression: DefaultExpression,
            cs_new_class: CsNewClass,
            keyword: Keyword,
            using_statement: UsingStatement,
            fixed_statement: FixedStatement,
            checked_statement: CheckedStatement,
            unsafe_statement: UnsafeStatement,
            yield: Yield,
            goto_statement: GotoStatement,
            constant_pattern: ConstantPattern,
            discard_pattern: DiscardPattern,
            list_pattern: ListPattern,
            slice_pattern: SlicePattern,
            recursive_pattern: RecursivePattern,
            subpattern: Subpattern,
            relational_pattern: RelationalPattern,
            type_pattern: TypePattern,
            binary_pattern: BinaryPattern,
            unary_pattern: UnaryPattern,
            single_variable_designation: SingleVariableDesignation,
            pragma_warning_directive: PragmaWarningDirective,
            nullable_directive: NullableDirective,
            region_directive: RegionDirective,
            end_region_directive: EndRegionDirective,
            define_directive: DefineDirective,
            undef_directive: UndefDirective,
            error_directive: ErrorDirective,
            warning_directive: WarningDirective,
            line_directive: LineDirective,
            conditional_directive: ConditionalDirective,
        ] }
    };
}

/// Spell each listed enum case; cases absent from one dialect map to `None`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// The exact source spelling.
            pub fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        ::lstkit_core::ref_eq_by_value!($name);
    };
}
