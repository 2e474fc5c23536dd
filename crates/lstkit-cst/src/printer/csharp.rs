// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Token output for derived-dialect nodes.

use super::{PrintOutputCapture, Printer};
use crate::directive::fold_lines;
use crate::nodes::*;
use crate::tree::TreeElement;

impl Printer {
    // -----------------------------------------------------------------------
    // Units and declarations
    // -----------------------------------------------------------------------

    pub(super) fn print_compilation_unit(
        &mut self,
        node: &CompilationUnit,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.statements(padding.usings(), out);
        self.statements(padding.members(), out);
        self.space(node.eof(), out);
    }

    pub(super) fn print_using_directive(
        &mut self,
        node: &UsingDirective,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let global = padding.global();
        if global.element {
            out.append("global");
        }
        self.space(&global.after, out);
        out.append("using");
        let is_static = padding.is_static();
        self.space(&is_static.before, out);
        if is_static.element {
            out.append("static");
        }
        if let Some(alias) = padding.alias() {
            self.right(alias, "=", out);
        }
        self.node(node.namespace_or_type(), out);
    }

    pub(super) fn print_block_scope_namespace_declaration(
        &mut self,
        node: &BlockScopeNamespaceDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        out.append("namespace");
        self.right(padding.name(), "{", out);
        self.statements(padding.usings(), out);
        self.statements(padding.members(), out);
        self.space(node.end(), out);
        out.append("}");
    }

    pub(super) fn print_file_scope_namespace_declaration(
        &mut self,
        node: &FileScopeNamespaceDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        out.append("namespace");
        self.right(padding.name(), ";", out);
        self.statements(padding.usings(), out);
        self.statements(padding.members(), out);
    }

    pub(super) fn print_property_declaration(
        &mut self,
        node: &PropertyDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.node(node.type_expression(), out);
        if let Some(specifier) = padding.interface_specifier() {
            self.right(specifier, ".", out);
        }
        self.node(node.name(), out);
        self.node_opt(node.accessors().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
        self.left_opt(padding.initializer().as_ref(), "=", out);
    }

    pub(super) fn print_accessor_declaration(
        &mut self,
        node: &AccessorDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let kind = padding.kind();
        self.modifiers(node.modifiers(), out);
        self.space(&kind.before, out);
        out.append(kind.element.keyword());
        self.node_opt(node.body().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
    }

    pub(super) fn print_indexer_declaration(
        &mut self,
        node: &IndexerDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.node(node.type_expression(), out);
        self.node(node.indexer(), out);
        self.container(padding.parameters(), "[", ",", "]", out);
        self.expression_body(padding.expression_body().as_ref(), out);
        self.node_opt(node.accessors().as_ref(), out);
    }

    pub(super) fn print_event_declaration(
        &mut self,
        node: &EventDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.left(padding.type_expression(), "event", out);
        if let Some(specifier) = padding.interface_specifier() {
            self.right(specifier, ".", out);
        }
        self.node(node.name(), out);
        self.node_opt(node.accessors().as_ref(), out);
    }

    pub(super) fn print_delegate_declaration(
        &mut self,
        node: &DelegateDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.left(padding.return_type(), "delegate", out);
        self.node(node.name(), out);
        self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
        self.container(padding.parameters(), "(", ",", ")", out);
        for constraint in node.constraints() {
            self.node(constraint, out);
        }
    }

    pub(super) fn print_enum_declaration(
        &mut self,
        node: &EnumDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.left(padding.name(), "enum", out);
        self.left_opt(padding.base_type().as_ref(), ":", out);
        self.container_opt(padding.members().as_ref(), "{", ",", "}", out);
    }

    pub(super) fn print_enum_member_declaration(
        &mut self,
        node: &EnumMemberDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        self.node(node.name(), out);
        self.left_opt(node.padding().initializer().as_ref(), "=", out);
    }

    pub(super) fn print_type_parameter_constraint_clause(
        &mut self,
        node: &TypeParameterConstraintClause,
        out: &mut PrintOutputCapture,
    ) {
        out.append("where");
        self.node(node.type_parameter(), out);
        self.container(node.padding().constraints(), ":", ",", "", out);
    }

    pub(super) fn print_class_or_struct_constraint(
        &mut self,
        node: &ClassOrStructConstraint,
        out: &mut PrintOutputCapture,
    ) {
        out.append(node.kind().keyword());
    }

    pub(super) fn print_constructor_constraint(
        &mut self,
        node: &ConstructorConstraint,
        out: &mut PrintOutputCapture,
    ) {
        out.append("new");
        self.space(node.open_paren(), out);
        out.append("(");
        self.space(node.close_paren(), out);
        out.append(")");
    }

    pub(super) fn print_operator_declaration(
        &mut self,
        node: &OperatorDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let keyword = padding.operator_keyword();
        self.modifiers(node.modifiers(), out);
        self.node(node.return_type(), out);
        self.space(&keyword.before, out);
        out.append("operator");
        self.space(&keyword.element, out);
        out.append(node.operator_token().keyword());
        self.container(padding.parameters(), "(", ",", ")", out);
        self.node_opt(node.body().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
    }

    pub(super) fn print_conversion_operator_declaration(
        &mut self,
        node: &ConversionOperatorDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let kind = padding.kind();
        self.modifiers(node.modifiers(), out);
        self.space(&kind.before, out);
        out.append(kind.element.keyword());
        self.left(padding.return_type(), "operator", out);
        self.container(padding.parameters(), "(", ",", ")", out);
        self.node_opt(node.body().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
    }

    pub(super) fn print_destructor_declaration(
        &mut self,
        node: &DestructorDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        self.left(padding.name(), "~", out);
        self.container(padding.parameters(), "(", ",", ")", out);
        self.node_opt(node.body().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
    }

    // -----------------------------------------------------------------------
    // Expressions
    // -----------------------------------------------------------------------

    pub(super) fn print_cs_binary(&mut self, node: &CsBinary, out: &mut PrintOutputCapture) {
        let operator = node.padding().operator();
        self.node(node.left(), out);
        self.space(&operator.before, out);
        out.append(operator.element.keyword());
        self.node(node.right(), out);
    }

    pub(super) fn print_cs_unary(&mut self, node: &CsUnary, out: &mut PrintOutputCapture) {
        let operator = node.padding().operator();
        if operator.element.is_postfix() {
            self.node(node.expression(), out);
            self.space(&operator.before, out);
            out.append(operator.element.keyword());
        } else {
            self.space(&operator.before, out);
            out.append(operator.element.keyword());
            self.node(node.expression(), out);
        }
    }

    pub(super) fn print_range_expression(
        &mut self,
        node: &RangeExpression,
        out: &mut PrintOutputCapture,
    ) {
        if let Some(start) = node.padding().start() {
            self.right(start, "..", out);
        } else {
            out.append("..");
        }
        self.node_opt(node.end().as_ref(), out);
    }

    pub(super) fn print_interpolated_string(
        &mut self,
        node: &InterpolatedString,
        out: &mut PrintOutputCapture,
    ) {
        out.append(node.start());
        for part in node.parts() {
            self.node(part, out);
        }
        out.append(node.end());
    }

    pub(super) fn print_interpolation(
        &mut self,
        node: &Interpolation,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        out.append("{");
        self.right(padding.expression(), "", out);
        if let Some(alignment) = padding.alignment() {
            out.append(",");
            self.right(alignment, "", out);
        }
        if let Some(format) = node.format() {
            out.append(":");
            out.append(format);
        }
        out.append("}");
    }

    pub(super) fn print_tuple_expression(
        &mut self,
        node: &TupleExpression,
        out: &mut PrintOutputCapture,
    ) {
        self.container(node.padding().arguments(), "(", ",", ")", out);
    }

    pub(super) fn print_named_argument(
        &mut self,
        node: &NamedArgument,
        out: &mut PrintOutputCapture,
    ) {
        if let Some(name) = node.padding().name() {
            self.right(name, ":", out);
        }
        self.node(node.expression(), out);
    }

    pub(super) fn print_collection_expression(
        &mut self,
        node: &CollectionExpression,
        out: &mut PrintOutputCapture,
    ) {
        out.append("[");
        self.right_list(node.padding().elements(), ",", out);
        out.append("]");
    }

    pub(super) fn print_initializer_expression(
        &mut self,
        node: &InitializerExpression,
        out: &mut PrintOutputCapture,
    ) {
        out.append("{");
        self.right_list(node.padding().expressions(), ",", out);
        out.append("}");
    }

    pub(super) fn print_anonymous_object_creation_expression(
        &mut self,
        node: &AnonymousObjectCreationExpression,
        out: &mut PrintOutputCapture,
    ) {
        out.append("new");
        self.node(node.initializer(), out);
    }

    pub(super) fn print_cs_lambda(&mut self, node: &CsLambda, out: &mut PrintOutputCapture) {
        self.modifiers(node.modifiers(), out);
        self.node_opt(node.return_type().as_ref(), out);
        self.node(node.lambda_expression(), out);
    }

    pub(super) fn print_is_pattern(&mut self, node: &IsPattern, out: &mut PrintOutputCapture) {
        self.node(node.expression(), out);
        self.left(node.padding().pattern(), "is", out);
    }

    pub(super) fn print_switch_expression(
        &mut self,
        node: &SwitchExpression,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.right(padding.expression(), "switch", out);
        self.container(padding.arms(), "{", ",", "}", out);
    }

    pub(super) fn print_switch_expression_arm(
        &mut self,
        node: &SwitchExpressionArm,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.node(node.pattern(), out);
        self.left_opt(padding.when_expression().as_ref(), "when", out);
        self.left(padding.expression(), "=>", out);
    }

    pub(super) fn print_await_expression(
        &mut self,
        node: &AwaitExpression,
        out: &mut PrintOutputCapture,
    ) {
        out.append("await");
        self.node(node.expression(), out);
    }

    pub(super) fn print_default_expression(
        &mut self,
        node: &DefaultExpression,
        out: &mut PrintOutputCapture,
    ) {
        out.append("default");
        self.container_opt(node.padding().type_operator().as_ref(), "(", ",", ")", out);
    }

    pub(super) fn print_cs_new_class(&mut self, node: &CsNewClass, out: &mut PrintOutputCapture) {
        self.node(node.new_class_core(), out);
        self.node_opt(node.initializer().as_ref(), out);
    }

    pub(super) fn print_keyword(&mut self, node: &Keyword, out: &mut PrintOutputCapture) {
        out.append(node.kind().keyword());
    }

    // -----------------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------------

    pub(super) fn print_using_statement(
        &mut self,
        node: &UsingStatement,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        if let Some(await_keyword) = padding.await_keyword() {
            self.right(await_keyword, "", out);
        }
        out.append("using");
        self.node(node.expression(), out);
        self.statement(padding.statement(), out);
    }

    pub(super) fn print_fixed_statement(
        &mut self,
        node: &FixedStatement,
        out: &mut PrintOutputCapture,
    ) {
        out.append("fixed");
        self.node(node.declarations(), out);
        self.node(node.block(), out);
    }

    pub(super) fn print_checked_statement(
        &mut self,
        node: &CheckedStatement,
        out: &mut PrintOutputCapture,
    ) {
        out.append(node.kind().keyword());
        self.node(node.block(), out);
    }

    pub(super) fn print_unsafe_statement(
        &mut self,
        node: &UnsafeStatement,
        out: &mut PrintOutputCapture,
    ) {
        out.append("unsafe");
        self.node(node.block(), out);
    }

    pub(super) fn print_yield(&mut self, node: &Yield, out: &mut PrintOutputCapture) {
        let kind = node.padding().kind();
        out.append("yield");
        self.space(&kind.before, out);
        out.append(kind.element.keyword());
        self.node_opt(node.expression().as_ref(), out);
    }

    pub(super) fn print_goto_statement(
        &mut self,
        node: &GotoStatement,
        out: &mut PrintOutputCapture,
    ) {
        out.append("goto");
        self.node_opt(node.case_or_default().as_ref(), out);
        self.node_opt(node.target().as_ref(), out);
    }

    // -----------------------------------------------------------------------
    // Patterns
    // -----------------------------------------------------------------------

    pub(super) fn print_constant_pattern(
        &mut self,
        node: &ConstantPattern,
        out: &mut PrintOutputCapture,
    ) {
        self.node(node.value(), out);
    }

    pub(super) fn print_discard_pattern(
        &mut self,
        _node: &DiscardPattern,
        out: &mut PrintOutputCapture,
    ) {
        out.append("_");
    }

    pub(super) fn print_list_pattern(&mut self, node: &ListPattern, out: &mut PrintOutputCapture) {
        self.container(node.padding().patterns(), "[", ",", "]", out);
        self.node_opt(node.designation().as_ref(), out);
    }

    pub(super) fn print_slice_pattern(
        &mut self,
        node: &SlicePattern,
        out: &mut PrintOutputCapture,
    ) {
        out.append("..");
        self.node_opt(node.pattern().as_ref(), out);
    }

    pub(super) fn print_recursive_pattern(
        &mut self,
        node: &RecursivePattern,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.node_opt(node.type_qualifier().as_ref(), out);
        self.container_opt(padding.positional_pattern().as_ref(), "(", ",", ")", out);
        self.container_opt(padding.property_pattern().as_ref(), "{", ",", "}", out);
        self.node_opt(node.designation().as_ref(), out);
    }

    pub(super) fn print_subpattern(&mut self, node: &Subpattern, out: &mut PrintOutputCapture) {
        if let Some(name) = node.padding().name() {
            self.right(name, ":", out);
        }
        self.node(node.pattern(), out);
    }

    pub(super) fn print_relational_pattern(
        &mut self,
        node: &RelationalPattern,
        out: &mut PrintOutputCapture,
    ) {
        out.append(node.operator().keyword());
        self.node(node.value(), out);
    }

    pub(super) fn print_type_pattern(&mut self, node: &TypePattern, out: &mut PrintOutputCapture) {
        self.node(node.type_identifier(), out);
        self.node_opt(node.designation().as_ref(), out);
    }

    pub(super) fn print_binary_pattern(
        &mut self,
        node: &BinaryPattern,
        out: &mut PrintOutputCapture,
    ) {
        let operator = node.padding().operator();
        self.node(node.left(), out);
        self.space(&operator.before, out);
        out.append(operator.element.keyword());
        self.node(node.right(), out);
    }

    pub(super) fn print_unary_pattern(
        &mut self,
        node: &UnaryPattern,
        out: &mut PrintOutputCapture,
    ) {
        out.append("not");
        self.node(node.pattern(), out);
    }

    pub(super) fn print_single_variable_designation(
        &mut self,
        node: &SingleVariableDesignation,
        out: &mut PrintOutputCapture,
    ) {
        self.node(node.name(), out);
    }

    // -----------------------------------------------------------------------
    // Preprocessor directives
    // -----------------------------------------------------------------------

    pub(super) fn print_pragma_warning_directive(
        &mut self,
        node: &PragmaWarningDirective,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let action = padding.action();
        out.append("#");
        self.space(node.after_hash(), out);
        out.append("pragma");
        self.space(node.before_warning(), out);
        out.append("warning");
        self.space(&action.before, out);
        out.append(action.element.keyword());
        self.right_list(padding.warning_codes(), ",", out);
    }

    pub(super) fn print_nullable_directive(
        &mut self,
        node: &NullableDirective,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let setting = padding.setting();
        out.append("#nullable");
        self.space(&setting.before, out);
        out.append(setting.element.keyword());
        if let Some(target) = padding.target() {
            self.space(&target.before, out);
            out.append(target.element.keyword());
        }
    }

    pub(super) fn print_region_directive(
        &mut self,
        node: &RegionDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#region");
        out.append(node.text());
    }

    pub(super) fn print_end_region_directive(
        &mut self,
        node: &EndRegionDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#endregion");
        out.append(node.text());
    }

    pub(super) fn print_define_directive(
        &mut self,
        node: &DefineDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#define");
        self.node(node.symbol(), out);
    }

    pub(super) fn print_undef_directive(
        &mut self,
        node: &UndefDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#undef");
        self.node(node.symbol(), out);
    }

    pub(super) fn print_error_directive(
        &mut self,
        node: &ErrorDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#error");
        out.append(node.message());
    }

    pub(super) fn print_warning_directive(
        &mut self,
        node: &WarningDirective,
        out: &mut PrintOutputCapture,
    ) {
        out.append("#warning");
        out.append(node.message());
    }

    pub(super) fn print_line_directive(
        &mut self,
        node: &LineDirective,
        out: &mut PrintOutputCapture,
    ) {
        let kind = node.padding().kind();
        out.append("#line");
        self.space(&kind.before, out);
        out.append(kind.element.keyword());
        self.node_opt(node.line().as_ref(), out);
        self.node_opt(node.file().as_ref(), out);
    }

    /// Print every branch on its own, then stitch the branch texts together
    /// line by line around the directive lines.
    pub(super) fn print_conditional_directive(
        &mut self,
        node: &ConditionalDirective,
        out: &mut PrintOutputCapture,
    ) {
        let branches: Vec<String> = node
            .branches()
            .iter()
            .map(|branch| self.sub_printer().print(&branch.clone().into_tree()))
            .collect();
        out.append(&fold_lines(node.directive_lines(), &branches));
    }
}

#[cfg(test)]
mod tests {
    use lstkit_core::markers::{Markers, TrailingComma};
    use lstkit_core::padding::{Container, LeftPadded, RightPadded};
    use lstkit_core::space::Space;

    use crate::nodes::*;
    use crate::printer::print_tree;
    use crate::tree::Tree;

    fn sp(text: &str) -> Space {
        Space::format(text)
    }

    fn name(text: &str, prefix: &str) -> Identifier {
        Identifier::build(text).with_prefix(sp(prefix))
    }

    fn int(text: &str, prefix: &str) -> Tree {
        Literal::build(text, PrimitiveKind::Int)
            .with_prefix(sp(prefix))
            .into()
    }

    #[test]
    fn using_directives() {
        let using: Tree = UsingDirective::new(
            Space::EMPTY,
            RightPadded::new(true, sp(" ")),
            LeftPadded::new(sp(" "), true),
            None,
            name("System.Math", " ").into(),
        )
        .into();
        assert_eq!(print_tree(&using), "global using static System.Math");

        let alias: Tree = UsingDirective::new(
            Space::EMPTY,
            RightPadded::build(false),
            LeftPadded::build(false),
            Some(RightPadded::new(name("IO", " "), sp(" "))),
            name("System.IO", " ").into(),
        )
        .into();
        assert_eq!(print_tree(&alias), "using IO = System.IO");
    }

    #[test]
    fn enum_with_trailing_comma() {
        let member = |n: &str, v: &str| {
            Tree::from(EnumMemberDeclaration::new(
                Space::EMPTY,
                name(n, " "),
                Some(LeftPadded::new(sp(" "), int(v, " "))),
            ))
        };
        let last = RightPadded::new(member("B", "2"), Space::EMPTY)
            .with_markers(Markers::EMPTY.add(TrailingComma::new(sp(" "))));
        let decl: Tree = EnumDeclaration::new(
            Space::EMPTY,
            Vec::new(),
            LeftPadded::build(name("E", " ")),
            None,
            Some(Container::new(
                sp(" "),
                vec![RightPadded::build(member("A", "1")), last],
            )),
        )
        .into();
        assert_eq!(print_tree(&decl), "enum E { A = 1, B = 2, }");

        // The name's left padding is the space ahead of `enum`.
        let public: Tree = EnumDeclaration::new(
            Space::EMPTY,
            vec![Modifier::build(Space::EMPTY, ModifierKind::Public)],
            LeftPadded::new(sp(" "), name("E", " ")),
            None,
            None,
        )
        .into();
        assert_eq!(print_tree(&public), "public enum E");
    }

    #[test]
    fn switch_expression_with_patterns() {
        let arm = |pattern: Tree, value: &str| {
            Tree::from(SwitchExpressionArm::new(
                sp(" "),
                pattern,
                None,
                LeftPadded::new(sp(" "), int(value, " ")),
            ))
        };
        let relational: Tree = RelationalPattern::new(
            Space::EMPTY,
            RelationalOperator::GreaterThan,
            int("0", " "),
        )
        .into();
        let discard: Tree = DiscardPattern::new(Space::EMPTY, None).into();
        let switch: Tree = SwitchExpression::new(
            Space::EMPTY,
            RightPadded::new(Tree::from(name("x", "")), sp(" ")),
            Container::new(
                sp(" "),
                vec![
                    RightPadded::build(arm(relational, "1")),
                    RightPadded::new(arm(discard, "0"), sp(" ")),
                ],
            ),
            None,
        )
        .into();
        assert_eq!(print_tree(&switch), "x switch { > 0 => 1, _ => 0 }");
    }

    #[test]
    fn range_and_index_from_end() {
        let from_end: Tree = CsUnary::new(
            Space::EMPTY,
            LeftPadded::build(CsUnaryOperator::FromEnd),
            int("1", ""),
            None,
        )
        .into();
        let range: Tree = RangeExpression::new(
            Space::EMPTY,
            Some(RightPadded::build(int("1", ""))),
            Some(from_end),
            None,
        )
        .into();
        assert_eq!(print_tree(&range), "1..^1");

        let open: Tree = RangeExpression::new(Space::EMPTY, None, None, None).into();
        assert_eq!(print_tree(&open), "..");
    }

    #[test]
    fn interpolated_string() {
        let interpolation: Tree = Interpolation::new(
            Space::EMPTY,
            RightPadded::build(Tree::from(name("x", ""))),
            Some(RightPadded::build(int("5", ""))),
            Some("N2".to_string()),
        )
        .into();
        let text: Tree = Literal::build("v = ", PrimitiveKind::String).into();
        let string: Tree = InterpolatedString::new(
            Space::EMPTY,
            "$\"".to_string(),
            vec![text, interpolation],
            "\"".to_string(),
            None,
        )
        .into();
        assert_eq!(print_tree(&string), "$\"v = {x,5:N2}\"");
    }

    #[test]
    fn pragma_and_nullable_directives() {
        let pragma = |after_hash: &str, before_warning: &str| {
            Tree::from(PragmaWarningDirective::new(
                Space::EMPTY,
                sp(after_hash),
                sp(before_warning),
                LeftPadded::new(sp(" "), PragmaWarningAction::Disable),
                vec![
                    RightPadded::build(Tree::from(name("CS0168", " "))),
                    RightPadded::build(Tree::from(name("CS0219", " "))),
                ],
            ))
        };
        assert_eq!(
            print_tree(&pragma("", " ")),
            "#pragma warning disable CS0168, CS0219"
        );
        assert_eq!(
            print_tree(&pragma("  ", "\t")),
            "#  pragma\twarning disable CS0168, CS0219"
        );

        let nullable: Tree = NullableDirective::new(
            Space::EMPTY,
            LeftPadded::new(sp(" "), NullableSetting::Enable),
            Some(LeftPadded::new(sp(" "), NullableTarget::Warnings)),
        )
        .into();
        assert_eq!(print_tree(&nullable), "#nullable enable warnings");
    }

    #[test]
    fn property_with_accessors_and_initializer() {
        let accessor = |kind: AccessorKind, prefix: &str| {
            RightPadded::build(Tree::from(AccessorDeclaration::new(
                Space::EMPTY,
                Vec::new(),
                LeftPadded::new(sp(prefix), kind),
                None,
                None,
            )))
        };
        let accessors = Block::new(
            sp(" "),
            vec![accessor(AccessorKind::Get, " "), accessor(AccessorKind::Set, " ")],
            sp(" "),
        );
        let property: Tree = PropertyDeclaration::new(
            Space::EMPTY,
            vec![Modifier::build(Space::EMPTY, ModifierKind::Public)],
            Primitive::new(sp(" "), PrimitiveKind::Int).into(),
            None,
            name("Count", " "),
            Some(accessors),
            None,
            Some(LeftPadded::new(sp(" "), int("3", " "))),
        )
        .into();
        assert_eq!(
            print_tree(&property),
            "public int Count { get; set; } = 3"
        );
    }
}
