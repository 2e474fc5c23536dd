// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Token output for base-language nodes.
//!
//! A node's prefix and markers are already written by the time one of these
//! methods runs.

use lstkit_core::markers::{MultiDimensionalArray, Struct};

use super::{PrintOutputCapture, Printer};
use crate::nodes::*;

impl Printer {
    pub(super) fn print_identifier(&mut self, node: &Identifier, out: &mut PrintOutputCapture) {
        out.append(node.simple_name());
    }

    pub(super) fn print_literal(&mut self, node: &Literal, out: &mut PrintOutputCapture) {
        out.append(node.value_source());
    }

    pub(super) fn print_primitive(&mut self, node: &Primitive, out: &mut PrintOutputCapture) {
        match node.kind().keyword(self.dialect) {
            Some(keyword) => out.append(keyword),
            None => panic!(
                "primitive {:?} cannot be spelled in {:?}",
                node.kind(),
                self.dialect
            ),
        }
    }

    pub(super) fn print_binary(&mut self, node: &Binary, out: &mut PrintOutputCapture) {
        let operator = node.padding().operator();
        self.node(node.left(), out);
        self.space(&operator.before, out);
        out.append(operator.element.keyword());
        self.node(node.right(), out);
    }

    pub(super) fn print_unary(&mut self, node: &Unary, out: &mut PrintOutputCapture) {
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

    pub(super) fn print_assignment(&mut self, node: &Assignment, out: &mut PrintOutputCapture) {
        self.node(node.variable(), out);
        self.left(node.padding().assignment(), "=", out);
    }

    pub(super) fn print_assignment_operation(
        &mut self,
        node: &AssignmentOperation,
        out: &mut PrintOutputCapture,
    ) {
        let operator = node.padding().operator();
        let Some(keyword) = operator.element.keyword(self.dialect) else {
            panic!(
                "assignment operator {:?} cannot be spelled in {:?}",
                operator.element, self.dialect
            );
        };
        self.node(node.variable(), out);
        self.space(&operator.before, out);
        out.append(keyword);
        self.node(node.assignment(), out);
    }

    pub(super) fn print_field_access(&mut self, node: &FieldAccess, out: &mut PrintOutputCapture) {
        self.node(node.target(), out);
        self.left(node.padding().name(), ".", out);
    }

    pub(super) fn print_method_invocation(
        &mut self,
        node: &MethodInvocation,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        if let Some(select) = padding.select() {
            self.right(select, ".", out);
        }
        match self.dialect {
            Dialect::Java => {
                self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
                self.node(node.name(), out);
            }
            Dialect::CSharp => {
                self.node(node.name(), out);
                self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
            }
        }
        self.container(padding.arguments(), "(", ",", ")", out);
    }

    pub(super) fn print_new_class(&mut self, node: &NewClass, out: &mut PrintOutputCapture) {
        let padding = node.padding();
        if let Some(enclosing) = padding.enclosing() {
            self.right(enclosing, ".", out);
        }
        self.space(node.new_keyword(), out);
        out.append("new");
        self.node_opt(node.clazz().as_ref(), out);
        self.container_opt(padding.arguments().as_ref(), "(", ",", ")", out);
        self.node_opt(node.body().as_ref(), out);
    }

    pub(super) fn print_parentheses(&mut self, node: &Parentheses, out: &mut PrintOutputCapture) {
        out.append("(");
        self.right(node.padding().tree(), ")", out);
    }

    pub(super) fn print_control_parentheses(
        &mut self,
        node: &ControlParentheses,
        out: &mut PrintOutputCapture,
    ) {
        out.append("(");
        self.right(node.padding().tree(), ")", out);
    }

    pub(super) fn print_ternary(&mut self, node: &Ternary, out: &mut PrintOutputCapture) {
        let padding = node.padding();
        self.node(node.condition(), out);
        self.left(padding.true_part(), "?", out);
        self.left(padding.false_part(), ":", out);
    }

    pub(super) fn print_array_access(&mut self, node: &ArrayAccess, out: &mut PrintOutputCapture) {
        self.node(node.indexed(), out);
        self.container(node.padding().dimension(), "[", ",", "]", out);
    }

    pub(super) fn print_array_type(&mut self, node: &ArrayType, out: &mut PrintOutputCapture) {
        let dimension = node.padding().dimension();
        self.node(node.element_type(), out);
        self.space(&dimension.before, out);
        out.append("[");
        if let Some(ranks) = node.markers().find::<MultiDimensionalArray>() {
            for separator in &ranks.separators {
                self.space(separator, out);
                out.append(",");
            }
        }
        self.space(&dimension.element, out);
        out.append("]");
    }

    pub(super) fn print_type_cast(&mut self, node: &TypeCast, out: &mut PrintOutputCapture) {
        self.node(node.clazz(), out);
        self.node(node.expression(), out);
    }

    pub(super) fn print_lambda(&mut self, node: &Lambda, out: &mut PrintOutputCapture) {
        self.node(node.parameters(), out);
        self.space(node.arrow(), out);
        out.append(match self.dialect {
            Dialect::Java => "->",
            Dialect::CSharp => "=>",
        });
        self.node(node.body(), out);
    }

    pub(super) fn print_lambda_parameters(
        &mut self,
        node: &LambdaParameters,
        out: &mut PrintOutputCapture,
    ) {
        let parameters = node.padding().parameters();
        if *node.parenthesized() {
            out.append("(");
            self.right_list(parameters, ",", out);
            out.append(")");
        } else {
            self.right_list(parameters, ",", out);
        }
    }

    pub(super) fn print_block(&mut self, node: &Block, out: &mut PrintOutputCapture) {
        out.append("{");
        self.statements(node.padding().statements(), out);
        self.space(node.end(), out);
        out.append("}");
    }

    pub(super) fn print_if(&mut self, node: &If, out: &mut PrintOutputCapture) {
        out.append("if");
        self.node(node.if_condition(), out);
        self.statement(node.padding().then_part(), out);
        self.node_opt(node.else_part().as_ref(), out);
    }

    pub(super) fn print_else(&mut self, node: &Else, out: &mut PrintOutputCapture) {
        out.append("else");
        self.statement(node.padding().body(), out);
    }

    pub(super) fn print_while_loop(&mut self, node: &WhileLoop, out: &mut PrintOutputCapture) {
        out.append("while");
        self.node(node.condition(), out);
        self.statement(node.padding().body(), out);
    }

    pub(super) fn print_return(&mut self, node: &Return, out: &mut PrintOutputCapture) {
        out.append("return");
        self.node_opt(node.expression().as_ref(), out);
    }

    pub(super) fn print_throw(&mut self, node: &Throw, out: &mut PrintOutputCapture) {
        out.append("throw");
        self.node(node.exception(), out);
    }

    pub(super) fn print_break(&mut self, node: &Break, out: &mut PrintOutputCapture) {
        out.append("break");
        self.node_opt(node.label().as_ref(), out);
    }

    pub(super) fn print_continue(&mut self, node: &Continue, out: &mut PrintOutputCapture) {
        out.append("continue");
        self.node_opt(node.label().as_ref(), out);
    }

    pub(super) fn print_empty(&mut self, _node: &Empty, _out: &mut PrintOutputCapture) {}

    pub(super) fn print_label(&mut self, node: &Label, out: &mut PrintOutputCapture) {
        self.right(node.padding().label(), ":", out);
        self.node(node.statement(), out);
    }

    pub(super) fn print_variable_declarations(
        &mut self,
        node: &VariableDeclarations,
        out: &mut PrintOutputCapture,
    ) {
        self.modifiers(node.modifiers(), out);
        self.node_opt(node.type_expression().as_ref(), out);
        self.right_list(node.padding().variables(), ",", out);
    }

    pub(super) fn print_named_variable(
        &mut self,
        node: &NamedVariable,
        out: &mut PrintOutputCapture,
    ) {
        self.node(node.name(), out);
        self.left_opt(node.padding().initializer().as_ref(), "=", out);
    }

    pub(super) fn print_modifier(&mut self, node: &Modifier, out: &mut PrintOutputCapture) {
        out.append(node.kind().keyword());
    }

    pub(super) fn print_method_declaration(
        &mut self,
        node: &MethodDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        self.modifiers(node.modifiers(), out);
        match self.dialect {
            Dialect::Java => {
                self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
                self.node_opt(node.return_type().as_ref(), out);
                self.node(node.name(), out);
            }
            Dialect::CSharp => {
                self.node_opt(node.return_type().as_ref(), out);
                self.node(node.name(), out);
                self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
            }
        }
        self.container(padding.parameters(), "(", ",", ")", out);
        for constraint in node.constraints() {
            self.node(constraint, out);
        }
        self.node_opt(node.body().as_ref(), out);
        self.expression_body(padding.expression_body().as_ref(), out);
    }

    pub(super) fn print_class_declaration(
        &mut self,
        node: &ClassDeclaration,
        out: &mut PrintOutputCapture,
    ) {
        let padding = node.padding();
        let kind = padding.kind();
        self.modifiers(node.modifiers(), out);
        self.space(&kind.before, out);
        let is_struct = node.markers().contains::<Struct>();
        out.append(match (kind.element, is_struct) {
            (ClassKind::Class, true) => "struct",
            (ClassKind::Record, true) => "record struct",
            (other, _) => other.keyword(),
        });
        self.node(node.name(), out);
        self.container_opt(padding.type_parameters().as_ref(), "<", ",", ">", out);
        self.container_opt(padding.primary_constructor().as_ref(), "(", ",", ")", out);

        let extends = padding.extends().as_ref();
        let implements = padding.implements().as_ref();
        match self.dialect {
            Dialect::Java => {
                self.left_opt(extends, "extends", out);
                let keyword = if kind.element == ClassKind::Interface {
                    "extends"
                } else {
                    "implements"
                };
                self.container_opt(implements, keyword, ",", "", out);
            }
            Dialect::CSharp => {
                self.left_opt(extends, ":", out);
                let open = if extends.is_some() { "," } else { ":" };
                self.container_opt(implements, open, ",", "", out);
            }
        }

        for constraint in node.constraints() {
            self.node(constraint, out);
        }
        self.node_opt(node.body().as_ref(), out);
    }

    pub(super) fn print_type_parameter(
        &mut self,
        node: &TypeParameter,
        out: &mut PrintOutputCapture,
    ) {
        self.modifiers(node.modifiers(), out);
        self.node(node.name(), out);
        let bounds = node.padding().bounds().as_ref();
        match self.dialect {
            Dialect::Java => self.container_opt(bounds, "extends", "&", "", out),
            Dialect::CSharp => self.container_opt(bounds, ":", ",", "", out),
        }
    }

    pub(super) fn print_parameterized_type(
        &mut self,
        node: &ParameterizedType,
        out: &mut PrintOutputCapture,
    ) {
        self.node(node.clazz(), out);
        self.container_opt(node.padding().type_parameters().as_ref(), "<", ",", ">", out);
    }

    pub(super) fn print_unknown(&mut self, node: &Unknown, out: &mut PrintOutputCapture) {
        out.append(node.text());
    }
}
