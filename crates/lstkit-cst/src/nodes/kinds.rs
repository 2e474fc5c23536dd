// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Enum-valued node fields and their source spellings.
//!
//! Every case maps to exactly one spelling. Where the base language and the
//! derived dialect disagree, `keyword` takes a [`Dialect`] and returns `None`
//! for a case the dialect cannot spell.

use serde::{Deserialize, Serialize};

/// Which surface syntax the printer writes for constructs the two languages
/// spell differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    Java,
    #[default]
    CSharp,
}

keyword_enum! {
    /// Infix operators of the base language.
    pub enum BinaryOperator {
        Addition => "+",
        Subtraction => "-",
        Multiplication => "*",
        Division => "/",
        Modulo => "%",
        LessThan => "<",
        GreaterThan => ">",
        LessThanOrEqual => "<=",
        GreaterThanOrEqual => ">=",
        Equal => "==",
        NotEqual => "!=",
        BitAnd => "&",
        BitOr => "|",
        BitXor => "^",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        Or => "||",
        And => "&&",
    }
}

keyword_enum! {
    /// Prefix and postfix unary operators.
    pub enum UnaryOperator {
        PreIncrement => "++",
        PreDecrement => "--",
        PostIncrement => "++",
        PostDecrement => "--",
        Positive => "+",
        Negative => "-",
        Complement => "~",
        Not => "!",
    }
}

impl UnaryOperator {
    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOperator::PostIncrement | UnaryOperator::PostDecrement)
    }
}

/// Compound assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    /// `??=`, derived dialect only.
    NullCoalescing,
}

impl AssignmentOperator {
    pub fn keyword(self, dialect: Dialect) -> Option<&'static str> {
        Some(match self {
            AssignmentOperator::Addition => "+=",
            AssignmentOperator::Subtraction => "-=",
            AssignmentOperator::Multiplication => "*=",
            AssignmentOperator::Division => "/=",
            AssignmentOperator::Modulo => "%=",
            AssignmentOperator::BitAnd => "&=",
            AssignmentOperator::BitOr => "|=",
            AssignmentOperator::BitXor => "^=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::RightShift => ">>=",
            AssignmentOperator::UnsignedRightShift => ">>>=",
            AssignmentOperator::NullCoalescing => match dialect {
                Dialect::CSharp => "??=",
                Dialect::Java => return None,
            },
        })
    }
}

/// Built-in keyword types. Also the kind of a [`Literal`](super::java::Literal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    Null,
    String,
    Object,
    Decimal,
    SByte,
    UShort,
    UInt,
    ULong,
    NInt,
    NUInt,
    Dynamic,
}

impl PrimitiveKind {
    pub fn keyword(self, dialect: Dialect) -> Option<&'static str> {
        match dialect {
            Dialect::Java => match self {
                Self::Boolean => Some("boolean"),
                Self::Byte => Some("byte"),
                Self::Char => Some("char"),
                Self::Double => Some("double"),
                Self::Float => Some("float"),
                Self::Int => Some("int"),
                Self::Long => Some("long"),
                Self::Short => Some("short"),
                Self::Void => Some("void"),
                Self::Null => Some("null"),
                Self::String => Some("String"),
                Self::Object
                | Self::Decimal
                | Self::SByte
                | Self::UShort
                | Self::UInt
                | Self::ULong
                | Self::NInt
                | Self::NUInt
                | Self::Dynamic => None,
            },
            Dialect::CSharp => Some(match self {
                Self::Boolean => "bool",
                Self::Byte => "byte",
                Self::Char => "char",
                Self::Double => "double",
                Self::Float => "float",
                Self::Int => "int",
                Self::Long => "long",
                Self::Short => "short",
                Self::Void => "void",
                Self::Null => "null",
                Self::String => "string",
                Self::Object => "object",
                Self::Decimal => "decimal",
                Self::SByte => "sbyte",
                Self::UShort => "ushort",
                Self::UInt => "uint",
                Self::ULong => "ulong",
                Self::NInt => "nint",
                Self::NUInt => "nuint",
                Self::Dynamic => "dynamic",
            }),
        }
    }
}

keyword_enum! {
    /// Declaration modifiers of both languages.
    pub enum ModifierKind {
        Default => "default",
        Public => "public",
        Protected => "protected",
        Private => "private",
        Internal => "internal",
        Abstract => "abstract",
        Static => "static",
        Final => "final",
        Sealed => "sealed",
        Readonly => "readonly",
        Const => "const",
        Virtual => "virtual",
        Override => "override",
        New => "new",
        Async => "async",
        Extern => "extern",
        Unsafe => "unsafe",
        Partial => "partial",
        Volatile => "volatile",
        Transient => "transient",
        Native => "native",
        Synchronized => "synchronized",
        Strictfp => "strictfp",
        Required => "required",
        File => "file",
        Ref => "ref",
        Out => "out",
        In => "in",
        Params => "params",
        This => "this",
        Using => "using",
        Scoped => "scoped",
        Fixed => "fixed",
    }
}

keyword_enum! {
    /// The keyword that introduces a type declaration.
    pub enum ClassKind {
        Class => "class",
        Interface => "interface",
        Enum => "enum",
        Record => "record",
        Annotation => "@interface",
    }
}

keyword_enum! {
    pub enum AccessorKind {
        Get => "get",
        Set => "set",
        Init => "init",
        Add => "add",
        Remove => "remove",
    }
}

keyword_enum! {
    pub enum ConversionKind {
        Implicit => "implicit",
        Explicit => "explicit",
    }
}

keyword_enum! {
    /// Operators a user type may overload.
    pub enum OverloadableOperator {
        Plus => "+",
        Minus => "-",
        Bang => "!",
        Tilde => "~",
        PlusPlus => "++",
        MinusMinus => "--",
        Star => "*",
        Slash => "/",
        Percent => "%",
        Amp => "&",
        Bar => "|",
        Caret => "^",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        EqualEqual => "==",
        BangEqual => "!=",
        LessThan => "<",
        GreaterThan => ">",
        LessThanEqual => "<=",
        GreaterThanEqual => ">=",
        True => "true",
        False => "false",
    }
}

keyword_enum! {
    pub enum CsBinaryOperator {
        As => "as",
        NullCoalescing => "??",
    }
}

keyword_enum! {
    pub enum CsUnaryOperator {
        /// Postfix `!`.
        SuppressNullableWarning => "!",
        PointerIndirection => "*",
        AddressOf => "&",
        /// `^` index from the end.
        FromEnd => "^",
    }
}

impl CsUnaryOperator {
    pub fn is_postfix(self) -> bool {
        matches!(self, CsUnaryOperator::SuppressNullableWarning)
    }
}

keyword_enum! {
    pub enum RelationalOperator {
        LessThan => "<",
        LessThanOrEqual => "<=",
        GreaterThan => ">",
        GreaterThanOrEqual => ">=",
    }
}

keyword_enum! {
    pub enum PatternOperator {
        And => "and",
        Or => "or",
    }
}

keyword_enum! {
    /// Contextual keywords that appear as standalone tree elements.
    pub enum KeywordKind {
        Ref => "ref",
        Out => "out",
        In => "in",
        Params => "params",
        This => "this",
        Base => "base",
        Scoped => "scoped",
        Await => "await",
        Case => "case",
        Default => "default",
    }
}

keyword_enum! {
    pub enum CheckedKind {
        Checked => "checked",
        Unchecked => "unchecked",
    }
}

keyword_enum! {
    pub enum YieldKind {
        Return => "return",
        Break => "break",
    }
}

keyword_enum! {
    pub enum ClassOrStructKind {
        Class => "class",
        NullableClass => "class?",
        Struct => "struct",
        Unmanaged => "unmanaged",
        NotNull => "notnull",
    }
}

keyword_enum! {
    pub enum PragmaWarningAction {
        Disable => "disable",
        Restore => "restore",
    }
}

keyword_enum! {
    pub enum NullableSetting {
        Enable => "enable",
        Disable => "disable",
        Restore => "restore",
    }
}

keyword_enum! {
    pub enum NullableTarget {
        Annotations => "annotations",
        Warnings => "warnings",
    }
}

keyword_enum! {
    /// `#line hidden`, `#line default`, or a numbered line (no keyword).
    pub enum LineDirectiveKind {
        Hidden => "hidden",
        Default => "default",
        Numeric => "",
    }
}

::lstkit_core::ref_eq_by_value!(Dialect, AssignmentOperator, PrimitiveKind);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_spellings_differ_by_dialect() {
        assert_eq!(PrimitiveKind::Boolean.keyword(Dialect::Java), Some("boolean"));
        assert_eq!(PrimitiveKind::Boolean.keyword(Dialect::CSharp), Some("bool"));
        assert_eq!(PrimitiveKind::Decimal.keyword(Dialect::Java), None);
        assert_eq!(PrimitiveKind::Decimal.keyword(Dialect::CSharp), Some("decimal"));
    }

    #[test]
    fn null_coalescing_assignment_is_dialect_only() {
        assert_eq!(AssignmentOperator::NullCoalescing.keyword(Dialect::Java), None);
        assert_eq!(
            AssignmentOperator::NullCoalescing.keyword(Dialect::CSharp),
            Some("??=")
        );
        assert_eq!(AssignmentOperator::Addition.keyword(Dialect::Java), Some("+="));
    }

    #[test]
    fn keyword_enums_spell_every_case() {
        assert_eq!(BinaryOperator::UnsignedRightShift.keyword(), ">>>");
        assert_eq!(ClassOrStructKind::NullableClass.keyword(), "class?");
        assert!(UnaryOperator::PostIncrement.is_postfix());
        assert!(!UnaryOperator::PreIncrement.is_postfix());
        assert!(CsUnaryOperator::SuppressNullableWarning.is_postfix());
    }
}
