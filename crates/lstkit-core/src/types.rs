//! The opaque type handle attached to expressions and declarations.
//!
//! Type attribution is done outside this workspace; the tree only stores what
//! the resolver produced and hands it back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved (or unresolved) type as reported by a type resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum JavaType {
    /// No type information is available.
    #[default]
    Unknown,
    /// A built-in keyword type such as `int` or `bool`.
    Primitive { keyword: String },
    /// A named class, struct, interface or enum, with its type arguments.
    Class {
        fully_qualified_name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_parameters: Vec<JavaType>,
    },
    /// An array with the given element type and rank.
    Array { element: Box<JavaType>, rank: usize },
    /// A method signature.
    Method {
        declaring_type: Box<JavaType>,
        name: String,
        return_type: Box<JavaType>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        parameter_types: Vec<JavaType>,
    },
}

impl JavaType {
    pub fn primitive(keyword: impl Into<String>) -> Self {
        JavaType::Primitive {
            keyword: keyword.into(),
        }
    }

    pub fn class(fully_qualified_name: impl Into<String>) -> Self {
        JavaType::Class {
            fully_qualified_name: fully_qualified_name.into(),
            type_parameters: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, JavaType::Unknown)
    }

    /// The fully qualified name for class types, or the element's for arrays.
    pub fn fully_qualified_name(&self) -> Option<&str> {
        match self {
            JavaType::Class {
                fully_qualified_name,
                ..
            } => Some(fully_qualified_name),
            JavaType::Array { element, .. } => element.fully_qualified_name(),
            _ => None,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Unknown => f.write_str("<unknown>"),
            JavaType::Primitive { keyword } => f.write_str(keyword),
            JavaType::Class {
                fully_qualified_name,
                type_parameters,
            } => {
                f.write_str(fully_qualified_name)?;
                if !type_parameters.is_empty() {
                    f.write_str("<")?;
                    for (i, param) in type_parameters.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{param}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            JavaType::Array { element, rank } => {
                write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
            }
            JavaType::Method {
                declaring_type,
                name,
                return_type,
                parameter_types,
            } => {
                write!(f, "{declaring_type}.{name}(")?;
                for (i, param) in parameter_types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, "): {return_type}")
            }
        }
    }
}

crate::ref_eq_by_value!(JavaType);
