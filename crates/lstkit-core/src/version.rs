//! Language version and parse configuration handed to a source parser.
//!
//! The tree model does not depend on the version: every node kind can be
//! built and printed regardless. [`LanguageVersion`] is threaded through the
//! parser boundary so a parser can reject syntax the target does not have,
//! and [`ParseOptions`] carries the preprocessor symbols a parser needs to
//! evaluate conditions. The tree only records which branch the parser chose;
//! nothing here evaluates a condition.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Target language version.
///
/// # Example
///
/// ```
/// use lstkit_core::version::LanguageVersion;
///
/// assert!(LanguageVersion::V10.has_file_scoped_namespaces());
/// assert!(!LanguageVersion::V9.has_file_scoped_namespaces());
/// assert!(LanguageVersion::Permissive.has_collection_expressions());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageVersion {
    /// Accept everything the grammar handles.
    #[default]
    Permissive,
    /// A specific language version.
    V { major: u8, minor: u8 },
}

impl LanguageVersion {
    /// Ranges, switch expressions, nullable reference types.
    pub const V8: Self = Self::V { major: 8, minor: 0 };

    /// Records, relational and logical patterns.
    pub const V9: Self = Self::V { major: 9, minor: 0 };

    /// File-scoped namespaces, global usings.
    pub const V10: Self = Self::V {
        major: 10,
        minor: 0,
    };

    /// List patterns, raw string literals.
    pub const V11: Self = Self::V {
        major: 11,
        minor: 0,
    };

    /// Collection expressions, primary constructors.
    pub const V12: Self = Self::V {
        major: 12,
        minor: 0,
    };

    fn at_least(self, major: u8) -> bool {
        match self {
            Self::Permissive => true,
            Self::V { major: m, .. } => m >= major,
        }
    }

    #[must_use]
    pub fn has_ranges(self) -> bool {
        self.at_least(8)
    }

    #[must_use]
    pub fn has_switch_expressions(self) -> bool {
        self.at_least(8)
    }

    #[must_use]
    pub fn has_relational_patterns(self) -> bool {
        self.at_least(9)
    }

    #[must_use]
    pub fn has_file_scoped_namespaces(self) -> bool {
        self.at_least(10)
    }

    #[must_use]
    pub fn has_list_patterns(self) -> bool {
        self.at_least(11)
    }

    #[must_use]
    pub fn has_collection_expressions(self) -> bool {
        self.at_least(12)
    }

    #[must_use]
    pub fn is_permissive(self) -> bool {
        matches!(self, Self::Permissive)
    }

    /// `None` for [`Permissive`](Self::Permissive).
    #[must_use]
    pub fn version_tuple(self) -> Option<(u8, u8)> {
        match self {
            Self::Permissive => None,
            Self::V { major, minor } => Some((major, minor)),
        }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::V { major, minor } => write!(f, "{major}.{minor}"),
        }
    }
}

/// Options passed to a source parser.
///
/// ```
/// use lstkit_core::version::{LanguageVersion, ParseOptions};
///
/// let options = ParseOptions::new(LanguageVersion::V10)
///     .with_symbol("DEBUG")
///     .with_file_name("Program.cs");
/// assert!(options.is_defined("DEBUG"));
/// assert!(!options.is_defined("TRACE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    pub version: LanguageVersion,
    /// Preprocessor symbols considered defined (`#define` or build flags),
    /// passed through to the parser unread.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub preprocessor_symbols: BTreeSet<String>,
    /// Source file name for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl ParseOptions {
    #[must_use]
    pub fn new(version: LanguageVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.preprocessor_symbols.insert(symbol.into());
        self
    }

    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preprocessor_symbols
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn is_defined(&self, symbol: &str) -> bool {
        self.preprocessor_symbols.contains(symbol)
    }
}
