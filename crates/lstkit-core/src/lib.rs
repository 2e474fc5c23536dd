//! Core value types for lossless syntax trees.
//!
//! This crate holds everything that is not a node:
//! - Node identity ([`NodeId`]) and reference equality for the with-protocol
//! - Whitespace and comments ([`Space`])
//! - Padding wrappers ([`LeftPadded`], [`RightPadded`], [`Container`])
//! - [`Markers`] attached to nodes and padding
//! - The opaque [`JavaType`] handle
//! - Source spans and text position utilities
//! - Parse configuration and error types

pub mod error;
pub mod identity;
pub mod markers;
pub mod padding;
pub mod space;
pub mod span;
pub mod text;
pub mod types;
pub mod version;

pub use error::{LstError, LstResult};
pub use identity::{HasId, NodeId, RefEq};
pub use markers::{Marker, MarkerKind, Markers};
pub use padding::{Container, LeftPadded, RightPadded};
pub use space::{Comment, CommentStyle, Space};
pub use span::{Span, SpanTable};
pub use types::JavaType;
pub use version::{LanguageVersion, ParseOptions};
