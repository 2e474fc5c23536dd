//! Markers: typed side-channel facts attached to nodes.
//!
//! A marker records something about a node that has no field in the grammar,
//! usually because it is rare or specific to one dialect: a class that was
//! written as `struct`, a call target that was implicit, a trailing comma.
//! The tree never interprets markers; consumers attach, query, and remove
//! them by type through [`MarkerKind`].
//!
//! Every marker carries its own [`NodeId`] and serializes with a stable
//! `kind` tag, which is its identity on the wire.

use serde::{Deserialize, Serialize};

use crate::identity::NodeId;
use crate::space::Space;

/// A class-like declaration that was written as a value type (`struct`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub id: NodeId,
}

/// A node that exists in the tree but not in the source text, such as an
/// implicit `this.` call target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implicit {
    pub id: NodeId,
}

/// A delimiter after the last element of a list, and the space after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailingComma {
    pub id: NodeId,
    pub suffix: Space,
}

/// Extra ranks of an array type (`int[,,]`): the space before each comma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDimensionalArray {
    pub id: NodeId,
    pub separators: Vec<Space>,
}

impl MultiDimensionalArray {
    pub fn rank(&self) -> usize {
        self.separators.len() + 1
    }
}

/// A member whose body is a single `=> expression` instead of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionBodied {
    pub id: NodeId,
}

/// A node matched by a search, rendered by the default marker printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: NodeId,
    pub description: Option<String>,
}

/// An out-of-tree fact with free-form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMarker {
    pub id: NodeId,
    pub name: String,
    pub data: serde_json::Value,
}

/// All marker kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Marker {
    Struct(Struct),
    Implicit(Implicit),
    TrailingComma(TrailingComma),
    MultiDimensionalArray(MultiDimensionalArray),
    SearchResult(SearchResult),
    ExpressionBodied(ExpressionBodied),
    Custom(CustomMarker),
}

impl Marker {
    pub fn id(&self) -> NodeId {
        match self {
            Marker::Struct(m) => m.id,
            Marker::Implicit(m) => m.id,
            Marker::TrailingComma(m) => m.id,
            Marker::MultiDimensionalArray(m) => m.id,
            Marker::SearchResult(m) => m.id,
            Marker::ExpressionBodied(m) => m.id,
            Marker::Custom(m) => m.id,
        }
    }

    /// The stable wire name of this marker's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Marker::Struct(_) => "Struct",
            Marker::Implicit(_) => "Implicit",
            Marker::TrailingComma(_) => "TrailingComma",
            Marker::MultiDimensionalArray(_) => "MultiDimensionalArray",
            Marker::SearchResult(_) => "SearchResult",
            Marker::ExpressionBodied(_) => "ExpressionBodied",
            Marker::Custom(_) => "Custom",
        }
    }
}

/// A concrete marker type that can be looked up in [`Markers`].
pub trait MarkerKind: Sized {
    fn from_marker(marker: &Marker) -> Option<&Self>;
    fn into_marker(self) -> Marker;
}

macro_rules! marker_kinds {
    ($($kind:ident),* $(,)?) => {
        $(
            impl MarkerKind for $kind {
                fn from_marker(marker: &Marker) -> Option<&Self> {
                    match marker {
                        Marker::$kind(m) => Some(m),
                        _ => None,
                    }
                }

                fn into_marker(self) -> Marker {
                    Marker::$kind(self)
                }
            }

            impl From<$kind> for Marker {
                fn from(marker: $kind) -> Self {
                    Marker::$kind(marker)
                }
            }
        )*
    };
}

marker_kinds!(
    Struct,
    Implicit,
    TrailingComma,
    MultiDimensionalArray,
    SearchResult,
    ExpressionBodied,
);

impl MarkerKind for CustomMarker {
    fn from_marker(marker: &Marker) -> Option<&Self> {
        match marker {
            Marker::Custom(m) => Some(m),
            _ => None,
        }
    }

    fn into_marker(self) -> Marker {
        Marker::Custom(self)
    }
}

impl From<CustomMarker> for Marker {
    fn from(marker: CustomMarker) -> Self {
        Marker::Custom(marker)
    }
}

impl Struct {
    pub fn new() -> Self {
        Self { id: NodeId::random() }
    }
}

impl Default for Struct {
    fn default() -> Self {
        Self::new()
    }
}

impl Implicit {
    pub fn new() -> Self {
        Self { id: NodeId::random() }
    }
}

impl Default for Implicit {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBodied {
    pub fn new() -> Self {
        Self { id: NodeId::random() }
    }
}

impl Default for ExpressionBodied {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailingComma {
    pub fn new(suffix: Space) -> Self {
        Self {
            id: NodeId::random(),
            suffix,
        }
    }
}

impl SearchResult {
    pub fn new(description: Option<String>) -> Self {
        Self {
            id: NodeId::random(),
            description,
        }
    }
}

/// The ordered set of markers on a node or padding wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markers {
    entries: Vec<Marker>,
}

impl Markers {
    pub const EMPTY: Markers = Markers {
        entries: Vec::new(),
    };

    pub fn build(entries: Vec<Marker>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Marker] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first marker of kind `M`.
    pub fn find<M: MarkerKind>(&self) -> Option<&M> {
        self.entries.iter().find_map(M::from_marker)
    }

    /// Every marker of kind `M`, in order.
    pub fn find_all<'a, M: MarkerKind + 'a>(&'a self) -> impl Iterator<Item = &'a M> {
        self.entries.iter().filter_map(M::from_marker)
    }

    pub fn contains<M: MarkerKind>(&self) -> bool {
        self.find::<M>().is_some()
    }

    /// A copy with `marker` appended.
    pub fn add(&self, marker: impl Into<Marker>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(marker.into());
        Self { entries }
    }

    /// A copy where any existing marker of the same kind is replaced by `marker`.
    pub fn set<M: MarkerKind>(&self, marker: M) -> Self {
        let mut entries: Vec<Marker> = self
            .entries
            .iter()
            .filter(|m| M::from_marker(m).is_none())
            .cloned()
            .collect();
        entries.push(marker.into_marker());
        Self { entries }
    }

    /// A copy without any marker of kind `M`.
    pub fn remove<M: MarkerKind>(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|m| M::from_marker(m).is_none())
                .cloned()
                .collect(),
        }
    }

    /// A copy without the marker with the given id.
    pub fn remove_by_id(&self, id: NodeId) -> Self {
        Self {
            entries: self.entries.iter().filter(|m| m.id() != id).cloned().collect(),
        }
    }
}

crate::ref_eq_by_value!(Markers, Marker);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_query_remove_by_type() {
        let markers = Markers::EMPTY.add(Struct::new()).add(SearchResult::new(None));
        assert!(markers.contains::<Struct>());
        assert!(markers.contains::<SearchResult>());
        assert!(!markers.contains::<Implicit>());

        let removed = markers.remove::<Struct>();
        assert!(!removed.contains::<Struct>());
        assert_eq!(removed.entries().len(), 1);
        // The original is untouched.
        assert!(markers.contains::<Struct>());
    }

    #[test]
    fn set_replaces_same_kind() {
        let markers = Markers::EMPTY
            .add(SearchResult::new(Some("a".into())))
            .set(SearchResult::new(Some("b".into())));
        let found: Vec<_> = markers.find_all::<SearchResult>().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description.as_deref(), Some("b"));
    }

    #[test]
    fn remove_by_id() {
        let implicit = Implicit::new();
        let id = implicit.id;
        let markers = Markers::EMPTY.add(implicit).add(Struct::new());
        let markers = markers.remove_by_id(id);
        assert!(!markers.contains::<Implicit>());
        assert!(markers.contains::<Struct>());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let markers = Markers::EMPTY.add(TrailingComma::new(Space::single()));
        let json = serde_json::to_value(&markers).unwrap();
        assert_eq!(json[0]["kind"], "TrailingComma");

        let back: Markers = serde_json::from_value(json).unwrap();
        assert_eq!(back, markers);
    }

    #[test]
    fn multi_dimensional_rank() {
        let marker = MultiDimensionalArray {
            id: NodeId::random(),
            separators: vec![Space::EMPTY, Space::single()],
        };
        assert_eq!(marker.rank(), 3);
    }

    #[test]
    fn custom_marker_roundtrips() {
        let custom = CustomMarker {
            id: NodeId::random(),
            name: "Nullable".into(),
            data: serde_json::json!({"annotated": true}),
        };
        let markers = Markers::EMPTY.add(Marker::Custom(custom.clone()));
        assert_eq!(markers.find::<CustomMarker>(), Some(&custom));
        assert_eq!(markers.entries()[0].kind_name(), "Custom");
    }
}
