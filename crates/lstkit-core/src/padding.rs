//! Padding wrappers: a tree element paired with the space around it.
//!
//! - [`LeftPadded`]: space *before* the element, used when fixed punctuation
//!   or a keyword precedes it (`a =` **` b`**, the space before an operator).
//! - [`RightPadded`]: space *after* the element, used before a following
//!   delimiter (`a` **` `**`,`).
//! - [`Container`]: a bracketed, delimited list of right-padded elements with
//!   the space before the opening bracket.
//!
//! The padded list reconciliation in [`RightPadded::with_elements`] is what
//! lets a caller add one argument to a five-argument call without touching the
//! formatting of the other four: elements are matched to their old padding by
//! [`NodeId`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::identity::{HasId, NodeId, RefEq};
use crate::markers::Markers;
use crate::space::Space;

/// An element preceded by space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        Self {
            before,
            element,
            markers: Markers::EMPTY,
        }
    }

    /// An element with no space before it.
    pub fn build(element: T) -> Self {
        Self::new(Space::EMPTY, element)
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn before(&self) -> &Space {
        &self.before
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LeftPadded<U> {
        LeftPadded {
            before: self.before,
            element: f(self.element),
            markers: self.markers,
        }
    }
}

impl<T: Clone + RefEq> LeftPadded<T> {
    /// Replace the element, keeping the padding.
    pub fn with_element(&self, element: T) -> Self {
        if self.element.ref_eq(&element) {
            return self.clone();
        }
        Self {
            before: self.before.clone(),
            element,
            markers: self.markers.clone(),
        }
    }

    pub fn with_before(&self, before: Space) -> Self {
        Self {
            before,
            element: self.element.clone(),
            markers: self.markers.clone(),
        }
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        Self {
            before: self.before.clone(),
            element: self.element.clone(),
            markers,
        }
    }
}

impl<T: RefEq> RefEq for LeftPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.element.ref_eq(&other.element)
            && self.before == other.before
            && self.markers == other.markers
    }
}

/// An element followed by space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        Self {
            element,
            after,
            markers: Markers::EMPTY,
        }
    }

    /// An element with no space after it.
    pub fn build(element: T) -> Self {
        Self::new(element, Space::EMPTY)
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn after(&self) -> &Space {
        &self.after
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RightPadded<U> {
        RightPadded {
            element: f(self.element),
            after: self.after,
            markers: self.markers,
        }
    }
}

impl<T: Clone + RefEq> RightPadded<T> {
    /// Replace the element, keeping the padding.
    pub fn with_element(&self, element: T) -> Self {
        if self.element.ref_eq(&element) {
            return self.clone();
        }
        Self {
            element,
            after: self.after.clone(),
            markers: self.markers.clone(),
        }
    }

    pub fn with_after(&self, after: Space) -> Self {
        Self {
            element: self.element.clone(),
            after,
            markers: self.markers.clone(),
        }
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        Self {
            element: self.element.clone(),
            after: self.after.clone(),
            markers,
        }
    }
}

impl<T: Clone + RefEq + HasId> RightPadded<T> {
    /// Reconcile a new logical element list against an existing padded list.
    ///
    /// Elements whose id appears in `before` keep that entry's trailing space
    /// and markers; new elements get empty space; padding of removed elements
    /// is dropped. When `elements` is reference-identical to `before`, the
    /// padded list is returned as it was.
    ///
    /// # Panics
    ///
    /// Panics if `elements` contains the same id twice; a tree never holds one
    /// node in two places of the same list.
    pub fn with_elements(before: &[RightPadded<T>], elements: Vec<T>) -> Vec<RightPadded<T>> {
        if before.len() == elements.len()
            && before
                .iter()
                .zip(&elements)
                .all(|(padded, element)| padded.element.ref_eq(element))
        {
            return before.to_vec();
        }

        let mut by_id: HashMap<NodeId, &RightPadded<T>> = HashMap::with_capacity(before.len());
        for padded in before {
            by_id.entry(padded.element.id()).or_insert(padded);
        }

        let mut seen: HashSet<NodeId> = HashSet::with_capacity(elements.len());
        let mut kept = 0usize;
        let reconciled: Vec<RightPadded<T>> = elements
            .into_iter()
            .map(|element| {
                let id = element.id();
                if !seen.insert(id) {
                    panic!("padded list reconciliation: element {id} appears more than once");
                }
                match by_id.get(&id) {
                    Some(old) => {
                        kept += 1;
                        old.with_element(element)
                    }
                    None => RightPadded::build(element),
                }
            })
            .collect();

        trace!(
            kept,
            added = reconciled.len() - kept,
            dropped = before.len() - kept,
            "reconciled padded list"
        );
        reconciled
    }
}

impl<T: RefEq> RefEq for RightPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.element.ref_eq(&other.element)
            && self.after == other.after
            && self.markers == other.markers
    }
}

/// A bracketed, delimited list: `before` `open` (element `after` `delim`)* `close`.
///
/// The brackets and delimiter are implied by the owning node. `Option<Container<T>>`
/// distinguishes "no list at all" from "an empty list".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container<T> {
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Self {
            before,
            elements,
            markers: Markers::EMPTY,
        }
    }

    /// A container with no space before it and no padding around elements.
    pub fn build(elements: Vec<T>) -> Self {
        Self::new(Space::EMPTY, elements.into_iter().map(RightPadded::build).collect())
    }

    /// A present but empty container, e.g. `<>`.
    pub fn empty() -> Self {
        Self::new(Space::EMPTY, Vec::new())
    }

    pub fn before(&self) -> &Space {
        &self.before
    }

    pub fn padding_elements(&self) -> &[RightPadded<T>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Clone> Container<T> {
    /// The logical elements, without padding.
    pub fn elements(&self) -> Vec<T> {
        self.elements.iter().map(|p| p.element.clone()).collect()
    }

    pub fn with_before(&self, before: Space) -> Self {
        Self {
            before,
            elements: self.elements.clone(),
            markers: self.markers.clone(),
        }
    }

    pub fn with_padding_elements(&self, elements: Vec<RightPadded<T>>) -> Self {
        Self {
            before: self.before.clone(),
            elements,
            markers: self.markers.clone(),
        }
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        Self {
            before: self.before.clone(),
            elements: self.elements.clone(),
            markers,
        }
    }
}

impl<T: Clone + RefEq + HasId> Container<T> {
    /// Replace the logical elements, reconciling padding by id.
    pub fn with_elements(&self, elements: Vec<T>) -> Self {
        self.with_padding_elements(RightPadded::with_elements(&self.elements, elements))
    }
}

impl<T: RefEq> RefEq for Container<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.before == other.before
            && self.markers == other.markers
            && self.elements.ref_eq(&other.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct Leaf(Arc<(NodeId, &'static str)>);

    impl Leaf {
        fn new(name: &'static str) -> Self {
            Leaf(Arc::new((NodeId::random(), name)))
        }
    }

    impl HasId for Leaf {
        fn id(&self) -> NodeId {
            self.0 .0
        }
    }

    impl RefEq for Leaf {
        fn ref_eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    fn padded(elements: &[(Leaf, &str)]) -> Container<Leaf> {
        Container::new(
            Space::format(" "),
            elements
                .iter()
                .map(|(leaf, after)| RightPadded::new(leaf.clone(), Space::format(after)))
                .collect(),
        )
    }

    #[test]
    fn append_keeps_existing_padding() {
        let (a, b, c, d) = (Leaf::new("a"), Leaf::new("b"), Leaf::new("c"), Leaf::new("d"));
        let container = padded(&[(a.clone(), " "), (b.clone(), "  "), (c.clone(), "\n")]);

        let updated = container.with_elements(vec![a, b, c, d.clone()]);
        let afters: Vec<String> = updated
            .padding_elements()
            .iter()
            .map(|p| p.after.to_string())
            .collect();
        assert_eq!(afters, vec![" ", "  ", "\n", ""]);
        assert!(updated.padding_elements()[3].element.ref_eq(&d));
        assert_eq!(updated.before, container.before);
    }

    #[test]
    fn identical_elements_return_same_padding() {
        let (a, b) = (Leaf::new("a"), Leaf::new("b"));
        let container = padded(&[(a.clone(), " "), (b.clone(), "")]);
        let same = container.with_elements(vec![a, b]);
        assert!(same.ref_eq(&container));
    }

    #[test]
    fn removal_and_reorder_follow_identity() {
        let (a, b, c) = (Leaf::new("a"), Leaf::new("b"), Leaf::new("c"));
        let container = padded(&[(a.clone(), "1"), (b, "2"), (c.clone(), "3")]);
        let updated = container.with_elements(vec![c, a]);
        let afters: Vec<String> = updated
            .padding_elements()
            .iter()
            .map(|p| p.after.to_string())
            .collect();
        assert_eq!(afters, vec!["3", "1"]);
    }

    #[test]
    #[should_panic(expected = "appears more than once")]
    fn duplicate_ids_are_fatal() {
        let a = Leaf::new("a");
        let container = padded(&[(a.clone(), "")]);
        let _ = container.with_elements(vec![a.clone(), a]);
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let absent: Option<Container<Leaf>> = None;
        let empty: Option<Container<Leaf>> = Some(Container::empty());
        assert!(absent.is_none());
        assert!(empty.as_ref().is_some_and(Container::is_empty));
    }

    #[test]
    fn left_padded_with_element_short_circuits() {
        let a = Leaf::new("a");
        let padded = LeftPadded::new(Space::single(), a.clone());
        assert!(padded.with_element(a).ref_eq(&padded));
        let replaced = padded.with_element(Leaf::new("b"));
        assert_eq!(replaced.before, Space::single());
        assert!(!replaced.ref_eq(&padded));
    }
}
