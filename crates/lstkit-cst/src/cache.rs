// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Per-unit memo of the types a compilation unit refers to.
//!
//! Nodes hold no caches. [`TypesInUseCache`] is a side table keyed by the
//! unit's [`NodeId`] and validated by pointer identity: an entry is used only
//! while it was computed for the very allocation being asked about and no
//! [`invalidate_all`](TypesInUseCache::invalidate_all) happened since. Two
//! threads racing on a miss both compute; the later insert wins and either
//! result is correct.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use lstkit_core::identity::NodeId;
use tracing::trace;

use crate::nodes::{CompilationUnit, CompilationUnitData};
use crate::tree::{Tree, TreeElement};
use crate::visitor::{visit_tree, CSharpVisitor, JavaVisitor};

/// Fully qualified names of every type attached anywhere in a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypesInUse {
    types: BTreeSet<String>,
}

impl TypesInUse {
    /// Walk `unit` and collect the attached types.
    pub fn collect(unit: &CompilationUnit) -> Self {
        let mut collector = TypesInUseCollector::default();
        let _ = collector.visit(&unit.clone().into_tree(), &mut ());
        Self {
            types: collector.types,
        }
    }

    pub fn contains(&self, fully_qualified_name: &str) -> bool {
        self.types.contains(fully_qualified_name)
    }

    /// Names in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[derive(Default)]
struct TypesInUseCollector {
    types: BTreeSet<String>,
}

impl JavaVisitor<()> for TypesInUseCollector {
    fn visit(&mut self, tree: &Tree, p: &mut ()) -> Tree {
        if let Some(name) = tree.ty().as_ref().and_then(|ty| ty.fully_qualified_name()) {
            self.types.insert(name.to_string());
        }
        visit_tree(self, tree, p)
    }

    fn adapt_csharp(&mut self) -> Option<&mut dyn CSharpVisitor<()>> {
        Some(self)
    }
}

impl CSharpVisitor<()> for TypesInUseCollector {}

struct Entry {
    unit: Weak<CompilationUnitData>,
    generation: u64,
    value: Arc<TypesInUse>,
}

/// Identity-keyed memo of [`TypesInUse`] per compilation unit.
#[derive(Default)]
pub struct TypesInUseCache {
    generation: AtomicU64,
    entries: RwLock<HashMap<NodeId, Entry>>,
}

impl TypesInUseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The types used by `unit`, computed at most once per unit allocation.
    pub fn get_or_compute(&self, unit: &CompilationUnit) -> Arc<TypesInUse> {
        let generation = self.generation.load(Ordering::Acquire);
        let weak = unit.downgrade();
        {
            let entries = self
                .entries
                .read()
                .expect("types-in-use cache RwLock poisoned");
            if let Some(entry) = entries.get(&unit.id()) {
                if entry.generation == generation && Weak::ptr_eq(&entry.unit, &weak) {
                    trace!(unit = %unit.id(), "types-in-use cache hit");
                    return Arc::clone(&entry.value);
                }
            }
        }

        trace!(unit = %unit.id(), "types-in-use cache miss");
        let value = Arc::new(TypesInUse::collect(unit));
        let mut entries = self
            .entries
            .write()
            .expect("types-in-use cache RwLock poisoned");
        entries.insert(
            unit.id(),
            Entry {
                unit: weak,
                generation,
                value: Arc::clone(&value),
            },
        );
        value
    }

    /// Drop every entry; later lookups recompute.
    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entries
            .write()
            .expect("types-in-use cache RwLock poisoned")
            .clear();
    }

    /// Drop entries whose unit no longer exists.
    pub fn prune(&self) {
        self.entries
            .write()
            .expect("types-in-use cache RwLock poisoned")
            .retain(|_, entry| entry.unit.strong_count() > 0);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("types-in-use cache RwLock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
