// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Trees and caches shared across threads.

mod common;

use std::sync::Arc;

use common::*;
use lstkit_core::space::Space;
use lstkit_core::types::JavaType;
use lstkit_cst::nodes::*;
use lstkit_cst::{print_tree, Tree, TypesInUseCache};
use rayon::prelude::*;

fn typed_unit(index: usize) -> CompilationUnit {
    let name = Identifier::new(
        Space::EMPTY,
        format!("v{index}"),
        Some(JavaType::class(format!("Demo.Type{}", index % 4))),
    );
    CompilationUnit::build(vec![NamedVariable::new(Space::EMPTY, name, None, None).into()])
}

#[test]
fn one_tree_prints_identically_on_every_thread() {
    let unit: Tree = greeter_unit().into();
    let printed: Vec<String> = (0..64)
        .into_par_iter()
        .map(|_| print_tree(&unit))
        .collect();
    assert!(printed.iter().all(|p| p == GREETER_SOURCE));
}

#[test]
fn edits_on_threads_do_not_disturb_the_shared_tree() {
    let class = greeter_class();
    let renamed: Vec<String> = (0..32)
        .into_par_iter()
        .map(|i| {
            let name = class.name().with_simple_name(format!("Greeter{i}"));
            print_tree(&class.with_name(name).into())
        })
        .collect();
    for (i, text) in renamed.iter().enumerate() {
        assert!(text.contains(&format!("class Greeter{i} :")));
    }
    assert_eq!(class.name().simple_name(), "Greeter");
}

#[test]
fn cache_is_shared_between_threads() {
    let cache = Arc::new(TypesInUseCache::new());
    let units: Vec<CompilationUnit> = (0..8).map(typed_unit).collect();

    let results: Vec<_> = units
        .par_iter()
        .flat_map_iter(|unit| {
            let cache = Arc::clone(&cache);
            (0..4).map(move |_| (unit.id(), cache.get_or_compute(unit)))
        })
        .collect();

    assert_eq!(cache.len(), units.len());
    for (id, types) in &results {
        let unit = units.iter().find(|u| u.id() == *id).unwrap();
        assert_eq!(**types, lstkit_cst::TypesInUse::collect(unit));
        assert_eq!(types.len(), 1);
    }
    for unit in &units {
        let first = cache.get_or_compute(unit);
        assert!(Arc::ptr_eq(&first, &cache.get_or_compute(unit)));
    }
}
