// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node types for both dialect families.
//!
//! Every node is an immutable handle around shared data. Fields are read with
//! `x()` and replaced with `with_x(..)`, which returns the same handle when
//! the new value is reference-equal to the old one. Fields stored inside a
//! padding wrapper are read and replaced by element on the node, and by
//! wrapper through the node's `padding()` view.
//!
//! ```
//! use lstkit_cst::nodes::{Identifier, NamedVariable};
//! use lstkit_core::Space;
//!
//! let name = Identifier::build("x");
//! let var = NamedVariable::new(Space::EMPTY, name.clone(), None, None);
//! assert!(var.with_name(name).ptr_eq(&var));
//! ```

pub mod csharp;
pub mod java;
pub mod kinds;

pub use csharp::*;
pub use java::*;
pub use kinds::*;
