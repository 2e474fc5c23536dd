// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Incremental transfer of trees between processes.
//!
//! A sender holds the value the receiver last saw (`before`) and the value it
//! wants the receiver to have (`after`), and sends the difference as an
//! [`RpcObjectData`]:
//!
//! | before / after                         | state      | value                    |
//! |----------------------------------------|------------|--------------------------|
//! | same handle, or both absent            | `NoChange` | none                     |
//! | after absent                           | `Delete`   | none                     |
//! | before absent, or a different id/kind  | `Add`      | the whole node           |
//! | same id and kind, different content    | `Change`   | only the changed fields  |
//!
//! Field values are the node's serialized fields in declaration order, so
//! both sides agree on the wire order per node kind.
//!
//! ```
//! use lstkit_cst::nodes::Identifier;
//! use lstkit_cst::rpc::{receive, send, RpcState};
//! use lstkit_cst::tree::Tree;
//!
//! let before: Tree = Identifier::build("a").into();
//! let after: Tree = before.cast::<Identifier>().unwrap().with_simple_name("b".into()).into();
//!
//! let data = send(Some(&before), Some(&after)).unwrap();
//! assert_eq!(data.state, RpcState::Change);
//! let received = receive(Some(&before), &data).unwrap().unwrap();
//! assert!(received.structurally_eq(&after));
//! assert_eq!(received.id(), after.id());
//! ```

use std::collections::HashMap;

use lstkit_core::identity::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::trace;

use crate::tree::Tree;

/// Errors decoding a transfer.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{state:?} requires the receiver to hold a previous value")]
    MissingBefore { state: RpcState },

    #[error("malformed wire value: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed wire value: {0}")]
    MalformedValue(String),

    #[error("no previous value with id {0}")]
    UnknownId(NodeId),
}

/// What happened to a value between two transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpcState {
    NoChange,
    Add,
    Change,
    Delete,
}

/// One value on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcObjectData {
    pub state: RpcState,
    /// Node kind of the value, for `Add` and `Change`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl RpcObjectData {
    fn bare(state: RpcState) -> Self {
        Self {
            state,
            value_type: None,
            value: None,
        }
    }
}

/// A list transfer: the ids of the new list in order, and one transfer per
/// element against the previous element with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcListData {
    pub ids: Vec<NodeId>,
    pub items: Vec<RpcObjectData>,
}

/// The serialized fields of a node, under its family and kind tags.
fn wire_fields(tree: &Tree) -> Result<Map<String, Value>, RpcError> {
    let (_family, by_kind) = single_entry(serde_json::to_value(tree)?)?;
    let (kind, fields) = single_entry(by_kind)?;
    match fields {
        Value::Object(fields) => Ok(fields),
        other => Err(RpcError::MalformedValue(format!(
            "{kind} fields are not an object: {other}"
        ))),
    }
}

fn single_entry(value: Value) -> Result<(String, Value), RpcError> {
    match value {
        Value::Object(map) if map.len() == 1 => map
            .into_iter()
            .next()
            .ok_or_else(|| RpcError::MalformedValue("empty tag".to_string())),
        other => Err(RpcError::MalformedValue(format!(
            "expected a single tagged entry, found {other}"
        ))),
    }
}

/// Encode `after` against the receiver's `before`.
pub fn send(before: Option<&Tree>, after: Option<&Tree>) -> Result<RpcObjectData, RpcError> {
    let Some(after) = after else {
        return Ok(match before {
            Some(_) => RpcObjectData::bare(RpcState::Delete),
            None => RpcObjectData::bare(RpcState::NoChange),
        });
    };

    let before = match before {
        Some(before) if before.ptr_eq(after) => {
            return Ok(RpcObjectData::bare(RpcState::NoChange));
        }
        Some(before) if before.id() == after.id() && before.kind_name() == after.kind_name() => {
            before
        }
        _ => {
            trace!(kind = after.kind_name(), id = %after.id(), "rpc add");
            return Ok(RpcObjectData {
                state: RpcState::Add,
                value_type: Some(after.kind_name().to_string()),
                value: Some(serde_json::to_value(after)?),
            });
        }
    };

    let old = wire_fields(before)?;
    let new = wire_fields(after)?;
    let mut changed = Map::new();
    for (field, value) in &new {
        if old.get(field) != Some(value) {
            changed.insert(field.clone(), value.clone());
        }
    }
    // A field that is no longer serialized (an emptied marker list) is sent
    // as null.
    for field in old.keys() {
        if !new.contains_key(field) {
            changed.insert(field.clone(), Value::Null);
        }
    }

    if changed.is_empty() {
        return Ok(RpcObjectData::bare(RpcState::NoChange));
    }
    trace!(kind = after.kind_name(), fields = changed.len(), "rpc change");
    Ok(RpcObjectData {
        state: RpcState::Change,
        value_type: Some(after.kind_name().to_string()),
        value: Some(Value::Object(changed)),
    })
}

/// Decode a transfer against the value the receiver holds.
///
/// Returns `None` for `Delete`. A `NoChange` hands back `before` itself, and
/// a `Change` shares every field of `before` it does not name.
pub fn receive(before: Option<&Tree>, data: &RpcObjectData) -> Result<Option<Tree>, RpcError> {
    match data.state {
        RpcState::NoChange => Ok(before.cloned()),
        RpcState::Delete => Ok(None),
        RpcState::Add => {
            let value = data
                .value
                .clone()
                .ok_or_else(|| RpcError::MalformedValue("add without a value".to_string()))?;
            Ok(Some(serde_json::from_value(value)?))
        }
        RpcState::Change => {
            let before = before.ok_or(RpcError::MissingBefore { state: data.state })?;
            if let Some(kind) = &data.value_type {
                if kind != before.kind_name() {
                    return Err(RpcError::MalformedValue(format!(
                        "change for {kind} applied to {}",
                        before.kind_name()
                    )));
                }
            }
            let Some(Value::Object(changed)) = &data.value else {
                return Err(RpcError::MalformedValue(
                    "change without a field map".to_string(),
                ));
            };
            Ok(Some(before.with_serialized_fields(changed)?))
        }
    }
}

/// Encode a list, matching elements to the previous list by id.
pub fn send_list(before: &[Tree], after: &[Tree]) -> Result<RpcListData, RpcError> {
    let previous: HashMap<NodeId, &Tree> = before.iter().map(|t| (t.id(), t)).collect();
    let mut data = RpcListData {
        ids: Vec::with_capacity(after.len()),
        items: Vec::with_capacity(after.len()),
    };
    for tree in after {
        data.ids.push(tree.id());
        data.items
            .push(send(previous.get(&tree.id()).copied(), Some(tree))?);
    }
    Ok(data)
}

/// Rebuild a list from [`send_list`] output. Unchanged elements are the
/// receiver's own handles.
pub fn receive_list(before: &[Tree], data: &RpcListData) -> Result<Vec<Tree>, RpcError> {
    if data.ids.len() != data.items.len() {
        return Err(RpcError::MalformedValue(format!(
            "{} ids for {} items",
            data.ids.len(),
            data.items.len()
        )));
    }
    let previous: HashMap<NodeId, &Tree> = before.iter().map(|t| (t.id(), t)).collect();
    let mut trees = Vec::with_capacity(data.items.len());
    for (id, item) in data.ids.iter().zip(&data.items) {
        let before = previous.get(id).copied();
        if before.is_none() && matches!(item.state, RpcState::NoChange | RpcState::Change) {
            return Err(RpcError::UnknownId(*id));
        }
        match receive(before, item)? {
            Some(tree) => trees.push(tree),
            None => {
                return Err(RpcError::MalformedValue(format!(
                    "list element {id} cannot be deleted in place"
                )))
            }
        }
    }
    Ok(trees)
}
