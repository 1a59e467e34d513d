//! Data model for the partition placement planner.
//!
//! Mirrors the shape of `spec.md` §3 as explicit, statically typed Rust
//! structs rather than string-keyed dynamic maps: role names, node names,
//! and partition names stay opaque `String`s (callers define them), but the
//! policy *around* them (priority, constraints, stickiness, hierarchy) is
//! named fields, not untyped lookups.
//!
//! All maps use `BTreeMap` so iteration is already in sorted order at every
//! use site -- no separate sort step is needed before scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opaque node name. Names are unique within one `PlanNextMap` call.
pub type NodeName = String;

/// An opaque role ("state") name, e.g. `"master"`, `"slave"`.
pub type RoleName = String;

/// An opaque partition name.
pub type PartitionName = String;

// ---------------------------------------------------------------------------
// Partition / PartitionMap
// ---------------------------------------------------------------------------

/// One logical shard: a mapping from role name to the ordered list of nodes
/// currently holding that role.
///
/// Per-role node lists have no duplicates, and a node appears under at most
/// one role within a single partition -- both are invariants the planner
/// maintains, not ones the type itself enforces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub nodes_by_state: BTreeMap<RoleName, Vec<NodeName>>,
}

impl Partition {
    /// Returns the nodes currently assigned to `role`, or an empty slice if
    /// the role has no entry yet.
    pub fn nodes_in_role(&self, role: &str) -> &[NodeName] {
        self.nodes_by_state
            .get(role)
            .map_or(&[][..], |v| v.as_slice())
    }

    /// Returns every node assigned to this partition, across all roles.
    pub fn all_nodes(&self) -> impl Iterator<Item = &NodeName> {
        self.nodes_by_state.values().flatten()
    }

    /// Returns the role a node currently holds on this partition, if any.
    pub fn role_of(&self, node: &str) -> Option<&RoleName> {
        self.nodes_by_state
            .iter()
            .find(|(_, nodes)| nodes.iter().any(|n| n == node))
            .map(|(role, _)| role)
    }
}

/// Mapping from partition name to `Partition`. Keys are unique; the planner
/// always processes them in sorted order regardless of the map's own
/// iteration order.
pub type PartitionMap = BTreeMap<PartitionName, Partition>;

// ---------------------------------------------------------------------------
// PartitionModel
// ---------------------------------------------------------------------------

/// Policy for one role: how important it is relative to other roles
/// (`priority`, lower = more important, 0 is highest) and how many nodes a
/// partition should have in this role (`constraints`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionModelState {
    pub priority: u32,
    pub constraints: u32,
}

/// Mapping from role name to its `PartitionModelState`. Priorities need not
/// be unique; ties are broken by role-name ascending (see `priority.rs`).
pub type PartitionModel = BTreeMap<RoleName, PartitionModelState>;

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

/// One separation preference for a role's replica slot.
///
/// `include_level` and `exclude_level` are ancestor levels relative to a
/// reference node (level 0 is the node itself, level *k* is its *k*th
/// ancestor via the parent map): candidates among the leaves of the
/// `include_level` ancestor, minus the leaves of the `exclude_level`
/// ancestor, get a placement bonus; candidates among the excluded leaves
/// get a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyRule {
    pub include_level: u32,
    pub exclude_level: u32,
}

/// Mapping from role name to an ordered list of `HierarchyRule`; index *i*
/// is consulted when filling the *i*th replica slot of that role.
pub type HierarchyRules = BTreeMap<RoleName, Vec<HierarchyRule>>;

/// Parent map for the node hierarchy: node (or group) name to its parent
/// group. A name absent from the map has no parent. Must be acyclic --
/// cycles are a caller bug (see `hierarchy::find_ancestor`).
pub type NodeHierarchy = BTreeMap<NodeName, NodeName>;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Per-partition weight, scaling how much a partition "costs" when a node
/// hosts it. Absent entries default to 1.
pub type PartitionWeights = BTreeMap<PartitionName, u32>;

/// Per-node weight, scaling a node's load capacity. Absent entries default
/// to 1.
pub type NodeWeights = BTreeMap<NodeName, u32>;

/// Per-role override of `PartitionModelState::constraints` for a single
/// `PlanNextMap` invocation.
pub type ConstraintsOverride = BTreeMap<RoleName, u32>;

/// Per-role stickiness bonus: the score added for keeping a node in the
/// same role across a replan. Absent entries default to
/// [`DEFAULT_STATE_STICKINESS`].
pub type StateStickiness = BTreeMap<RoleName, f64>;

/// Default per-role stickiness bonus when `StateStickiness` has no entry
/// for a role. See `scoring.rs` for how this interacts with the other
/// scoring terms.
pub const DEFAULT_STATE_STICKINESS: f64 = 1.5;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Result of `plan_next_map`: the new partition table plus one warning per
/// (partition, role) slot that could not be filled.
///
/// Never an error type -- the planner has no hard-failure mode (spec §7);
/// this is the whole of what it returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutcome {
    pub next_map: PartitionMap,
    pub warnings: Vec<String>,
}
