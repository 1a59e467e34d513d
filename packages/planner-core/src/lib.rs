//! Placement Planner Core -- a deterministic, stateless partition
//! placement planner.
//!
//! Given a cluster's current partition-to-node assignment and a policy
//! (role priority, replica counts, hierarchy separation, stickiness),
//! `plan_next_map` computes the next assignment in one pure call. There is
//! no I/O, no async, and no mutable state carried between calls -- the same
//! `PlanRequest` always produces the same `PlanOutcome`.
//!
//! - **Types** ([`types`]): the data model -- `Partition`, `PartitionModel`,
//!   hierarchy and weight maps, `PlanOutcome`.
//! - **Hierarchy** ([`hierarchy`]): ancestor/leaf lookups over the node
//!   parent map, for rack/zone-aware separation.
//! - **Node sets** ([`nodeset`]): flattening and removing nodes from a
//!   per-role node map.
//! - **Priority** ([`priority`]): stable role ordering by priority.
//! - **Constraints** ([`constraints`]): per-role replica count resolution,
//!   overridable per call.
//! - **Load** ([`load`]): per-role and total load accounting used by the
//!   scoring function's balance terms.
//! - **Removal** ([`removal`]): the removal pass applied before planning.
//! - **Scoring** ([`scoring`]): the per-candidate scoring function.
//! - **Assignment** ([`assign`]): the per-partition fill loop built on top
//!   of scoring.
//! - **Plan** ([`plan`]): `plan_next_map`, the crate's single entry point.

pub mod assign;
pub mod constraints;
pub mod error;
pub mod hierarchy;
pub mod load;
pub mod nodeset;
pub mod plan;
pub mod priority;
pub mod removal;
pub mod scoring;
pub mod types;

pub use assign::plan_partition;
pub use constraints::effective_constraints;
pub use error::{validate, PlanRequestError};
pub use hierarchy::{find_ancestor, find_leaves, map_parents_to_children};
pub use load::{node_weight, partition_weight, LoadTable};
pub use nodeset::{flatten_nodes_by_state, remove_nodes_from_nodes_by_state};
pub use plan::{plan_next_map, PlanRequest};
pub use priority::ordered_roles;
pub use removal::apply_removals;
pub use scoring::{score_candidate, stickiness_for, ScoringContext};
pub use types::{
    ConstraintsOverride, HierarchyRule, HierarchyRules, NodeHierarchy, NodeName, NodeWeights,
    Partition, PartitionMap, PartitionModel, PartitionModelState, PartitionName,
    PartitionWeights, PlanOutcome, RoleName, StateStickiness, DEFAULT_STATE_STICKINESS,
};
