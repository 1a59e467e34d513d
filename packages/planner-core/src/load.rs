//! Load accounting (spec.md §4.4).
//!
//! `LoadTable` tracks, per role and per node, the summed `partitionWeights`
//! of every partition the node currently holds that role for -- plus a
//! total across all roles for the secondary balance term in `scoring.rs`.
//! It starts from the current state of the plan being built and is updated
//! incrementally as the assignment pass hands out slots, so each decision
//! sees load as of the moment it's made, not a snapshot from before
//! planning started.

use std::collections::BTreeMap;

use super::types::{NodeName, NodeWeights, PartitionMap, PartitionWeights, RoleName};

/// Weight of a partition, defaulting to 1 when absent from `weights`.
#[must_use]
pub fn partition_weight(weights: &PartitionWeights, partition: &str) -> u32 {
    weights.get(partition).copied().unwrap_or(1)
}

/// Capacity weight of a node, defaulting to 1 when absent from `weights`.
#[must_use]
pub fn node_weight(weights: &NodeWeights, node: &str) -> u32 {
    weights.get(node).copied().unwrap_or(1)
}

/// Mutable per-role, per-node load accounting, built from a `PartitionMap`
/// and kept current as the assignment pass proceeds.
#[derive(Debug, Clone, Default)]
pub struct LoadTable {
    per_role: BTreeMap<RoleName, BTreeMap<NodeName, u32>>,
    total: BTreeMap<NodeName, u32>,
}

impl LoadTable {
    /// Builds a `LoadTable` by summing `partitionWeights` (default 1) over
    /// every (partition, role, node) triple currently present in
    /// `partitions` (spec.md §4.4 `countStateNodes`).
    #[must_use]
    pub fn from_partition_map(partitions: &PartitionMap, weights: &PartitionWeights) -> Self {
        let mut table = Self::default();
        for (name, partition) in partitions {
            let w = partition_weight(weights, name);
            for (role, nodes) in &partition.nodes_by_state {
                for node in nodes {
                    table.record(role, node, w);
                }
            }
        }
        table
    }

    /// Current load for `node` under `role`.
    #[must_use]
    pub fn load(&self, role: &str, node: &str) -> u32 {
        self.per_role
            .get(role)
            .and_then(|m| m.get(node))
            .copied()
            .unwrap_or(0)
    }

    /// Current load for `node` summed across every role.
    #[must_use]
    pub fn total_load(&self, node: &str) -> u32 {
        self.total.get(node).copied().unwrap_or(0)
    }

    /// Records a new assignment of `node` to `role` with the given
    /// partition weight, updating both the per-role and total tallies.
    pub fn record(&mut self, role: &str, node: &str, weight: u32) {
        *self
            .per_role
            .entry(role.to_string())
            .or_default()
            .entry(node.to_string())
            .or_insert(0) += weight;
        *self.total.entry(node.to_string()).or_insert(0) += weight;
    }
}
