//! Top-level entry point (spec.md §4.7): `plan_next_map`.
//!
//! Normalizes inputs, applies removals, then runs the assignment pass over
//! every partition in sorted name order. Pure and deterministic: the same
//! `PlanRequest` always produces the same `PlanOutcome`, and nothing here
//! does I/O, spawns a task, or holds state between calls.

use std::collections::BTreeSet;

use super::assign::plan_partition;
use super::hierarchy::map_parents_to_children;
use super::load::LoadTable;
use super::removal::apply_removals;
use super::scoring::ScoringContext;
use super::types::{
    ConstraintsOverride, HierarchyRules, NodeHierarchy, NodeName, NodeWeights, PartitionMap,
    PartitionModel, PartitionWeights, PlanOutcome, StateStickiness,
};

/// One call to the planner: everything `plan_next_map` needs to produce the
/// next `PartitionMap` from the current one.
///
/// `all_nodes` is authoritative -- the planner never assigns a node outside
/// it. `nodes_to_add` is an informational hint from the caller (e.g. a
/// membership change that motivated this replan) and doesn't change planner
/// behavior beyond `all_nodes` already containing the new node.
/// `nodes_to_remove` changes planner behavior directly: it drives the
/// removal pass, and a node it names is also excluded from the assignment
/// pass's candidate pool, so a node being removed is never handed a role on
/// this replan even though it may still appear in `all_nodes` (this matches
/// the "swap" scenarios in the source algorithm's test suite, where a
/// removed node never comes back even while it's still a known cluster
/// member). A name in `nodes_to_remove` that isn't actually in `prev_map` is
/// simply a no-op for the removal pass.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub prev_map: PartitionMap,
    pub all_nodes: BTreeSet<NodeName>,
    pub nodes_to_add: Vec<NodeName>,
    pub nodes_to_remove: Vec<NodeName>,
    pub model: PartitionModel,
    pub model_modifiers: ConstraintsOverride,
    pub hierarchy_rules: HierarchyRules,
    pub node_hierarchy: NodeHierarchy,
    pub node_weights: NodeWeights,
    pub partition_weights: PartitionWeights,
    pub state_stickiness: StateStickiness,
}

/// Computes the next `PartitionMap` for `request`.
///
/// An empty `prev_map` yields an empty result with no warnings. An empty
/// `model` returns a result structurally equal to `prev_map` (after removals)
/// with no further warnings, since no role has anything to fill or enforce.
#[must_use]
pub fn plan_next_map(request: &PlanRequest) -> PlanOutcome {
    if request.prev_map.is_empty() {
        return PlanOutcome::default();
    }

    let reduced = apply_removals(&request.prev_map, &request.nodes_to_remove);

    if request.model.is_empty() {
        return PlanOutcome {
            next_map: reduced,
            warnings: Vec::new(),
        };
    }

    let mut warnings = Vec::new();

    let children_map = map_parents_to_children(&request.node_hierarchy);
    let ctx = ScoringContext {
        model: &request.model,
        hierarchy_rules: &request.hierarchy_rules,
        parent_map: &request.node_hierarchy,
        children_map: &children_map,
        node_weights: &request.node_weights,
        partition_weights: &request.partition_weights,
        state_stickiness: &request.state_stickiness,
    };
    let mut load = LoadTable::from_partition_map(&reduced, &request.partition_weights);

    let candidate_nodes: BTreeSet<NodeName> = request
        .all_nodes
        .iter()
        .filter(|n| !request.nodes_to_remove.iter().any(|r| r == *n))
        .cloned()
        .collect();

    let mut next_map = PartitionMap::new();
    for (name, partition) in &reduced {
        let prev_partition = request.prev_map.get(name);
        let (planned, slot_warnings) = plan_partition(
            name,
            partition,
            prev_partition,
            &candidate_nodes,
            &request.model,
            &request.model_modifiers,
            &request.partition_weights,
            &ctx,
            &mut load,
        );
        warnings.extend(slot_warnings);
        next_map.insert(name.clone(), planned);
    }

    PlanOutcome { next_map, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Partition, PartitionModelState};

    fn nodes(names: &[&str]) -> BTreeSet<NodeName> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    fn single_master_model() -> PartitionModel {
        let mut m = PartitionModel::new();
        m.insert(
            "master".to_string(),
            PartitionModelState {
                priority: 0,
                constraints: 1,
            },
        );
        m
    }

    #[test]
    fn empty_prev_map_yields_empty_result() {
        let request = PlanRequest {
            all_nodes: nodes(&["a"]),
            model: single_master_model(),
            ..PlanRequest::default()
        };
        let outcome = plan_next_map(&request);
        assert!(outcome.next_map.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn empty_model_returns_prev_map_unchanged() {
        let mut prev_map = PartitionMap::new();
        let mut p0 = Partition::default();
        p0.nodes_by_state
            .insert("master".to_string(), vec!["a".to_string()]);
        prev_map.insert("0".to_string(), p0.clone());

        let request = PlanRequest {
            prev_map: prev_map.clone(),
            all_nodes: nodes(&["a"]),
            ..PlanRequest::default()
        };
        let outcome = plan_next_map(&request);
        assert_eq!(outcome.next_map, prev_map);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn fills_master_for_single_partition_single_node() {
        let mut prev_map = PartitionMap::new();
        prev_map.insert("0".to_string(), Partition::default());

        let request = PlanRequest {
            prev_map,
            all_nodes: nodes(&["a"]),
            model: single_master_model(),
            ..PlanRequest::default()
        };
        let outcome = plan_next_map(&request);
        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.next_map.get("0").unwrap().nodes_in_role("master"),
            &["a".to_string()]
        );
    }

    #[test]
    fn is_deterministic_across_repeated_calls() {
        let mut prev_map = PartitionMap::new();
        let mut p0 = Partition::default();
        p0.nodes_by_state
            .insert("master".to_string(), vec!["a".to_string()]);
        prev_map.insert("0".to_string(), p0);
        let mut p1 = Partition::default();
        p1.nodes_by_state
            .insert("master".to_string(), vec!["b".to_string()]);
        prev_map.insert("1".to_string(), p1);

        let request = PlanRequest {
            prev_map,
            all_nodes: nodes(&["a", "b", "c"]),
            model: single_master_model(),
            ..PlanRequest::default()
        };

        let first = plan_next_map(&request);
        let second = plan_next_map(&request);
        assert_eq!(first.next_map, second.next_map);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn nodes_to_remove_triggers_reassignment() {
        let mut prev_map = PartitionMap::new();
        let mut p0 = Partition::default();
        p0.nodes_by_state
            .insert("master".to_string(), vec!["a".to_string()]);
        prev_map.insert("0".to_string(), p0);

        let request = PlanRequest {
            prev_map,
            all_nodes: nodes(&["a", "b"]),
            nodes_to_remove: vec!["a".to_string()],
            model: single_master_model(),
            ..PlanRequest::default()
        };
        let outcome = plan_next_map(&request);
        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.next_map.get("0").unwrap().nodes_in_role("master"),
            &["b".to_string()]
        );
    }

    #[test]
    fn removed_node_is_excluded_from_reassignment_even_if_still_in_all_nodes() {
        let mut prev_map = PartitionMap::new();
        let mut p0 = Partition::default();
        p0.nodes_by_state
            .insert("master".to_string(), vec!["a".to_string()]);
        prev_map.insert("0".to_string(), p0);

        let request = PlanRequest {
            prev_map,
            all_nodes: nodes(&["a", "b", "c"]),
            nodes_to_remove: vec!["a".to_string()],
            model: single_master_model(),
            ..PlanRequest::default()
        };
        let outcome = plan_next_map(&request);
        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.next_map.get("0").unwrap().nodes_in_role("master"),
            &["c".to_string()]
        );
    }
}
