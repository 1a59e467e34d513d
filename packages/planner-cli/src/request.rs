//! JSON wire schema for `planctl`: `PlanRequestDoc` in, `PlanResponseDoc`
//! out. Mirrors `placement_planner_core::PlanRequest` field-for-field, with
//! `camelCase` JSON names and every optional override defaulting to empty
//! when the field is absent from the document.

use std::collections::BTreeSet;

use placement_planner_core::{
    ConstraintsOverride, HierarchyRules, NodeHierarchy, NodeName, NodeWeights, PartitionMap,
    PartitionModel, PartitionWeights, PlanOutcome, PlanRequest, StateStickiness,
};
use serde::{Deserialize, Serialize};

/// On-disk/stdin shape of a plan request. Field names match
/// `placement_planner_core::types` exactly except for the JSON
/// `camelCase` convention; `#[serde(default)]` makes every override
/// optional, matching spec.md §7's "absent optional inputs are legal".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequestDoc {
    pub prev_map: PartitionMap,
    pub all_nodes: BTreeSet<NodeName>,
    #[serde(default)]
    pub nodes_to_add: Vec<NodeName>,
    #[serde(default)]
    pub nodes_to_remove: Vec<NodeName>,
    pub model: PartitionModel,
    #[serde(default)]
    pub model_modifiers: ConstraintsOverride,
    #[serde(default)]
    pub hierarchy_rules: HierarchyRules,
    #[serde(default)]
    pub node_hierarchy: NodeHierarchy,
    #[serde(default)]
    pub node_weights: NodeWeights,
    #[serde(default)]
    pub partition_weights: PartitionWeights,
    #[serde(default)]
    pub state_stickiness: StateStickiness,
}

impl From<PlanRequestDoc> for PlanRequest {
    fn from(doc: PlanRequestDoc) -> Self {
        Self {
            prev_map: doc.prev_map,
            all_nodes: doc.all_nodes,
            nodes_to_add: doc.nodes_to_add,
            nodes_to_remove: doc.nodes_to_remove,
            model: doc.model,
            model_modifiers: doc.model_modifiers,
            hierarchy_rules: doc.hierarchy_rules,
            node_hierarchy: doc.node_hierarchy,
            node_weights: doc.node_weights,
            partition_weights: doc.partition_weights,
            state_stickiness: doc.state_stickiness,
        }
    }
}

/// On-stdout shape of a plan result: `{ nextMap, warnings }` (spec.md §6's
/// `PlanNextMap` return value, camelCased).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponseDoc {
    pub next_map: PartitionMap,
    pub warnings: Vec<String>,
}

impl From<PlanOutcome> for PlanResponseDoc {
    fn from(outcome: PlanOutcome) -> Self {
        Self {
            next_map: outcome.next_map,
            warnings: outcome.warnings,
        }
    }
}
