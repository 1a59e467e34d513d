//! Per-slot candidate scoring (spec.md §4.6.1) -- the heart of the engine.
//!
//! The score for filling one replica slot with one candidate node is the
//! sum of five signed terms: stickiness, a load penalty, a smaller
//! secondary total-load penalty, a hierarchy affinity term, and a small
//! "unknown role in prevMap" bonus. Magnitudes are chosen, per spec §9
//! Open Question 1, so that: hierarchy exclusion dominates everything
//! (short of infeasibility), hierarchy inclusion dominates stickiness when
//! a rule applies, and stickiness dominates single-unit load differences.
//! See `DESIGN.md` for the reasoning behind the exact constants.

use std::collections::BTreeMap;

use super::hierarchy::{find_ancestor, find_leaves};
use super::load::{node_weight, LoadTable};
use super::types::{
    HierarchyRules, NodeHierarchy, NodeName, NodeWeights, Partition, PartitionModel,
    PartitionWeights, StateStickiness, DEFAULT_STATE_STICKINESS,
};

/// Bonus added when a candidate is among the leaves of the included
/// ancestor (and not excluded). Large enough to outweigh stickiness.
pub const HIERARCHY_INCLUDE_BONUS: f64 = 1_000.0;

/// Penalty subtracted when a candidate is among the leaves of the excluded
/// ancestor. Large enough to outweigh every other term; still finite, so
/// an otherwise-infeasible slot can fall back to an excluded candidate
/// rather than going unfilled (spec §4.6.1: "dominates everything except
/// absolute infeasibility").
pub const HIERARCHY_EXCLUDE_PENALTY: f64 = 1_000_000.0;

/// Weight applied to the secondary, cross-role total-load term relative to
/// the primary per-role load term.
pub const TOTAL_LOAD_WEIGHT: f64 = 0.1;

/// Bonus for a node that held some role on this partition in `prevMap`
/// which is no longer present in the current model -- treated as weak
/// stickiness (spec §4.6.1, §9 Open Question 2).
pub const UNKNOWN_ROLE_PRIOR_BONUS: f64 = 0.5;

/// Immutable context shared across every candidate scored within one
/// `plan_next_map` call.
pub struct ScoringContext<'a> {
    pub model: &'a PartitionModel,
    pub hierarchy_rules: &'a HierarchyRules,
    pub parent_map: &'a NodeHierarchy,
    pub children_map: &'a BTreeMap<NodeName, Vec<NodeName>>,
    pub node_weights: &'a NodeWeights,
    pub partition_weights: &'a PartitionWeights,
    pub state_stickiness: &'a StateStickiness,
}

/// Returns the configured stickiness bonus for `role`, or the default.
#[must_use]
pub fn stickiness_for(state_stickiness: &StateStickiness, role: &str) -> f64 {
    state_stickiness
        .get(role)
        .copied()
        .unwrap_or(DEFAULT_STATE_STICKINESS)
}

/// Scores `candidate` for the `slot_index`-th replica of `role` on a
/// partition, given the partition's prior placement (`prev_partition`, if
/// any), the current `load` table, and the `reference_node` -- the
/// partition's first higher-priority member, used as the anchor for
/// hierarchy rules. `reference_node` is `None` when this role has no
/// higher-priority member yet (e.g. the highest-priority role itself).
#[must_use]
pub fn score_candidate(
    ctx: &ScoringContext<'_>,
    load: &LoadTable,
    prev_partition: Option<&Partition>,
    candidate: &str,
    role: &str,
    slot_index: usize,
    reference_node: Option<&str>,
) -> f64 {
    let mut score = 0.0;

    // Stickiness: candidate held this exact role on this partition before.
    if let Some(prev) = prev_partition {
        if prev.role_of(candidate).map(String::as_str) == Some(role) {
            score += stickiness_for(ctx.state_stickiness, role);
        } else if let Some(prev_role) = prev.role_of(candidate) {
            // Unknown-role prior: candidate held a role that no longer
            // exists in the model. Weak stickiness, not exclusive with the
            // exact-match case above (a node can't match both).
            if !ctx.model.contains_key(prev_role) {
                score += UNKNOWN_ROLE_PRIOR_BONUS;
            }
        }
    }

    let weight = f64::from(node_weight(ctx.node_weights, candidate).max(1));
    score -= f64::from(load.load(role, candidate)) / weight;
    score -= TOTAL_LOAD_WEIGHT * (f64::from(load.total_load(candidate)) / weight);

    if let Some(reference) = reference_node {
        if let Some(rules) = ctx.hierarchy_rules.get(role) {
            if let Some(rule) = rules.get(slot_index) {
                let include_anchor = find_ancestor(reference, ctx.parent_map, rule.include_level);
                let exclude_anchor = find_ancestor(reference, ctx.parent_map, rule.exclude_level);
                let excluded = find_leaves(&exclude_anchor, ctx.children_map);
                if excluded.iter().any(|n| n == candidate) {
                    score -= HIERARCHY_EXCLUDE_PENALTY;
                } else {
                    let included = find_leaves(&include_anchor, ctx.children_map);
                    if included.iter().any(|n| n == candidate) {
                        score += HIERARCHY_INCLUDE_BONUS;
                    }
                }
            }
        }
    }

    score
}
