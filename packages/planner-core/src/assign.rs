//! Assignment pass (spec.md §4.6): per partition, per role in priority
//! order, fill each role's remaining slots with the highest-scoring
//! candidate not already holding a *different* role on this partition --
//! whether that role was already finalized earlier this pass (higher
//! priority) or still carries its untouched incumbent from before this pass
//! (lower priority, not yet visited) -- and not already filling this role
//! itself.

use std::collections::{BTreeMap, BTreeSet};

use super::constraints::effective_constraints;
use super::load::{partition_weight, LoadTable};
use super::priority::ordered_roles;
use super::scoring::{score_candidate, ScoringContext};
use super::types::{ConstraintsOverride, NodeName, Partition, PartitionModel, PartitionWeights};

/// Plans one partition: fills every modeled role's remaining slots in
/// priority order. Returns the new `Partition` and one warning string per
/// slot that could not be filled.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn plan_partition(
    partition_name: &str,
    reduced: &Partition,
    prev_partition: Option<&Partition>,
    all_nodes: &BTreeSet<NodeName>,
    model: &PartitionModel,
    overrides: &ConstraintsOverride,
    partition_weights: &PartitionWeights,
    ctx: &ScoringContext<'_>,
    load: &mut LoadTable,
) -> (Partition, Vec<String>) {
    let mut working: BTreeMap<String, Vec<NodeName>> = reduced.nodes_by_state.clone();
    let mut warnings = Vec::new();
    let mut finalized_in_order: Vec<Vec<NodeName>> = Vec::new();
    let weight = partition_weight(partition_weights, partition_name);

    for role in ordered_roles(model) {
        let Some(needed_total) = effective_constraints(model, overrides, &role) else {
            continue;
        };
        let needed_total = needed_total as usize;

        let mut assigned: Vec<NodeName> = working.get(&role).cloned().unwrap_or_default();

        // A node already holding a different role on this partition is off
        // limits here -- whether that role already finished this pass or
        // simply hasn't been visited yet and still carries its prior
        // incumbent.
        let occupied_by_other_roles: BTreeSet<NodeName> = working
            .iter()
            .filter(|(r, _)| *r != &role)
            .flat_map(|(_, nodes)| nodes.iter().cloned())
            .collect();

        let mut pool: BTreeSet<NodeName> = all_nodes
            .iter()
            .filter(|n| !occupied_by_other_roles.contains(*n) && !assigned.contains(*n))
            .cloned()
            .collect();

        let reference_node: Option<&str> = finalized_in_order
            .iter()
            .find_map(|nodes| nodes.first())
            .map(String::as_str);

        while assigned.len() < needed_total {
            if pool.is_empty() {
                let msg = format!(
                    "could not meet constraints for partition={partition_name} state={role}"
                );
                tracing::warn!(partition = %partition_name, state = %role, "{msg}");
                warnings.push(msg);
                continue_filling_remaining_warnings(
                    needed_total - assigned.len() - 1,
                    partition_name,
                    &role,
                    &mut warnings,
                );
                break;
            }

            let slot_index = assigned.len();
            let winner = pool
                .iter()
                .map(|candidate| {
                    let score = score_candidate(
                        ctx,
                        load,
                        prev_partition,
                        candidate,
                        &role,
                        slot_index,
                        reference_node,
                    );
                    (candidate.clone(), score)
                })
                .max_by(|(name_a, score_a), (name_b, score_b)| {
                    score_a
                        .partial_cmp(score_b)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| name_b.cmp(name_a))
                })
                .map(|(name, _)| name)
                .expect("pool is non-empty");

            pool.remove(&winner);
            load.record(&role, &winner, weight);
            assigned.push(winner);
        }

        working.insert(role.clone(), assigned.clone());
        finalized_in_order.push(assigned);
    }

    (
        Partition {
            nodes_by_state: working,
        },
        warnings,
    )
}

/// Emits the remaining under-fill warnings after the pool has gone dry
/// mid-role. `remaining` is the count still needed beyond the one warning
/// already pushed by the caller.
fn continue_filling_remaining_warnings(
    remaining: usize,
    partition_name: &str,
    role: &str,
    warnings: &mut Vec<String>,
) {
    for _ in 0..remaining {
        let msg = format!("could not meet constraints for partition={partition_name} state={role}");
        tracing::warn!(partition = %partition_name, state = %role, "{msg}");
        warnings.push(msg);
    }
}
