//! Effective per-role constraint resolution: `constraints` from the
//! `PartitionModel`, overridden per-call by `ConstraintsOverride` when
//! present (spec.md §3, `modelStateConstraintsOverride`).

use super::types::{ConstraintsOverride, PartitionModel};

/// Returns the number of nodes a partition should hold for `role`: the
/// override if one is present for this role, else the model's own
/// `constraints`, else `None` if `role` isn't in the model at all (an
/// unmodeled role is ignored by the planner, not planned to zero).
#[must_use]
pub fn effective_constraints(
    model: &PartitionModel,
    overrides: &ConstraintsOverride,
    role: &str,
) -> Option<u32> {
    let base = model.get(role)?.constraints;
    Some(overrides.get(role).copied().unwrap_or(base))
}
