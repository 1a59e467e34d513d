//! Priority ordering of roles (spec.md §4.3).
//!
//! Roles are planned in ascending `priority` (0 is highest), ties broken
//! by ascending role name. Roles absent from the model are ignored.

use super::types::{PartitionModel, RoleName};

/// Returns the model's role names ordered by ascending `priority`, ties
/// broken by ascending role name.
#[must_use]
pub fn ordered_roles(model: &PartitionModel) -> Vec<RoleName> {
    let mut roles: Vec<&RoleName> = model.keys().collect();
    roles.sort_by(|a, b| {
        let pa = model[*a].priority;
        let pb = model[*b].priority;
        pa.cmp(&pb).then_with(|| a.cmp(b))
    });
    roles.into_iter().cloned().collect()
}
