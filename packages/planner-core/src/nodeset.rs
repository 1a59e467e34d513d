//! Node-set operations over a partition's `nodes_by_state` map (spec.md
//! §4.2): flattening to a single ordered list, and removing a set of names
//! from every role.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{NodeName, RoleName};

/// Returns the concatenation of every per-role node list, in role-name
/// ascending order, in-order within each list.
#[must_use]
pub fn flatten_nodes_by_state(m: &BTreeMap<RoleName, Vec<NodeName>>) -> Vec<NodeName> {
    m.values().flatten().cloned().collect()
}

/// Returns a new mapping where every name in `remove` has been dropped from
/// every role; order within a role is preserved for surviving names. Empty
/// role lists are retained -- the slot remains, merely empty.
#[must_use]
pub fn remove_nodes_from_nodes_by_state(
    nodes_by_state: &BTreeMap<RoleName, Vec<NodeName>>,
    remove: &[NodeName],
) -> BTreeMap<RoleName, Vec<NodeName>> {
    let remove: BTreeSet<&str> = remove.iter().map(String::as_str).collect();
    nodes_by_state
        .iter()
        .map(|(role, nodes)| {
            let kept: Vec<NodeName> = nodes
                .iter()
                .filter(|n| !remove.contains(n.as_str()))
                .cloned()
                .collect();
            (role.clone(), kept)
        })
        .collect()
}
