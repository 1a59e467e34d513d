//! Removal pass (spec.md §4.5).
//!
//! For every partition, in sorted name order, drop every node listed in
//! `nodes_to_remove` from every role. This pass only shrinks node sets; it
//! never judges whether a role ends up under-filled. Under-fill warnings
//! are the assignment pass's job (`assign.rs`), since a slot this pass
//! empties may still be refilled from `allNodes` before planning is done
//! (spec §8 invariant 5: one warning per `(partition, role)` slot that's
//! still short in the *final* assignment, not an intermediate one).

use super::nodeset::remove_nodes_from_nodes_by_state;
use super::types::{NodeName, PartitionMap};

/// Applies `nodes_to_remove` to every partition in `partitions` (sorted by
/// partition name) and returns the reduced map.
///
/// `BTreeMap` already iterates partitions in sorted name order, so no
/// separate sort is needed here.
#[must_use]
pub fn apply_removals(partitions: &PartitionMap, nodes_to_remove: &[NodeName]) -> PartitionMap {
    partitions
        .iter()
        .map(|(name, partition)| {
            let reduced =
                remove_nodes_from_nodes_by_state(&partition.nodes_by_state, nodes_to_remove);
            (
                name.clone(),
                super::types::Partition {
                    nodes_by_state: reduced,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Partition;

    fn partitions(entries: &[(&str, &[(&str, &[&str])])]) -> PartitionMap {
        entries
            .iter()
            .map(|(pname, roles)| {
                let mut p = Partition::default();
                for (role, nodes) in *roles {
                    p.nodes_by_state.insert(
                        (*role).to_string(),
                        nodes.iter().map(|n| (*n).to_string()).collect(),
                    );
                }
                ((*pname).to_string(), p)
            })
            .collect()
    }

    #[test]
    fn removal_with_no_removals_is_identity() {
        let parts = partitions(&[("0", &[("master", &["a"])])]);
        let out = apply_removals(&parts, &[]);
        assert_eq!(out, parts);
    }

    #[test]
    fn removal_drops_named_node() {
        let parts = partitions(&[("0", &[("master", &["a", "b"])])]);
        let out = apply_removals(&parts, &["a".to_string()]);
        assert_eq!(
            out.get("0").unwrap().nodes_in_role("master"),
            &["b".to_string()]
        );
    }

    #[test]
    fn removal_leaves_under_filled_role_under_filled() {
        let parts = partitions(&[("0", &[("master", &["a"])])]);
        let out = apply_removals(&parts, &["a".to_string()]);
        assert!(out.get("0").unwrap().nodes_in_role("master").is_empty());
    }

    #[test]
    fn removal_processes_partitions_in_sorted_order_but_result_covers_all() {
        let parts = partitions(&[
            ("z", &[("master", &["a"])]),
            ("a", &[("master", &["a"])]),
        ]);
        let out = apply_removals(&parts, &[]);
        assert_eq!(out.len(), 2);
        assert!(out.contains_key("a"));
        assert!(out.contains_key("z"));
    }
}
