//! Hierarchy helpers: ancestor lookup, parent-to-children inversion, and
//! leaf enumeration over the node hierarchy (spec.md §4.1).
//!
//! The hierarchy is a forest encoded as a parent map (`NodeHierarchy`); a
//! derived children map is used for descent. Recursion is bounded by the
//! number of distinct names so a cyclic parent map (a caller bug per spec
//! §7) cannot hang the planner.

use std::collections::BTreeMap;

use super::types::{NodeHierarchy, NodeName};

/// Returns the `level`-th ancestor of `node` via `parent_map`.
///
/// Level 0 is `node` itself; level *k* recurses on the parent. If the chain
/// ends (a name with no parent entry) before reaching `level`, returns the
/// empty string as a sentinel -- callers treat it as "no such ancestor".
#[must_use]
pub fn find_ancestor(node: &str, parent_map: &NodeHierarchy, level: u32) -> NodeName {
    let bound = parent_map.len() as u32 + 1;
    let mut current = node.to_string();
    let mut remaining = level;

    while remaining > 0 {
        if remaining > bound {
            // Cyclic parent map: a caller bug (spec §7). Bail out rather
            // than loop forever.
            return String::new();
        }
        match parent_map.get(&current) {
            Some(parent) => {
                current = parent.clone();
                remaining -= 1;
            }
            None => return String::new(),
        }
    }

    current
}

/// Inverts `parent_map` into a mapping from group name to its sorted list
/// of direct children.
#[must_use]
pub fn map_parents_to_children(parent_map: &NodeHierarchy) -> BTreeMap<NodeName, Vec<NodeName>> {
    let mut children: BTreeMap<NodeName, Vec<NodeName>> = BTreeMap::new();
    for (child, parent) in parent_map {
        children.entry(parent.clone()).or_default().push(child.clone());
    }
    for list in children.values_mut() {
        list.sort();
    }
    children
}

/// Returns all leaf descendants of `name` by depth-first search through
/// `children_map`.
///
/// A name absent as a key in `children_map` is itself a leaf. If `name` is
/// the empty-string sentinel from [`find_ancestor`], this returns an empty
/// list -- there is no such ancestor to take leaves of.
#[must_use]
pub fn find_leaves(name: &str, children_map: &BTreeMap<NodeName, Vec<NodeName>>) -> Vec<NodeName> {
    if name.is_empty() {
        return Vec::new();
    }

    match children_map.get(name) {
        None => vec![name.to_string()],
        Some(children) => {
            let mut out = Vec::new();
            let mut stack: Vec<&str> = children.iter().map(String::as_str).collect();
            // Depth-first, but push in reverse so we visit in ascending
            // order overall -- children lists are already sorted.
            stack.reverse();
            while let Some(n) = stack.pop() {
                match children_map.get(n) {
                    None => out.push(n.to_string()),
                    Some(grandchildren) => {
                        let mut rev: Vec<&str> =
                            grandchildren.iter().map(String::as_str).collect();
                        rev.reverse();
                        stack.extend(rev);
                    }
                }
            }
            out.sort();
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy() -> NodeHierarchy {
        // a, b -> rack0 -> zone0
        // c, d -> rack1 -> zone0
        let mut m = NodeHierarchy::new();
        m.insert("a".to_string(), "rack0".to_string());
        m.insert("b".to_string(), "rack0".to_string());
        m.insert("c".to_string(), "rack1".to_string());
        m.insert("d".to_string(), "rack1".to_string());
        m.insert("rack0".to_string(), "zone0".to_string());
        m.insert("rack1".to_string(), "zone0".to_string());
        m
    }

    #[test]
    fn ancestor_level_zero_is_self() {
        let m = hierarchy();
        assert_eq!(find_ancestor("a", &m, 0), "a");
    }

    #[test]
    fn ancestor_level_one_is_parent() {
        let m = hierarchy();
        assert_eq!(find_ancestor("a", &m, 1), "rack0");
    }

    #[test]
    fn ancestor_level_two_is_grandparent() {
        let m = hierarchy();
        assert_eq!(find_ancestor("a", &m, 2), "zone0");
    }

    #[test]
    fn ancestor_past_root_is_sentinel() {
        let m = hierarchy();
        assert_eq!(find_ancestor("a", &m, 3), "");
    }

    #[test]
    fn ancestor_of_unknown_node_is_self_at_zero() {
        let m = hierarchy();
        assert_eq!(find_ancestor("unknown", &m, 0), "unknown");
        assert_eq!(find_ancestor("unknown", &m, 1), "");
    }

    #[test]
    fn ancestor_bounds_recursion_on_cycle() {
        let mut m = NodeHierarchy::new();
        m.insert("x".to_string(), "y".to_string());
        m.insert("y".to_string(), "x".to_string());
        // Should terminate rather than loop forever.
        assert_eq!(find_ancestor("x", &m, 10_000), "");
    }

    #[test]
    fn children_map_inverts_and_sorts() {
        let m = hierarchy();
        let children = map_parents_to_children(&m);
        assert_eq!(
            children.get("rack0"),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            children.get("rack1"),
            Some(&vec!["c".to_string(), "d".to_string()])
        );
        assert_eq!(children.get("zone0"), Some(&vec!["rack0".to_string(), "rack1".to_string()]));
    }

    #[test]
    fn leaves_of_unknown_key_is_self() {
        let children = BTreeMap::new();
        assert_eq!(find_leaves("solo", &children), vec!["solo".to_string()]);
    }

    #[test]
    fn leaves_of_rack_are_its_nodes() {
        let m = hierarchy();
        let children = map_parents_to_children(&m);
        assert_eq!(
            find_leaves("rack0", &children),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn leaves_of_zone_descend_through_racks() {
        let m = hierarchy();
        let children = map_parents_to_children(&m);
        assert_eq!(
            find_leaves("zone0", &children),
            vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()]
        );
    }

    #[test]
    fn leaves_of_sentinel_is_empty() {
        let children = BTreeMap::new();
        assert!(find_leaves("", &children).is_empty());
    }
}
