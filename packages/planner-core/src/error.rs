//! Structural request validation (spec.md §7, SPEC_FULL.md ambient error
//! handling section).
//!
//! `plan_next_map` itself never fails -- it has no hard-failure mode, only
//! warning strings. `validate` is an opt-in step a caller can run first to
//! catch structural mistakes (a hierarchy rule or constraint override
//! naming a role the model doesn't know about) that would otherwise be
//! silently ignored, since `plan_next_map` treats any such entry as if it
//! were simply absent.

use thiserror::Error;

use super::types::PartitionModel;
use super::plan::PlanRequest;

/// A structural problem with a `PlanRequest` that `validate` can detect
/// ahead of planning. None of these stop `plan_next_map` from running --
/// they describe configuration that the algorithm will quietly ignore.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanRequestError {
    #[error("hierarchy rules reference unknown role `{0}`")]
    HierarchyRuleUnknownRole(String),

    #[error("constraints override references unknown role `{0}`")]
    ConstraintsOverrideUnknownRole(String),

    #[error("state stickiness override references unknown role `{0}`")]
    StickinessUnknownRole(String),
}

/// Checks `request` for structural mistakes and returns every one found,
/// in a deterministic order (hierarchy rules, then constraint overrides,
/// then stickiness overrides; each sorted by role name since the backing
/// maps are `BTreeMap`s).
pub fn validate(request: &PlanRequest) -> Vec<PlanRequestError> {
    let mut problems = Vec::new();
    collect_unknown_roles(
        &request.model,
        request.hierarchy_rules.keys(),
        PlanRequestError::HierarchyRuleUnknownRole,
        &mut problems,
    );
    collect_unknown_roles(
        &request.model,
        request.model_modifiers.keys(),
        PlanRequestError::ConstraintsOverrideUnknownRole,
        &mut problems,
    );
    collect_unknown_roles(
        &request.model,
        request.state_stickiness.keys(),
        PlanRequestError::StickinessUnknownRole,
        &mut problems,
    );
    problems
}

fn collect_unknown_roles<'a>(
    model: &PartitionModel,
    roles: impl Iterator<Item = &'a String>,
    make_error: impl Fn(String) -> PlanRequestError,
    problems: &mut Vec<PlanRequestError>,
) {
    for role in roles {
        if !model.contains_key(role) {
            problems.push(make_error(role.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HierarchyRule, PartitionModelState};

    fn model_with_master() -> PartitionModel {
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
    fn valid_request_has_no_problems() {
        let request = PlanRequest {
            model: model_with_master(),
            ..PlanRequest::default()
        };
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn hierarchy_rule_for_unknown_role_is_reported() {
        let mut request = PlanRequest {
            model: model_with_master(),
            ..PlanRequest::default()
        };
        request.hierarchy_rules.insert(
            "ghost".to_string(),
            vec![HierarchyRule {
                include_level: 1,
                exclude_level: 0,
            }],
        );
        let problems = validate(&request);
        assert_eq!(
            problems,
            vec![PlanRequestError::HierarchyRuleUnknownRole("ghost".to_string())]
        );
    }

    #[test]
    fn constraints_override_for_unknown_role_is_reported() {
        let mut request = PlanRequest {
            model: model_with_master(),
            ..PlanRequest::default()
        };
        request.model_modifiers.insert("ghost".to_string(), 2);
        let problems = validate(&request);
        assert_eq!(
            problems,
            vec![PlanRequestError::ConstraintsOverrideUnknownRole(
                "ghost".to_string()
            )]
        );
    }

    #[test]
    fn stickiness_override_for_unknown_role_is_reported() {
        let mut request = PlanRequest {
            model: model_with_master(),
            ..PlanRequest::default()
        };
        request.state_stickiness.insert("ghost".to_string(), 3.0);
        let problems = validate(&request);
        assert_eq!(
            problems,
            vec![PlanRequestError::StickinessUnknownRole("ghost".to_string())]
        );
    }
}
