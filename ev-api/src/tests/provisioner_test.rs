use assertables::*;

use super::*;

#[fixture]
fn cond_ready() -> Condition {
    Condition::new(CONDITION_READY, ConditionStatus::True)
}

#[fixture]
fn cond_unprovisioned() -> Condition {
    Condition::new("Unprovisioned", ConditionStatus::False)
}

fn initialized_status() -> ClusterProvisionerStatus {
    let mut status = ClusterProvisionerStatus::default();
    status.init_conditions();
    status
}

fn status_with(conditions: Vec<Condition>) -> ClusterProvisionerStatus {
    ClusterProvisionerStatus { conditions }
}

#[rstest]
#[case::uninitialized(ClusterProvisionerStatus::default(), false)]
#[case::initialized(initialized_status(), false)]
#[case::ready_true_condition(status_with(vec![Condition::new(CONDITION_READY, ConditionStatus::True)]), true)]
#[case::ready_false_condition(status_with(vec![Condition::new(CONDITION_READY, ConditionStatus::False)]), false)]
#[case::unknown_condition(status_with(vec![Condition::new("foo", ConditionStatus::True)]), false)]
fn test_cluster_provisioner_status_is_ready(#[case] status: ClusterProvisionerStatus, #[case] want: bool) {
    assert_eq!(status.is_ready(), want);
}

#[rstest]
fn test_cluster_provisioner_status_get_condition(cond_ready: Condition) {
    let status = status_with(vec![cond_ready.clone()]);
    assert_eq!(status.get_condition(CONDITION_READY), Some(&cond_ready));
}

#[rstest]
fn test_cluster_provisioner_status_get_condition_unknown_type(
    cond_ready: Condition,
    cond_unprovisioned: Condition,
) {
    let status = status_with(vec![cond_ready, cond_unprovisioned]);
    assert_none!(status.get_condition("foo"));
}
