use assertables::*;
use clockabilly::mock::MockUtcClock;

use super::*;

const T0: i64 = 1000;

#[rstest]
fn test_init_conditions_sets_dependents_unknown() {
    let clock = MockUtcClock::boxed(T0);
    let mut status = ChannelStatus::default();
    status.init_conditions_with_clock(&*clock);

    let types: Vec<_> = status.conditions().iter().map(|c| c.type_.clone()).collect();
    assert_eq!(types, vec!["Provisioned", "Ready", "Serviceable"]);
    assert!(status.conditions().iter().all(|c| c.status == ConditionStatus::Unknown));
    assert!(!status.is_ready());
}

#[rstest]
fn test_init_conditions_preserves_existing() {
    let clock = MockUtcClock::boxed(T0);
    let mut status = ChannelStatus::default();
    status.set_condition_with_clock(Condition::new(CONDITION_PROVISIONED, ConditionStatus::True), &*clock);

    status.init_conditions_with_clock(&*clock);

    assert_eq!(status.get_condition(CONDITION_PROVISIONED).unwrap().status, ConditionStatus::True);
    assert_eq!(status.get_condition(CONDITION_READY).unwrap().status, ConditionStatus::Unknown);
}

#[rstest]
fn test_set_condition_keeps_list_sorted() {
    let clock = MockUtcClock::boxed(T0);
    let mut status = ChannelStatus::default();
    status.set_condition_with_clock(Condition::new(CONDITION_SERVICEABLE, ConditionStatus::True), &*clock);
    status.set_condition_with_clock(Condition::new(CONDITION_READY, ConditionStatus::False), &*clock);
    status.set_condition_with_clock(Condition::new(CONDITION_PROVISIONED, ConditionStatus::True), &*clock);

    let types: Vec<_> = status.conditions().iter().map(|c| c.type_.clone()).collect();
    assert_eq!(types, vec!["Provisioned", "Ready", "Serviceable"]);
}

#[rstest]
fn test_set_condition_bumps_transition_time_on_change() {
    let mut clock = MockUtcClock::boxed(T0);
    let mut status = ChannelStatus::default();
    status.set_condition_with_clock(Condition::new(CONDITION_READY, ConditionStatus::False), &*clock);
    let t0 = status.get_condition(CONDITION_READY).unwrap().last_transition_time;
    assert_some!(t0);

    clock.advance(10);
    status.set_condition_with_clock(Condition::new(CONDITION_READY, ConditionStatus::True), &*clock);

    let t1 = status.get_condition(CONDITION_READY).unwrap().last_transition_time;
    assert_eq!(t1.unwrap().timestamp(), T0 + 10);
    assert_ne!(t0, t1);
}

#[rstest]
fn test_set_condition_preserves_transition_time_when_unchanged() {
    let mut clock = MockUtcClock::boxed(T0);
    let mut status = ChannelStatus::default();
    status.set_condition_with_clock(Condition::new(CONDITION_READY, ConditionStatus::True), &*clock);
    let t0 = status.get_condition(CONDITION_READY).unwrap().last_transition_time;

    clock.advance(10);
    let cond = Condition::new(CONDITION_READY, ConditionStatus::True).with_reason("StillFine", "nothing changed");
    status.set_condition_with_clock(cond, &*clock);

    let ready = status.get_condition(CONDITION_READY).unwrap();
    assert_eq!(ready.last_transition_time, t0);
    assert_eq!(ready.reason.as_deref(), Some("StillFine"));
}

#[rstest]
fn test_mark_helpers() {
    let mut status = FlowStatus::default();
    status.mark_true(CONDITION_CHANNEL_READY);
    status.mark_false(CONDITION_SUBSCRIPTION_READY, "NotDispatching", "no dispatcher running");
    status.mark_unknown(CONDITION_FEED_READY, "Polling", "feed state not yet observed");

    assert_eq!(status.get_condition(CONDITION_CHANNEL_READY).unwrap().status, ConditionStatus::True);

    let sub = status.get_condition(CONDITION_SUBSCRIPTION_READY).unwrap();
    assert_eq!(sub.status, ConditionStatus::False);
    assert_eq!(sub.reason.as_deref(), Some("NotDispatching"));

    assert_eq!(status.get_condition(CONDITION_FEED_READY).unwrap().status, ConditionStatus::Unknown);
    assert!(!status.is_ready());
}

#[rstest]
fn test_is_ready_requires_happy_condition() {
    // all the dependents being true isn't enough, the Ready condition itself
    // has to be set
    let mut status = ChannelStatus::default();
    status.mark_true(CONDITION_PROVISIONED);
    status.mark_true(CONDITION_SERVICEABLE);
    assert!(!status.is_ready());

    status.mark_true(CONDITION_READY);
    assert!(status.is_ready());
}
