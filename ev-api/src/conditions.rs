use clockabilly::{
    Clockable,
    DateTime,
    Utc,
    UtcClock,
};
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

// Every resource in the mesh rolls its state up into a single "happy" condition;
// the per-resource dependent conditions feed into it but readiness is always
// judged off the Ready condition alone.
pub const CONDITION_READY: &str = "Ready";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: ConditionStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

impl Condition {
    pub fn new(type_: &str, status: ConditionStatus) -> Condition {
        Condition { type_: type_.into(), status, ..Default::default() }
    }

    pub fn with_reason(mut self, reason: &str, message: &str) -> Condition {
        self.reason = Some(reason.into());
        self.message = Some(message.into());
        self
    }
}

// Status structs get the aggregation logic for free by implementing the two
// accessors (via the status_conditions! macro below); the provided methods are
// the interesting part.
pub trait StatusConditions {
    fn conditions(&self) -> &Vec<Condition>;
    fn conditions_mut(&mut self) -> &mut Vec<Condition>;
    fn dependent_types(&self) -> &'static [&'static str];

    fn get_condition(&self, type_: &str) -> Option<&Condition> {
        self.conditions().iter().find(|cond| cond.type_ == type_)
    }

    fn is_ready(&self) -> bool {
        self.get_condition(CONDITION_READY)
            .is_some_and(|cond| cond.status == ConditionStatus::True)
    }

    fn init_conditions(&mut self) {
        self.init_conditions_with_clock(&UtcClock)
    }

    fn init_conditions_with_clock(&mut self, clock: &dyn Clockable) {
        for type_ in self.dependent_types().iter().copied().chain([CONDITION_READY]) {
            if self.get_condition(type_).is_none() {
                self.set_condition_with_clock(Condition::new(type_, ConditionStatus::Unknown), clock);
            }
        }
    }

    fn set_condition(&mut self, cond: Condition) {
        self.set_condition_with_clock(cond, &UtcClock)
    }

    // The transition time only moves when the status actually changes; writing
    // the same status again (e.g., on every reconcile pass) must not touch it.
    fn set_condition_with_clock(&mut self, mut cond: Condition, clock: &dyn Clockable) {
        let conditions = self.conditions_mut();
        match conditions.iter().position(|c| c.type_ == cond.type_) {
            Some(i) if conditions[i].status == cond.status => {
                cond.last_transition_time = conditions[i].last_transition_time;
                conditions[i] = cond;
            },
            Some(i) => {
                cond.last_transition_time = Some(clock.now());
                conditions[i] = cond;
            },
            None => {
                cond.last_transition_time = Some(clock.now());
                conditions.push(cond);
                conditions.sort_by(|a, b| a.type_.cmp(&b.type_));
            },
        }
    }

    fn mark_true(&mut self, type_: &str) {
        self.set_condition(Condition::new(type_, ConditionStatus::True));
    }

    fn mark_false(&mut self, type_: &str, reason: &str, message: &str) {
        self.set_condition(Condition::new(type_, ConditionStatus::False).with_reason(reason, message));
    }

    fn mark_unknown(&mut self, type_: &str, reason: &str, message: &str) {
        self.set_condition(Condition::new(type_, ConditionStatus::Unknown).with_reason(reason, message));
    }
}

// This macro wires a status struct up to the StatusConditions trait; the
// second argument lists the dependent condition types for that resource.
#[macro_export]
macro_rules! status_conditions {
    ($type:ty) => {
        status_conditions! {$type, []}
    };

    ($type:ty, [$($dep:expr),*$(,)?]) => {
        impl $crate::conditions::StatusConditions for $type {
            fn conditions(&self) -> &Vec<$crate::conditions::Condition> {
                &self.conditions
            }

            fn conditions_mut(&mut self) -> &mut Vec<$crate::conditions::Condition> {
                &mut self.conditions
            }

            fn dependent_types(&self) -> &'static [&'static str] {
                &[$($dep),*]
            }
        }
    };
}

pub use status_conditions;
