use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::*;

pub const CONDITION_CHANNEL_READY: &str = "ChannelReady";
pub const CONDITION_SUBSCRIPTION_READY: &str = "SubscriptionReady";
pub const CONDITION_FEED_READY: &str = "FeedReady";

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTrigger {
    pub event_type: String,
    pub resource: String,
    pub service: String,
    pub parameters: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTarget {
    pub kind: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAction {
    pub target: Option<FlowTarget>,
}

/// A Flow wires an event trigger through a (mesh-managed) channel and
/// subscription to a target; it's the one-stop version of setting the three
/// pieces up by hand.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "Flow", namespaced)]
#[kube(status = "FlowStatus")]
#[kube(
    printcolumn = r#"{"name":"ready", "type":"string", "description":"flow readiness", "jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct FlowSpec {
    // Required fields
    pub trigger: EventTrigger,
    pub action: FlowAction,

    // Optional fields
    pub service_account: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {FlowStatus, [CONDITION_CHANNEL_READY, CONDITION_SUBSCRIPTION_READY, CONDITION_FEED_READY]}
