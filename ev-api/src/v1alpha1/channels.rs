use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::*;

pub const CONDITION_PROVISIONED: &str = "Provisioned";
pub const CONDITION_SERVICEABLE: &str = "Serviceable";
pub const CONDITION_DISPATCHING: &str = "Dispatching";
pub const CONDITION_DISPATCHER_PROVISIONED: &str = "DispatcherProvisioned";

// Free-form name/value pairs passed through to the bus provisioner.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    pub value: String,
}

/// A Channel is a named conduit on a ClusterBus that events can be sent to and
/// subscribed from.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "Channel", namespaced)]
#[kube(shortname = "chan", shortname = "chans")]
#[kube(status = "ChannelStatus")]
#[kube(
    printcolumn = r#"{"name":"bus", "type":"string", "description":"cluster bus backing the channel", "jsonPath":".spec.clusterBus"}"#,
    printcolumn = r#"{"name":"ready", "type":"string", "description":"channel readiness", "jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSpec {
    // Required fields
    pub cluster_bus: String,

    // Optional fields
    pub arguments: Option<Vec<Argument>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    // DNS name the dispatcher answers on inside the cluster
    pub domain_internal: Option<String>,
}

status_conditions! {ChannelStatus, [CONDITION_PROVISIONED, CONDITION_SERVICEABLE]}

/// A Subscription attaches a subscriber endpoint to a Channel, with an
/// optional reply channel for responses.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "Subscription", namespaced)]
#[kube(shortname = "sub", shortname = "subs")]
#[kube(status = "SubscriptionStatus")]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSpec {
    // Required fields
    pub channel: String,
    pub subscriber: String,

    // Optional fields
    pub reply_to: Option<String>,
    pub arguments: Option<Vec<Argument>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {SubscriptionStatus, [CONDITION_DISPATCHING]}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusContainer {
    pub image: String,
    pub args: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusParameter {
    pub name: String,
    pub default: Option<String>,
}

/// A ClusterBus runs the dispatcher (and optionally a provisioner) that backs
/// every Channel referencing it.  Cluster-scoped.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "ClusterBus")]
#[kube(shortname = "cbus")]
#[kube(status = "ClusterBusStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterBusSpec {
    // Required fields
    pub dispatcher: BusContainer,

    // Optional fields
    pub provisioner: Option<BusContainer>,
    pub parameters: Option<Vec<BusParameter>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterBusStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {ClusterBusStatus, [CONDITION_DISPATCHER_PROVISIONED]}
