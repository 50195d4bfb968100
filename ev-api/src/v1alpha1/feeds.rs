use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::*;

/// An EventSource names an external system (and the container that watches
/// it) that events can be received from.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "EventSource", namespaced)]
#[kube(shortname = "es")]
#[kube(status = "EventSourceStatus")]
#[serde(rename_all = "camelCase")]
pub struct EventSourceSpec {
    // Required fields
    pub source: String,
    pub image: String,

    // Optional fields
    pub parameters: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSourceStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {EventSourceStatus}

/// An EventType is one kind of event an EventSource can emit.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "EventType", namespaced)]
#[kube(shortname = "et")]
#[kube(status = "EventTypeStatus")]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    // Required fields
    pub event_source: String,

    // Optional fields
    pub description: Option<String>,
    pub schema_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {EventTypeStatus}
