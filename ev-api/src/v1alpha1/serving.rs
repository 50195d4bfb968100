use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::*;

pub const CONDITION_ALL_TRAFFIC_ASSIGNED: &str = "AllTrafficAssigned";
pub const CONDITION_LATEST_REVISION_READY: &str = "LatestRevisionReady";

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTarget {
    pub config_name: Option<String>,
    pub revision_name: Option<String>,
    pub percent: i32,
}

/// A Route splits traffic between the revisions of one or more
/// Configurations; event subscribers are addressed by route.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "serving.evmesh.io", version = "v1alpha1", kind = "Route", namespaced)]
#[kube(shortname = "rt")]
#[kube(status = "RouteStatus")]
#[kube(
    printcolumn = r#"{"name":"domain", "type":"string", "description":"external domain for the route", "jsonPath":".status.domain"}"#,
    printcolumn = r#"{"name":"ready", "type":"string", "description":"route readiness", "jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    pub traffic: Vec<TrafficTarget>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    pub domain: Option<String>,
}

status_conditions! {RouteStatus, [CONDITION_ALL_TRAFFIC_ASSIGNED]}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionTemplate {
    pub image: String,
}

/// A Configuration stamps out revisions running the given container image.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "serving.evmesh.io", version = "v1alpha1", kind = "Configuration", namespaced)]
#[kube(shortname = "cfg")]
#[kube(status = "ConfigurationStatus")]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSpec {
    pub revision_template: RevisionTemplate,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    pub latest_ready_revision_name: Option<String>,
}

status_conditions! {ConfigurationStatus, [CONDITION_LATEST_REVISION_READY]}
