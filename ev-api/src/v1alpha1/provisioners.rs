use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::conditions::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileTarget {
    pub group: String,
    pub kind: String,
}

/// A ClusterProvisioner advertises which resource kind it knows how to
/// provision backing infrastructure for.  Cluster-scoped.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "evmesh.io", version = "v1alpha1", kind = "ClusterProvisioner")]
#[kube(status = "ClusterProvisionerStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterProvisionerSpec {
    pub reconciles: ReconcileTarget,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProvisionerStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

status_conditions! {ClusterProvisionerStatus}
