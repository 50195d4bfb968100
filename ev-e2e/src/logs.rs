use kube::api::LogParams;

use ev_core::prelude::*;

use crate::E2eError;
use crate::clients::Clients;

/// Fetch container logs from the first pod in the test namespace whose name
/// contains `pod_name` (test pods get hashed suffixes, so this is a
/// substring match by design of the callers).
pub async fn pod_logs(clients: &Clients, pod_name: &str, container_name: &str) -> anyhow::Result<String> {
    let pods_api = clients.pods();
    let pod_list = pods_api.list(&Default::default()).await?;
    for pod in pod_list.items {
        if pod.name_any().contains(pod_name) {
            let params = LogParams {
                container: Some(container_name.into()),
                ..Default::default()
            };
            return Ok(pods_api.logs(&pod.name_any(), &params).await?);
        }
    }
    Err(E2eError::logs_not_found(&format!("{pod_name}/{container_name}")))
}
