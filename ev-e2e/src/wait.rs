use std::fmt::Debug;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::{
    Instant,
    sleep,
};

use ev_core::errors::*;
use ev_core::prelude::*;
use tracing::*;

use crate::E2eError;
use crate::clients::Clients;
use crate::logs::pod_logs;

// The readiness predicate shared by all the with_*_ready helpers: an object
// with no status at all is just "not ready yet".
pub fn status_ready<S: StatusConditions>(maybe_status: Option<&S>) -> bool {
    maybe_status.is_some_and(|status| status.is_ready())
}

/// Poll the named object until `pred` returns true.  The object is checked
/// immediately, then once per poll interval; an API error is terminal.
pub async fn wait_for_object_state<K, F>(api: &kube::Api<K>, name: &str, desc: &str, pred: F) -> EmptyResult
where
    K: Clone + Debug + DeserializeOwned,
    F: Fn(&K) -> bool,
{
    wait_for_object_state_with_timing(api, name, desc, POLL_INTERVAL, POLL_TIMEOUT, pred).await
}

pub async fn wait_for_object_state_with_timing<K, F>(
    api: &kube::Api<K>,
    name: &str,
    desc: &str,
    interval: Duration,
    timeout: Duration,
    pred: F,
) -> EmptyResult
where
    K: Clone + Debug + DeserializeOwned,
    F: Fn(&K) -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        let obj = api.get(name).await?;
        if pred(&obj) {
            debug!("{desc}: satisfied");
            return Ok(());
        }
        if Instant::now() + interval > deadline {
            bail!(E2eError::wait_timed_out(desc));
        }
        sleep(interval).await;
    }
}

/// Wait until every pod in the namespace is running (or ran to completion).
/// An empty namespace counts as running.
pub async fn wait_for_pods_running(clients: &Clients, namespace: &str) -> EmptyResult {
    wait_for_pods_running_with_timing(clients, namespace, POLL_INTERVAL, POLL_TIMEOUT).await
}

pub async fn wait_for_pods_running_with_timing(
    clients: &Clients,
    namespace: &str,
    interval: Duration,
    timeout: Duration,
) -> EmptyResult {
    let pods_api = clients.pods_in(namespace);
    let deadline = Instant::now() + timeout;
    loop {
        let pods = pods_api.list(&Default::default()).await?;
        let not_running = pods.items.iter().filter(|pod| !pod.is_running()).count();
        if not_running == 0 {
            debug!("all pods in {namespace} running");
            return Ok(());
        }

        debug!("{not_running}/{} pods in {namespace} not yet running", pods.items.len());
        if Instant::now() + interval > deadline {
            bail!(E2eError::wait_timed_out(&format!("PodsAreRunning in {namespace}")));
        }
        sleep(interval).await;
    }
}

/// Wait until the logs for the given pod/container include `content`.  A
/// log-fetch failure (including "no such pod") is terminal.
pub async fn wait_for_log_content(
    clients: &Clients,
    pod_name: &str,
    container_name: &str,
    content: &str,
) -> EmptyResult {
    wait_for_log_content_with_timing(clients, pod_name, container_name, content, POLL_INTERVAL, POLL_TIMEOUT).await
}

pub async fn wait_for_log_content_with_timing(
    clients: &Clients,
    pod_name: &str,
    container_name: &str,
    content: &str,
    interval: Duration,
    timeout: Duration,
) -> EmptyResult {
    let deadline = Instant::now() + timeout;
    loop {
        let logs = pod_logs(clients, pod_name, container_name).await?;
        if logs.contains(content) {
            return Ok(());
        }
        if Instant::now() + interval > deadline {
            bail!(E2eError::wait_timed_out(&format!("log content {content:?} in {pod_name}/{container_name}")));
        }
        sleep(interval).await;
    }
}
