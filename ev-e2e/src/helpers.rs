use ev_core::prelude::*;

use crate::cleaner::Cleaner;
use crate::clients::Clients;
use crate::objects::*;
use crate::wait::{
    status_ready,
    wait_for_object_state,
};

/// Create a Channel and register it for cleanup.
pub async fn create_channel(clients: &Clients, cleaner: &mut Cleaner, channel: &Channel) -> EmptyResult {
    let res = clients.channels().create(&Default::default(), channel).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a Subscription and register it for cleanup.
pub async fn create_subscription(clients: &Clients, cleaner: &mut Cleaner, subscription: &Subscription) -> EmptyResult {
    let res = clients.subscriptions().create(&Default::default(), subscription).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a ClusterBus and register it for cleanup.
pub async fn create_cluster_bus(clients: &Clients, cleaner: &mut Cleaner, bus: &ClusterBus) -> EmptyResult {
    let res = clients.cluster_buses().create(&Default::default(), bus).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a Flow and register it for cleanup.
pub async fn create_flow(clients: &Clients, cleaner: &mut Cleaner, flow: &Flow) -> EmptyResult {
    let res = clients.flows().create(&Default::default(), flow).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a Flow and wait until its status rolls up ready.
pub async fn with_flow_ready(clients: &Clients, cleaner: &mut Cleaner, flow: &Flow) -> EmptyResult {
    create_flow(clients, cleaner, flow).await?;
    wait_for_object_state(&clients.flows(), &flow.name_any(), "FlowIsReady", |flow: &Flow| {
        status_ready(flow.status.as_ref())
    })
    .await
}

/// Create an EventSource and register it for cleanup.
pub async fn create_event_source(clients: &Clients, cleaner: &mut Cleaner, source: &EventSource) -> EmptyResult {
    let res = clients.event_sources().create(&Default::default(), source).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create an EventType and register it for cleanup.
pub async fn create_event_type(clients: &Clients, cleaner: &mut Cleaner, event_type: &EventType) -> EmptyResult {
    let res = clients.event_types().create(&Default::default(), event_type).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create the Configuration serving requests from the image at image_path,
/// plus a Route sending all traffic to it; both are registered for cleanup.
pub async fn create_route_and_config(
    clients: &Clients,
    cleaner: &mut Cleaner,
    name: &str,
    image_path: &str,
) -> EmptyResult {
    let config = build_configuration(name, &clients.namespace, image_path, &clients.run_id);
    let res = clients.configurations().create(&Default::default(), &config).await?;
    cleaner.add(&res);

    let route = build_route(name, &clients.namespace, name, &clients.run_id);
    let res = clients.routes().create(&Default::default(), &route).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create Route and Configuration objects and wait until the Route is ready.
pub async fn with_route_ready(clients: &Clients, cleaner: &mut Cleaner, name: &str, image_path: &str) -> EmptyResult {
    create_route_and_config(clients, cleaner, name, image_path).await?;
    wait_for_object_state(&clients.routes(), name, "RouteIsReady", |route: &Route| {
        status_ready(route.status.as_ref())
    })
    .await
}

/// Create a ServiceAccount and register it for cleanup.
pub async fn create_service_account(
    clients: &Clients,
    cleaner: &mut Cleaner,
    sa: &corev1::ServiceAccount,
) -> EmptyResult {
    let res = clients.service_accounts().create(&Default::default(), sa).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a ClusterRoleBinding and register it for cleanup.
pub async fn create_cluster_role_binding(
    clients: &Clients,
    cleaner: &mut Cleaner,
    crb: &rbacv1::ClusterRoleBinding,
) -> EmptyResult {
    let res = clients.cluster_role_bindings().create(&Default::default(), crb).await?;
    cleaner.add(&res);
    Ok(())
}

/// Create a ServiceAccount plus a ClusterRoleBinding giving it the
/// cluster-admin role.
pub async fn create_service_account_and_binding(clients: &Clients, cleaner: &mut Cleaner, name: &str) -> EmptyResult {
    let sa = build_service_account(name, &clients.namespace, &clients.run_id);
    create_service_account(clients, cleaner, &sa).await?;

    let crb = build_cluster_admin_binding(
        &format!("evmesh-e2e-{name}-admin"),
        name,
        &clients.namespace,
        &clients.run_id,
    );
    create_cluster_role_binding(clients, cleaner, &crb).await?;
    Ok(())
}

/// Create a Pod (in its own namespace if set, the test namespace otherwise)
/// and register it for cleanup.
pub async fn create_pod(clients: &Clients, cleaner: &mut Cleaner, pod: &corev1::Pod) -> EmptyResult {
    let namespace = pod.namespace().unwrap_or_else(|| clients.namespace.clone());
    let res = clients.pods_in(&namespace).create(&Default::default(), pod).await?;
    cleaner.add(&res);
    Ok(())
}
