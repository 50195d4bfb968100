use httpmock::Method::*;
use kube::error::ErrorResponse;
use serde_json::json;

use super::*;

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_object_state_ready(test_route: Route) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let mut ready = test_route;
    ready.status = Some(RouteStatus { conditions: ready_conditions(), domain: None });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET)
                .path(format!("/apis/serving.evmesh.io/v1alpha1/namespaces/{TEST_NAMESPACE}/routes/{TEST_ROUTE}"));
            then.json_body_obj(&ready);
        })
        .build();

    wait_for_object_state(&clients.routes(), TEST_ROUTE, "RouteIsReady", |route: &Route| {
        status_ready(route.status.as_ref())
    })
    .await
    .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_object_state_timeout(test_route: Route) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let mut unready = test_route;
    unready.status = Some(RouteStatus { conditions: unready_conditions(), domain: None });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET)
                .path(format!("/apis/serving.evmesh.io/v1alpha1/namespaces/{TEST_NAMESPACE}/routes/{TEST_ROUTE}"));
            then.json_body_obj(&unready);
        })
        .build();

    let res = wait_for_object_state_with_timing(
        &clients.routes(),
        TEST_ROUTE,
        "RouteIsReady",
        TEST_POLL_INTERVAL,
        TEST_POLL_TIMEOUT,
        |route: &Route| status_ready(route.status.as_ref()),
    )
    .await
    .unwrap_err()
    .downcast::<E2eError>()
    .unwrap();
    assert!(matches!(res, E2eError::WaitTimedOut(..)));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_object_state_get_error() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    fake_apiserver
        .handle_not_found(format!(
            "/apis/serving.evmesh.io/v1alpha1/namespaces/{TEST_NAMESPACE}/routes/{TEST_ROUTE}"
        ))
        .build();

    let err = wait_for_object_state(&clients.routes(), TEST_ROUTE, "RouteIsReady", |route: &Route| {
        status_ready(route.status.as_ref())
    })
    .await
    .unwrap_err()
    .downcast::<kube::Error>()
    .unwrap();
    fake_apiserver.assert();
    assert!(matches!(err, kube::Error::Api(ErrorResponse { code: 404, .. })));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_pods_running() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let running = test_pod(TEST_POD.into());
    let succeeded = {
        let mut pod = test_pod(format!("{TEST_POD}-done"));
        pod.status.as_mut().unwrap().phase = Some("Succeeded".into());
        pod
    };
    let pod_list = json!({
        "kind": "PodList",
        "apiVersion": "v1",
        "metadata": {},
        "items": [running, succeeded],
    });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"));
            then.json_body(pod_list.clone());
        })
        .build();

    wait_for_pods_running(&clients, TEST_NAMESPACE).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_pods_running_timeout(test_pod: corev1::Pod, test_pending_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let pod_list = json!({
        "kind": "PodList",
        "apiVersion": "v1",
        "metadata": {},
        "items": [test_pod, test_pending_pod],
    });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"));
            then.json_body(pod_list.clone());
        })
        .build();

    let res = wait_for_pods_running_with_timing(&clients, TEST_NAMESPACE, TEST_POLL_INTERVAL, TEST_POLL_TIMEOUT)
        .await
        .unwrap_err()
        .downcast::<E2eError>()
        .unwrap();
    assert!(matches!(res, E2eError::WaitTimedOut(..)));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_log_content(test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let pod_list = json!({
        "kind": "PodList",
        "apiVersion": "v1",
        "metadata": {},
        "items": [test_pod],
    });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"));
            then.json_body(pod_list.clone());
        })
        .handle(|when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}/log"));
            then.body("starting up\nready to serve\n");
        })
        .build();

    wait_for_log_content(&clients, TEST_POD, "user-container", "ready to serve")
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_log_content_timeout(test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let clients = test_clients(client);

    let pod_list = json!({
        "kind": "PodList",
        "apiVersion": "v1",
        "metadata": {},
        "items": [test_pod],
    });
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"));
            then.json_body(pod_list.clone());
        })
        .handle(|when, then| {
            when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}/log"));
            then.body("starting up\n");
        })
        .build();

    let res =
        wait_for_log_content_with_timing(&clients, TEST_POD, "user-container", "oops", TEST_POLL_INTERVAL, TEST_POLL_TIMEOUT)
            .await
            .unwrap_err()
            .downcast::<E2eError>()
            .unwrap();
    assert!(matches!(res, E2eError::WaitTimedOut(..)));
}
