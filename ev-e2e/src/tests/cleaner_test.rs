// can't import prelude because that doesn't include "DELETE" for some reason
use httpmock::Method::*;

use super::*;

#[rstest]
#[tokio::test]
async fn test_add_records_creation_order(test_channel: Channel, test_pod: corev1::Pod) {
    let (_, client) = make_fake_apiserver();
    let mut cleaner = Cleaner::new(client);

    cleaner.add(&test_channel);
    cleaner.add(&test_pod);

    // clean() pops from the back, so creation order here means reverse
    // deletion order later
    assert_eq!(cleaner.objs, vec![
        (CHANNEL_GVK.clone(), format!("{TEST_NAMESPACE}/{TEST_CHANNEL}")),
        (POD_GVK.clone(), format!("{TEST_NAMESPACE}/{TEST_POD}")),
    ]);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_clean(test_channel: Channel, test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut cleaner = Cleaner::new(client);
    cleaner.add(&test_channel);
    cleaner.add(&test_pod);

    fake_apiserver
        .handle_eventing_discovery()
        .handle_core_discovery()
        .handle(|when, then| {
            when.method(DELETE)
                .path(format!("/apis/evmesh.io/v1alpha1/namespaces/{TEST_NAMESPACE}/channels/{TEST_CHANNEL}"));
            then.json_body(status_ok());
        })
        .handle(|when, then| {
            when.method(DELETE).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}"));
            then.json_body(status_ok());
        })
        .build();

    cleaner.clean().await;

    fake_apiserver.assert();
    assert!(cleaner.objs.is_empty());
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_clean_cluster_scoped(test_cluster_bus: ClusterBus) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut cleaner = Cleaner::new(client);
    cleaner.add(&test_cluster_bus);

    fake_apiserver
        .handle_eventing_discovery()
        .handle(|when, then| {
            when.method(DELETE).path(format!("/apis/evmesh.io/v1alpha1/clusterbuses/{TEST_BUS}"));
            then.json_body(status_ok());
        })
        .build();

    cleaner.clean().await;

    fake_apiserver.assert();
    assert!(cleaner.objs.is_empty());
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_clean_continues_after_failed_delete(test_channel: Channel, test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut cleaner = Cleaner::new(client);
    cleaner.add(&test_channel);
    cleaner.add(&test_pod);

    // the pod was added last, so its (failing) delete goes first
    fake_apiserver
        .handle_eventing_discovery()
        .handle_core_discovery()
        .handle(|when, then| {
            when.method(DELETE).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}"));
            then.status(500);
        })
        .handle(|when, then| {
            when.method(DELETE)
                .path(format!("/apis/evmesh.io/v1alpha1/namespaces/{TEST_NAMESPACE}/channels/{TEST_CHANNEL}"));
            then.json_body(status_ok());
        })
        .build();

    cleaner.clean().await;

    fake_apiserver.assert();
    assert!(cleaner.objs.is_empty());
    assert!(logs_contain("could not delete"));
}
