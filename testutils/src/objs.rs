use ev_api::conditions::*;
use ev_core::macros::*;
use ev_core::prelude::*;
use rstest::*;

use crate::constants::*;

pub fn ready_conditions() -> Vec<Condition> {
    vec![Condition::new(CONDITION_READY, ConditionStatus::True)]
}

pub fn unready_conditions() -> Vec<Condition> {
    vec![Condition::new(CONDITION_READY, ConditionStatus::False)]
}

#[fixture]
pub fn test_channel(#[default(TEST_CHANNEL)] name: &str) -> Channel {
    Channel {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: ChannelSpec {
            cluster_bus: TEST_BUS.into(),
            arguments: None,
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_subscription(#[default(TEST_SUBSCRIPTION)] name: &str) -> Subscription {
    Subscription {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: SubscriptionSpec {
            channel: TEST_CHANNEL.into(),
            subscriber: TEST_ROUTE.into(),
            ..Default::default()
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_cluster_bus(#[default(TEST_BUS)] name: &str) -> ClusterBus {
    ClusterBus {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            ..Default::default()
        },
        spec: ClusterBusSpec {
            dispatcher: BusContainer {
                image: "docker.foo:1234/bus-dispatcher:latest".into(),
                args: Some(vec!["--stub".into()]),
            },
            ..Default::default()
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_flow(#[default(TEST_FLOW)] name: &str) -> Flow {
    Flow {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: FlowSpec {
            trigger: EventTrigger {
                event_type: "dev.evmesh.object.create".into(),
                resource: "objects/foo".into(),
                service: TEST_EVENT_SOURCE.into(),
                parameters: None,
            },
            action: FlowAction {
                target: Some(FlowTarget { kind: "Route".into(), name: TEST_ROUTE.into() }),
            },
            service_account: None,
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_event_source(#[default(TEST_EVENT_SOURCE)] name: &str) -> EventSource {
    EventSource {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: EventSourceSpec {
            source: "github".into(),
            image: "docker.foo:1234/github-source:latest".into(),
            parameters: None,
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_event_type(#[default(TEST_EVENT_TYPE)] name: &str) -> EventType {
    EventType {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: EventTypeSpec {
            event_source: TEST_EVENT_SOURCE.into(),
            description: Some("pull request opened".into()),
            schema_url: None,
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_route(#[default(TEST_ROUTE)] name: &str) -> Route {
    Route {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: RouteSpec {
            traffic: vec![TrafficTarget {
                config_name: Some(TEST_CONFIGURATION.into()),
                revision_name: None,
                percent: 100,
            }],
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_configuration(#[default(TEST_CONFIGURATION)] name: &str) -> Configuration {
    Configuration {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        spec: ConfigurationSpec {
            revision_template: RevisionTemplate { image: TEST_IMAGE.into() },
        },
        status: Default::default(),
    }
}

#[fixture]
pub fn test_service_account(#[default(TEST_SERVICE_ACCOUNT)] name: &str) -> corev1::ServiceAccount {
    corev1::ServiceAccount {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[fixture]
pub fn test_pod(#[default(TEST_POD.into())] name: String) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name),
            labels: klabel!("foo" => "bar"),
            ..Default::default()
        },
        spec: Some(corev1::PodSpec { ..Default::default() }),
        status: Some(corev1::PodStatus {
            phase: Some("Running".into()),
            conditions: Some(vec![corev1::PodCondition {
                type_: "Ready".into(),
                status: "True".into(),
                ..Default::default()
            }]),
            ..Default::default()
        }),
    }
}

#[fixture]
pub fn test_pending_pod(#[default("the-pending-pod".into())] name: String) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name),
            ..Default::default()
        },
        spec: Some(corev1::PodSpec { ..Default::default() }),
        status: Some(corev1::PodStatus {
            phase: Some("Pending".into()),
            ..Default::default()
        }),
    }
}
