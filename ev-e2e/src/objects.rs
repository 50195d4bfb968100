use ev_core::k8s::{
    build_global_object_meta,
    build_object_meta,
};
use ev_core::prelude::*;

pub fn build_route(name: &str, namespace: &str, config_name: &str, run_id: &str) -> Route {
    Route {
        metadata: build_object_meta(namespace, name, run_id),
        spec: RouteSpec {
            traffic: vec![TrafficTarget {
                config_name: Some(config_name.into()),
                revision_name: None,
                percent: 100,
            }],
        },
        status: Default::default(),
    }
}

pub fn build_configuration(name: &str, namespace: &str, image_path: &str, run_id: &str) -> Configuration {
    Configuration {
        metadata: build_object_meta(namespace, name, run_id),
        spec: ConfigurationSpec {
            revision_template: RevisionTemplate { image: image_path.into() },
        },
        status: Default::default(),
    }
}

pub fn build_service_account(name: &str, namespace: &str, run_id: &str) -> corev1::ServiceAccount {
    corev1::ServiceAccount {
        metadata: build_object_meta(namespace, name, run_id),
        ..Default::default()
    }
}

// Binds cluster-admin; the e2e feeds install arbitrary objects
pub fn build_cluster_admin_binding(
    name: &str,
    sa_name: &str,
    sa_namespace: &str,
    run_id: &str,
) -> rbacv1::ClusterRoleBinding {
    rbacv1::ClusterRoleBinding {
        metadata: build_global_object_meta(name, run_id),
        subjects: Some(vec![rbacv1::Subject {
            kind: SVC_ACCOUNT_KIND.into(),
            name: sa_name.into(),
            namespace: Some(sa_namespace.into()),
            ..Default::default()
        }]),
        role_ref: rbacv1::RoleRef {
            kind: CLUSTER_ROLE_KIND.into(),
            name: CLUSTER_ADMIN_ROLE.into(),
            api_group: RBAC_API_GROUP.into(),
        },
    }
}
