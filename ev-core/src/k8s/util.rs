use std::collections::BTreeMap;

use kube::api::Resource;

use super::*;
use crate::prelude::*;

// Everything the e2e harness creates gets tagged with the run id so that
// leftovers from a crashed run can be found (and deleted) by label.
pub fn add_common_metadata(run_id: &str, meta: &mut metav1::ObjectMeta) {
    let labels = &mut meta.labels.get_or_insert(BTreeMap::new());
    labels.insert(TEST_RUN_LABEL_KEY.into(), run_id.into());
    labels.insert(APP_KUBERNETES_IO_NAME_KEY.into(), meta.name.clone().unwrap());
}

pub fn build_global_object_meta(name: &str, run_id: &str) -> metav1::ObjectMeta {
    build_object_meta_helper(None, name, run_id)
}

pub fn build_object_meta(namespace: &str, name: &str, run_id: &str) -> metav1::ObjectMeta {
    build_object_meta_helper(Some(namespace.into()), name, run_id)
}

pub fn split_namespaced_name(name: &str) -> (String, String) {
    match name.split_once('/') {
        Some((namespace, name)) => (namespace.into(), name.into()),
        None => ("".into(), name.into()),
    }
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any().clone(),
        }
    }
}

fn build_object_meta_helper(namespace: Option<String>, name: &str, run_id: &str) -> metav1::ObjectMeta {
    let mut meta = metav1::ObjectMeta {
        namespace,
        name: Some(name.into()),
        ..Default::default()
    };

    add_common_metadata(run_id, &mut meta);
    meta
}
