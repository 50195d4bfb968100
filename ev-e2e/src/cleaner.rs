use kube::api::Resource;

use ev_core::errors::*;
use ev_core::k8s::{
    ApiSet,
    GVK,
    split_namespaced_name,
};
use ev_core::prelude::*;
use tracing::*;

// The Cleaner remembers every object a test creates and deletes them all at
// teardown, most-recently-created first (dependents before the things they
// point at).  Objects are tracked as (GVK, ns/name) pairs so one sweep can
// cover typed CRDs and core objects alike.
pub struct Cleaner {
    apiset: ApiSet,
    pub(crate) objs: Vec<(GVK, String)>,
}

impl Cleaner {
    pub fn new(client: kube::Client) -> Cleaner {
        Cleaner { apiset: ApiSet::new(client), objs: vec![] }
    }

    pub fn add<K>(&mut self, obj: &K)
    where
        K: Resource<DynamicType = ()>,
    {
        let gvk = GVK::new(&K::group(&()), &K::version(&()), &K::kind(&()));
        self.objs.push((gvk, obj.namespaced_name()));
    }

    // A failed delete is logged and skipped; one wedged object shouldn't
    // leave everything after it in the cluster.
    pub async fn clean(&mut self) {
        while let Some((gvk, ns_name)) = self.objs.pop() {
            info!("deleting {gvk} {ns_name}");
            if let Err(err) = self.delete_obj(&gvk, &ns_name).await {
                everr!(err, "could not delete {} {}; continuing cleanup", gvk, ns_name);
            }
        }
    }

    async fn delete_obj(&mut self, gvk: &GVK, ns_name: &str) -> EmptyResult {
        let (ns, name) = split_namespaced_name(ns_name);
        let api = if ns.is_empty() {
            let (api, _) = self.apiset.api_for(gvk).await?;
            api
        } else {
            self.apiset.namespaced_api_for(gvk, ns).await?
        };
        api.delete(&name, &Default::default()).await?;
        Ok(())
    }
}
