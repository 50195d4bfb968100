use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};

use ev_core::prelude::*;

use crate::config::TestConfig;

// One bundle holding the kube client plus typed Api handles for everything
// the e2e tests touch; namespaced resources default to the test namespace.
#[derive(Clone)]
pub struct Clients {
    client: kube::Client,
    pub namespace: String,
    pub run_id: String,
}

impl Clients {
    pub async fn new(config: &TestConfig) -> anyhow::Result<Clients> {
        let client = match &config.kubeconfig {
            Some(path) => {
                let kubeconfig = Kubeconfig::read_from(path)?;
                let options = KubeConfigOptions {
                    context: config.context.clone(),
                    ..Default::default()
                };
                let kube_config = kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?;
                kube::Client::try_from(kube_config)?
            },
            None => kube::Client::try_default().await?,
        };

        Ok(Clients {
            client,
            namespace: config.namespace.clone(),
            run_id: config.run_id.clone(),
        })
    }

    pub fn with_client(client: kube::Client, namespace: &str, run_id: &str) -> Clients {
        Clients {
            client,
            namespace: namespace.into(),
            run_id: run_id.into(),
        }
    }

    pub fn client(&self) -> kube::Client {
        self.client.clone()
    }

    pub fn channels(&self) -> kube::Api<Channel> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn subscriptions(&self) -> kube::Api<Subscription> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn cluster_buses(&self) -> kube::Api<ClusterBus> {
        kube::Api::all(self.client.clone())
    }

    pub fn cluster_provisioners(&self) -> kube::Api<ClusterProvisioner> {
        kube::Api::all(self.client.clone())
    }

    pub fn flows(&self) -> kube::Api<Flow> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn event_sources(&self) -> kube::Api<EventSource> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn event_types(&self) -> kube::Api<EventType> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn routes(&self) -> kube::Api<Route> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn configurations(&self) -> kube::Api<Configuration> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn service_accounts(&self) -> kube::Api<corev1::ServiceAccount> {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    pub fn cluster_role_bindings(&self) -> kube::Api<rbacv1::ClusterRoleBinding> {
        kube::Api::all(self.client.clone())
    }

    pub fn pods(&self) -> kube::Api<corev1::Pod> {
        self.pods_in(&self.namespace)
    }

    pub fn pods_in(&self, namespace: &str) -> kube::Api<corev1::Pod> {
        kube::Api::namespaced(self.client.clone(), namespace)
    }
}
