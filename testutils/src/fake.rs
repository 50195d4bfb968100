use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde_json::json;

pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri_str());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    // Discovery responses for one API group; pinning a kind fetches the
    // group document first and the versioned resource list second.
    pub fn handle_eventing_discovery(&mut self) -> &mut Self {
        self.handle(|when, then| {
            when.method(GET).path("/apis/evmesh.io");
            then.json_body(eventing_group());
        })
        .handle(|when, then| {
            when.method(GET).path("/apis/evmesh.io/v1alpha1");
            then.json_body(eventing_v1alpha1_discovery());
        })
    }

    pub fn handle_serving_discovery(&mut self) -> &mut Self {
        self.handle(|when, then| {
            when.method(GET).path("/apis/serving.evmesh.io");
            then.json_body(serving_group());
        })
        .handle(|when, then| {
            when.method(GET).path("/apis/serving.evmesh.io/v1alpha1");
            then.json_body(serving_v1alpha1_discovery());
        })
    }

    pub fn handle_core_discovery(&mut self) -> &mut Self {
        self.handle(|when, then| {
            when.method(GET).path("/api");
            then.json_body(core_versions());
        })
        .handle(|when, then| {
            when.method(GET).path("/api/v1");
            then.json_body(core_v1_discovery());
        })
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // Print all unmatched/unhandled requests for easier debugging;
        // this has to go last so that the other mock rules have a chance
        // to match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let config = kube::Config::new(builder.url());
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn status_ok() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Success",
      "code": 200
    })
}

pub fn status_not_found() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "reason": "NotFound",
      "code": 404
    })
}

pub fn eventing_group() -> serde_json::Value {
    json!({
        "kind": "APIGroup",
        "apiVersion": "v1",
        "name": "evmesh.io",
        "versions": [{"groupVersion": "evmesh.io/v1alpha1", "version": "v1alpha1"}],
        "preferredVersion": {"groupVersion": "evmesh.io/v1alpha1", "version": "v1alpha1"},
    })
}

pub fn serving_group() -> serde_json::Value {
    json!({
        "kind": "APIGroup",
        "apiVersion": "v1",
        "name": "serving.evmesh.io",
        "versions": [{"groupVersion": "serving.evmesh.io/v1alpha1", "version": "v1alpha1"}],
        "preferredVersion": {"groupVersion": "serving.evmesh.io/v1alpha1", "version": "v1alpha1"},
    })
}

pub fn core_versions() -> serde_json::Value {
    json!({
        "kind": "APIVersions",
        "versions": ["v1"],
        "serverAddressByClientCIDRs": [],
    })
}

pub fn eventing_v1alpha1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "evmesh.io/v1alpha1",
        "resources": [
            {
                "name": "channels",
                "singularName": "channel",
                "namespaced": true,
                "kind": "Channel",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["chan","chans"],
            },
            {
                "name": "subscriptions",
                "singularName": "subscription",
                "namespaced": true,
                "kind": "Subscription",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["sub","subs"],
            },
            {
                "name": "clusterbuses",
                "singularName": "clusterbus",
                "namespaced": false,
                "kind": "ClusterBus",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["cbus"],
            },
            {
                "name": "clusterprovisioners",
                "singularName": "clusterprovisioner",
                "namespaced": false,
                "kind": "ClusterProvisioner",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
            },
            {
                "name": "flows",
                "singularName": "flow",
                "namespaced": true,
                "kind": "Flow",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
            },
            {
                "name": "eventsources",
                "singularName": "eventsource",
                "namespaced": true,
                "kind": "EventSource",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["es"],
            },
            {
                "name": "eventtypes",
                "singularName": "eventtype",
                "namespaced": true,
                "kind": "EventType",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["et"],
            },
        ],
    })
}

pub fn serving_v1alpha1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "serving.evmesh.io/v1alpha1",
        "resources": [
            {
                "name": "routes",
                "singularName": "route",
                "namespaced": true,
                "kind": "Route",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["rt"],
            },
            {
                "name": "configurations",
                "singularName": "configuration",
                "namespaced": true,
                "kind": "Configuration",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["cfg"],
            },
        ],
    })
}

pub fn core_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "v1",
        "resources": [
            {
                "name": "pods",
                "singularName": "pod",
                "namespaced": true,
                "kind": "Pod",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["po"],
                "categories": ["all"],
            },
            {
                "name": "pods/log",
                "singularName": "",
                "namespaced": true,
                "kind": "Pod",
                "verbs": ["get"],
            },
            {
                "name": "serviceaccounts",
                "singularName": "serviceaccount",
                "namespaced": true,
                "kind": "ServiceAccount",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["sa"],
            },
        ],
    })
}
