use ev_api::v1alpha1::{
    API_VERSION,
    EVENTING_GROUP,
};
use ev_core::k8s::GVK;
use lazy_static::lazy_static;

pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_RUN_ID: &str = "test-run";

pub const TEST_CHANNEL: &str = "the-channel";
pub const TEST_SUBSCRIPTION: &str = "the-subscription";
pub const TEST_BUS: &str = "the-bus";
pub const TEST_FLOW: &str = "the-flow";
pub const TEST_EVENT_SOURCE: &str = "the-event-source";
pub const TEST_EVENT_TYPE: &str = "the-event-type";
pub const TEST_ROUTE: &str = "the-route";
pub const TEST_CONFIGURATION: &str = "the-configuration";
pub const TEST_SERVICE_ACCOUNT: &str = "the-service-account";
pub const TEST_POD: &str = "the-pod";
pub const TEST_IMAGE: &str = "docker.foo:1234/helloworld:latest";

lazy_static! {
    pub static ref CHANNEL_GVK: GVK = GVK::new(EVENTING_GROUP, API_VERSION, "Channel");
    pub static ref BUS_GVK: GVK = GVK::new(EVENTING_GROUP, API_VERSION, "ClusterBus");
    pub static ref POD_GVK: GVK = GVK::new("", "v1", "Pod");
}
