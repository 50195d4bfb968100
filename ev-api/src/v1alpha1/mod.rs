mod channels;
mod feeds;
mod flows;
mod provisioners;
mod serving;

pub use channels::*;
pub use feeds::*;
pub use flows::*;
pub use provisioners::*;
pub use serving::*;

pub const EVENTING_GROUP: &str = "evmesh.io";
pub const SERVING_GROUP: &str = "serving.evmesh.io";
pub const API_VERSION: &str = "v1alpha1";
