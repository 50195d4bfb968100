mod apiset;
mod gvk;
mod pod_ext;
mod util;

pub use apiset::*;
pub use gvk::*;
pub use util::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {KubernetesError,
    #[error("field not found in struct: {0}")]
    FieldNotFound(String),
}

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
}

pub trait PodExt {
    fn status(&self) -> anyhow::Result<&corev1::PodStatus>;
    fn is_running(&self) -> bool;
    fn is_ready(&self) -> bool;
}

#[cfg(test)]
pub mod tests;
