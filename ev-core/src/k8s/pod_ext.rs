use super::*;
use crate::prelude::*;

pub const POD_PHASE_RUNNING: &str = "Running";
pub const POD_PHASE_SUCCEEDED: &str = "Succeeded";

const POD_CONDITION_READY: &str = "Ready";
const POD_CONDITION_TRUE: &str = "True";

// "Running" here means the pod has reached a terminal-or-steady phase; a pod
// that ran to completion counts, since the e2e tests often watch one-shot
// sender pods.
impl PodExt for corev1::Pod {
    fn status(&self) -> anyhow::Result<&corev1::PodStatus> {
        match self.status.as_ref() {
            None => bail!(KubernetesError::field_not_found("pod status")),
            Some(ps) => Ok(ps),
        }
    }

    fn is_running(&self) -> bool {
        self.status()
            .is_ok_and(|ps| matches!(ps.phase.as_deref(), Some(POD_PHASE_RUNNING | POD_PHASE_SUCCEEDED)))
    }

    fn is_ready(&self) -> bool {
        self.status().is_ok_and(|ps| {
            ps.conditions.as_ref().is_some_and(|conds| {
                conds
                    .iter()
                    .any(|cond| cond.type_ == POD_CONDITION_READY && cond.status == POD_CONDITION_TRUE)
            })
        })
    }
}
