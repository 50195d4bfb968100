use std::env;
use std::path::PathBuf;
use std::time::Duration;

use ev_core::prelude::*;

// The harness is configured entirely through the environment, so the same
// test binary can run against a local kind cluster or CI without recompiling.
#[derive(Clone, Debug)]
pub struct TestConfig {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub namespace: String,
    pub docker_repo: String,
    pub tag: String,
    pub run_id: String,
    pub poll_interval: Duration,
    pub poll_timeout: Duration,
}

impl Default for TestConfig {
    fn default() -> TestConfig {
        TestConfig {
            kubeconfig: None,
            context: None,
            namespace: DEFAULT_TEST_NAMESPACE.into(),
            docker_repo: DEFAULT_DOCKER_REPO.into(),
            tag: DEFAULT_IMAGE_TAG.into(),
            run_id: format!("evmesh-e2e-{}", std::process::id()),
            poll_interval: POLL_INTERVAL,
            poll_timeout: POLL_TIMEOUT,
        }
    }
}

impl TestConfig {
    pub fn from_env() -> anyhow::Result<TestConfig> {
        TestConfig::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<TestConfig> {
        let mut config = TestConfig::default();

        if let Some(path) = lookup(KUBECONFIG_ENV_VAR) {
            config.kubeconfig = Some(path.into());
        }
        if let Some(context) = lookup(CONTEXT_ENV_VAR) {
            config.context = Some(context);
        }
        if let Some(namespace) = lookup(NAMESPACE_ENV_VAR) {
            config.namespace = namespace;
        }
        if let Some(repo) = lookup(DOCKER_REPO_ENV_VAR) {
            config.docker_repo = repo;
        }
        if let Some(tag) = lookup(TAG_ENV_VAR) {
            config.tag = tag;
        }
        if let Some(run_id) = lookup(RUN_ID_ENV_VAR) {
            config.run_id = run_id;
        }
        if let Some(interval) = lookup(POLL_INTERVAL_ENV_VAR) {
            config.poll_interval = humantime::parse_duration(&interval)?;
        }
        if let Some(timeout) = lookup(POLL_TIMEOUT_ENV_VAR) {
            config.poll_timeout = humantime::parse_duration(&timeout)?;
        }

        Ok(config)
    }

    // Prefix an image name with the configured repo and suffix it with the tag
    pub fn image_path(&self, name: &str) -> String {
        format!("{}/{}:{}", self.docker_repo, name, self.tag)
    }
}
