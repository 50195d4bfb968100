use std::collections::HashMap;

use assertables::*;

use super::*;

fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[rstest]
fn test_config_defaults() {
    let config = TestConfig::from_env_with(|_| None).unwrap();

    assert_none!(config.kubeconfig);
    assert_none!(config.context);
    assert_eq!(config.namespace, DEFAULT_TEST_NAMESPACE);
    assert_eq!(config.docker_repo, DEFAULT_DOCKER_REPO);
    assert_eq!(config.tag, DEFAULT_IMAGE_TAG);
    assert_eq!(config.poll_interval, POLL_INTERVAL);
    assert_eq!(config.poll_timeout, POLL_TIMEOUT);
    assert_starts_with!(config.run_id, "evmesh-e2e-");
}

#[rstest]
fn test_config_from_env() {
    let vars = env(&[
        (KUBECONFIG_ENV_VAR, "/tmp/kubeconfig"),
        (CONTEXT_ENV_VAR, "kind-e2e"),
        (NAMESPACE_ENV_VAR, "alternate-ns"),
        (DOCKER_REPO_ENV_VAR, "docker.foo:1234/evmesh"),
        (TAG_ENV_VAR, "v0.1.0"),
        (RUN_ID_ENV_VAR, TEST_RUN_ID),
        (POLL_INTERVAL_ENV_VAR, "250ms"),
        (POLL_TIMEOUT_ENV_VAR, "2m"),
    ]);
    let config = TestConfig::from_env_with(|key| vars.get(key).cloned()).unwrap();

    assert_eq!(config.kubeconfig.as_deref(), Some(std::path::Path::new("/tmp/kubeconfig")));
    assert_eq!(config.context.as_deref(), Some("kind-e2e"));
    assert_eq!(config.namespace, "alternate-ns");
    assert_eq!(config.run_id, TEST_RUN_ID);
    assert_eq!(config.poll_interval, Duration::from_millis(250));
    assert_eq!(config.poll_timeout, Duration::from_secs(120));
    assert_eq!(config.image_path("helloworld"), "docker.foo:1234/evmesh/helloworld:v0.1.0");
}

#[rstest]
fn test_config_bad_duration() {
    let vars = env(&[(POLL_TIMEOUT_ENV_VAR, "not-a-duration")]);
    assert_err!(TestConfig::from_env_with(|key| vars.get(key).cloned()));
}
