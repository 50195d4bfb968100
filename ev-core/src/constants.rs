use std::time::Duration;

// Well-known labels
pub const KUBERNETES_IO_METADATA_NAME_KEY: &str = "kubernetes.io/metadata.name";
pub const APP_KUBERNETES_IO_NAME_KEY: &str = "app.kubernetes.io/name";

// Common labels for evmesh
pub const TEST_RUN_LABEL_KEY: &str = "evmesh.io/test-run";

// Env vars (e2e harness config)
pub const KUBECONFIG_ENV_VAR: &str = "EVMESH_E2E_KUBECONFIG";
pub const CONTEXT_ENV_VAR: &str = "EVMESH_E2E_CONTEXT";
pub const NAMESPACE_ENV_VAR: &str = "EVMESH_E2E_NAMESPACE";
pub const DOCKER_REPO_ENV_VAR: &str = "EVMESH_E2E_DOCKER_REPO";
pub const TAG_ENV_VAR: &str = "EVMESH_E2E_TAG";
pub const RUN_ID_ENV_VAR: &str = "EVMESH_E2E_RUN_ID";
pub const POLL_INTERVAL_ENV_VAR: &str = "EVMESH_E2E_POLL_INTERVAL";
pub const POLL_TIMEOUT_ENV_VAR: &str = "EVMESH_E2E_POLL_TIMEOUT";

// Defaults
pub const DEFAULT_TEST_NAMESPACE: &str = "evmesh-e2e";
pub const DEFAULT_DOCKER_REPO: &str = "localhost:5000/evmesh";
pub const DEFAULT_IMAGE_TAG: &str = "latest";

// Timing
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const POLL_TIMEOUT: Duration = Duration::from_secs(60);

// Kinds and RBAC names
pub const SVC_ACCOUNT_KIND: &str = "ServiceAccount";
pub const CLUSTER_ROLE_KIND: &str = "ClusterRole";
pub const CLUSTER_ADMIN_ROLE: &str = "cluster-admin";
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";
