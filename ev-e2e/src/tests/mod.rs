mod cleaner_test;
mod config_test;
mod wait_test;

use std::time::Duration;

use ev_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use ev_core::k8s::GVK;
use ev_core::prelude::*;

// Short enough that the timeout tests don't drag the suite out
const TEST_POLL_INTERVAL: Duration = Duration::from_millis(10);
const TEST_POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn test_clients(client: kube::Client) -> Clients {
    Clients::with_client(client, TEST_NAMESPACE, TEST_RUN_ID)
}
