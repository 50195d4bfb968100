mod cleaner;
mod clients;
mod config;
mod helpers;
mod logs;
mod objects;
mod wait;

pub use cleaner::*;
pub use clients::*;
pub use config::*;
use ev_core::errors::*;
pub use helpers::*;
pub use logs::*;
pub use objects::*;
use tracing::*;
pub use wait::*;

err_impl! {E2eError,
    #[error("timed out waiting for {0}")]
    WaitTimedOut(String),

    #[error("no logs found for {0}")]
    LogsNotFound(String),
}

/// Build the client bundle and cleaner every e2e test starts from; config
/// comes out of the EVMESH_E2E_* environment variables.
pub async fn setup() -> anyhow::Result<(Clients, Cleaner)> {
    let config = TestConfig::from_env()?;
    let clients = Clients::new(&config).await?;
    let cleaner = Cleaner::new(clients.client());

    info!("e2e run {} targeting namespace {}", clients.run_id, clients.namespace);
    Ok((clients, cleaner))
}

/// Delete everything the test created, in reverse creation order.
pub async fn tear_down(cleaner: &mut Cleaner) {
    cleaner.clean().await;
}

#[cfg(test)]
mod tests;
