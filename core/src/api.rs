//! The two collection operations, with simulation applied.
//!
//! # Design
//! `WorksApi` composes the stateless `ArticClient` with a `Host` that does
//! the I/O and a `SimulationPolicy` that may delay or fail a request before
//! it is sent. The delay is always applied before the failure check, so a
//! slow failing request still takes the full delay.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::client::ArticClient;
use crate::error::{ApiError, Operation};
use crate::http::{HttpRequest, HttpResponse};
use crate::session::SessionState;
use crate::simulation::{KeywordSimulation, Simulation, SimulationPolicy};
use crate::types::{ArtworkDetail, SearchResultItem};

/// Executes I/O on behalf of the core.
///
/// `execute` returns non-2xx responses as data; only a failed round-trip is
/// an error, reported as `ApiError::TransportError`.
pub trait Host {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;

    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

pub struct WorksApi<H> {
    client: ArticClient,
    host: H,
    policy: Box<dyn SimulationPolicy>,
}

impl<H: Host> WorksApi<H> {
    /// Uses `KeywordSimulation`; swap it with `with_policy`.
    pub fn new(client: ArticClient, host: H) -> Self {
        Self {
            client,
            host,
            policy: Box::new(KeywordSimulation),
        }
    }

    pub fn with_policy(mut self, policy: impl SimulationPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn policy(&self) -> &dyn SimulationPolicy {
        self.policy.as_ref()
    }

    pub async fn search_works(&self, session: &SessionState, query: &str) -> Result<Vec<SearchResultItem>, ApiError> {
        let plan = self.policy.plan(session, Some(query));
        self.simulate(plan, Operation::Search).await?;
        let response = self.host.execute(self.client.build_search(query)).await?;
        let items = self.client.parse_search(response)?;
        debug!(query, hits = items.len(), "search completed");
        Ok(items)
    }

    /// Query-text keywords do not apply here; only the session flags do.
    pub async fn get_work(&self, session: &SessionState, id: &str) -> Result<ArtworkDetail, ApiError> {
        let plan = self.policy.plan(session, None);
        self.simulate(plan, Operation::Detail).await?;
        let response = self.host.execute(self.client.build_get_work(id)).await?;
        self.client.parse_get_work(response)
    }

    async fn simulate(&self, plan: Simulation, operation: Operation) -> Result<(), ApiError> {
        if let Some(delay) = plan.delay {
            debug!(?operation, ?delay, "simulated delay");
            self.host.pause(delay).await;
        }
        if plan.fail {
            info!(?operation, "simulated failure");
            return Err(ApiError::SimulatedError(operation));
        }
        Ok(())
    }
}
