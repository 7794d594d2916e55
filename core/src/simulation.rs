//! Simulated latency and failure for exercising loading and error states.
//!
//! A `SimulationPolicy` looks at the session flags and, for searches, the
//! query text, and returns a `Simulation` plan. `WorksApi` applies the plan
//! before any network call: delay first, then failure.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::session::SessionState;

/// Pause applied when a request is simulated as slow.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1200);

static SLOW_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)\bslow\b").expect("valid regex"));
static ERROR_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)\berror\b").expect("valid regex"));

/// What to do before issuing a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulation {
    pub delay: Option<Duration>,
    pub fail: bool,
}

impl Simulation {
    pub fn none() -> Self {
        Self::default()
    }
}

pub trait SimulationPolicy: Send + Sync {
    /// Whether free text asks for a slow request.
    fn mentions_delay(&self, query: &str) -> bool;

    /// Whether free text asks for a failing request.
    fn mentions_failure(&self, query: &str) -> bool;

    fn delay(&self) -> Duration {
        SIMULATED_DELAY
    }

    /// Combine session flags with the query text, if the request has one.
    fn plan(&self, session: &SessionState, query: Option<&str>) -> Simulation {
        let slow = session.slow || query.is_some_and(|q| self.mentions_delay(q));
        let fail = session.force_error || query.is_some_and(|q| self.mentions_failure(q));
        Simulation {
            delay: slow.then(|| self.delay()),
            fail,
        }
    }
}

/// Matches the standalone words `slow` and `error`, ignoring ASCII case.
///
/// Word boundaries are ASCII-only, so a keyword glued to a non-ASCII letter
/// (`slowá`) still counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSimulation;

impl SimulationPolicy for KeywordSimulation {
    fn mentions_delay(&self, query: &str) -> bool {
        SLOW_WORD.is_match(query)
    }

    fn mentions_failure(&self, query: &str) -> bool {
        ERROR_WORD.is_match(query)
    }
}

/// Never delays or fails, whatever the session flags say.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSimulation;

impl SimulationPolicy for NoSimulation {
    fn mentions_delay(&self, _query: &str) -> bool {
        false
    }

    fn mentions_failure(&self, _query: &str) -> bool {
        false
    }

    fn plan(&self, _session: &SessionState, _query: Option<&str>) -> Simulation {
        Simulation::none()
    }
}
