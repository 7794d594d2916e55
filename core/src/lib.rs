//! Search and detail views over the Art Institute of Chicago collection API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). Rendering produces plain
//! node trees; the only side effect in the whole crate is replacing the
//! contents of a render container. The caller supplies a `Host` that executes
//! HTTP round-trips and pauses, which keeps every flow deterministic under
//! test.
//!
//! # Design
//! - `ArticClient` is stateless: it holds only `base_url` and splits each
//!   endpoint into `build_*` and `parse_*`.
//! - `WorksApi` layers the simulated delay/failure policy and the `Host`
//!   round-trip on top of the client.
//! - `Controller` owns the session flags and the render surface and runs the
//!   search and boot flows.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod controller;
pub mod dom;
pub mod error;
pub mod http;
pub mod render;
pub mod session;
pub mod simulation;
pub mod text;
pub mod types;

pub use api::{Host, WorksApi};
pub use client::ArticClient;
pub use controller::{Controller, Page, Surface, Target};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{SearchForm, SessionState};
pub use simulation::{KeywordSimulation, NoSimulation, Simulation, SimulationPolicy, SIMULATED_DELAY};
pub use types::{ArtworkDetail, SearchResultItem};
