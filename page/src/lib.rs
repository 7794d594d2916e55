//! Serves the search page.
//!
//! # Design
//! Every GET to `/` is one page load: a fresh `Controller` (and so a fresh
//! session) runs the boot flow for `?id=`, then the search flow when the form
//! was submitted (`?q=`, plus `slow=on` / `error=on` for checked boxes). The
//! response is the page as it stands once both flows have settled.

pub mod config;
pub mod document;
pub mod host;

use axum::{
    extract::{RawQuery, State},
    response::Html,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing::debug;

use artic_core::{ArticClient, Controller, NoSimulation, SearchForm, WorksApi};

use crate::config::{PageConfig, SimulationMode};
use crate::host::ReqwestHost;

#[derive(Clone)]
pub struct AppState {
    client: ArticClient,
    http: reqwest::Client,
    simulation: SimulationMode,
}

impl AppState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            client: ArticClient::new(&config.api_base),
            http: reqwest::Client::new(),
            simulation: config.simulation,
        }
    }

    fn api(&self) -> WorksApi<ReqwestHost> {
        let api = WorksApi::new(self.client.clone(), ReqwestHost::new(self.http.clone()));
        match self.simulation {
            SimulationMode::Keywords => api,
            SimulationMode::Off => api.with_policy(NoSimulation),
        }
    }
}

/// Query parameters written by the search form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormParams {
    pub q: Option<String>,
    pub slow: Option<String>,
    pub error: Option<String>,
}

impl FormParams {
    /// Reads the first value of each parameter; repeats and unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match &*key {
                "q" => &mut params.q,
                "slow" => &mut params.slow,
                "error" => &mut params.error,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// The submitted form, or `None` when there is no query to search for.
    pub fn submission(&self) -> Option<SearchForm> {
        let query = self.q.as_deref().filter(|q| !q.is_empty())?;
        Some(SearchForm {
            query: query.to_string(),
            slow: self.slow.is_some(),
            error: self.error.is_some(),
        })
    }
}

pub fn app(config: &PageConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(AppState::new(config))
}

pub async fn run(listener: TcpListener, config: PageConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(&config)).await
}

async fn index(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Html<String> {
    let raw = raw.unwrap_or_default();
    let mut controller = Controller::new(state.api());
    controller.boot(&raw).await;

    let form = match FormParams::from_query(&raw).submission() {
        Some(form) => {
            controller.submit_search(&form).await;
            form
        }
        None => SearchForm::default(),
    };
    debug!(query = %form.query, session = ?controller.session(), "page rendered");
    Html(document::render_document(controller.surface(), &form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_not_a_submission() {
        let params = FormParams {
            q: Some(String::new()),
            slow: Some("on".to_string()),
            error: None,
        };
        assert!(params.submission().is_none());
        assert!(FormParams::default().submission().is_none());
    }

    #[test]
    fn repeated_parameters_keep_the_first_value() {
        let params = FormParams::from_query("?q=monet&q=bedroom&slow=on&slow=off&id=7");
        assert_eq!(
            params,
            FormParams {
                q: Some("monet".to_string()),
                slow: Some("on".to_string()),
                error: None,
            }
        );
    }

    #[test]
    fn form_encoding_is_decoded() {
        let params = FormParams::from_query("q=van+gogh%21&error=on");
        assert_eq!(params.q.as_deref(), Some("van gogh!"));
        assert_eq!(params.error.as_deref(), Some("on"));
        assert_eq!(FormParams::from_query(""), FormParams::default());
    }

    #[test]
    fn checkbox_presence_sets_flags() {
        let params = FormParams {
            q: Some("monet".to_string()),
            slow: None,
            error: Some("on".to_string()),
        };
        assert_eq!(
            params.submission(),
            Some(SearchForm {
                query: "monet".to_string(),
                slow: false,
                error: true,
            })
        );
    }
}
