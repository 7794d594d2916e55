//! Search and boot flows.
//!
//! # Design
//! The controller owns the session flags and a render `Surface`. Each flow
//! shows a loading status, awaits one API operation, and replaces the
//! container with either the rendered data or an error status. Errors stop
//! at the flow boundary; nothing is retried.

use tracing::debug;

use crate::api::{Host, WorksApi};
use crate::dom::{Element, Node};
use crate::error::{ApiError, Operation};
use crate::render::{self, StatusKind};
use crate::session::{SearchForm, SessionState};
use crate::text;

/// The two render containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Results,
    Detail,
}

/// Replaces the whole content of a container.
pub trait Surface {
    fn replace(&mut self, target: Target, fragment: Vec<Node>);

    /// Remove every child of a container.
    fn clear(&mut self, target: Target) {
        self.replace(target, Vec::new());
    }
}

/// In-memory page holding the results and detail containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub results: Element,
    pub detail: Element,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            results: render::container("results", "results"),
            detail: render::container("detail", "detail"),
        }
    }
}

impl Page {
    pub fn container(&self, target: Target) -> &Element {
        match target {
            Target::Results => &self.results,
            Target::Detail => &self.detail,
        }
    }

    /// The page body with the form showing `form`.
    pub fn render(&self, form: &SearchForm) -> Vec<Node> {
        render::render_shell(form, &self.results, &self.detail)
    }
}

impl Surface for Page {
    fn replace(&mut self, target: Target, fragment: Vec<Node>) {
        match target {
            Target::Results => self.results.replace_children(fragment),
            Target::Detail => self.detail.replace_children(fragment),
        }
    }

    fn clear(&mut self, target: Target) {
        match target {
            Target::Results => self.results.clear(),
            Target::Detail => self.detail.clear(),
        }
    }
}

pub struct Controller<H, S = Page> {
    api: WorksApi<H>,
    session: SessionState,
    surface: S,
}

impl<H: Host> Controller<H, Page> {
    pub fn new(api: WorksApi<H>) -> Self {
        Self::with_surface(api, Page::default())
    }
}

impl<H: Host, S: Surface> Controller<H, S> {
    pub fn with_surface(api: WorksApi<H>, surface: S) -> Self {
        Self {
            api,
            session: SessionState::default(),
            surface,
        }
    }

    pub fn api(&self) -> &WorksApi<H> {
        &self.api
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Store the form's flags, clear the detail view, then search.
    pub async fn submit_search(&mut self, form: &SearchForm) {
        let query = form.query.trim();
        let policy = self.api.policy();
        self.session = SessionState {
            last_query: query.to_string(),
            slow: form.slow || policy.mentions_delay(query),
            force_error: form.error || policy.mentions_failure(query),
        };
        debug!(query, slow = self.session.slow, force_error = self.session.force_error, "search submitted");

        self.surface.clear(Target::Detail);
        self.surface
            .replace(Target::Results, render::render_status(StatusKind::Loading, text::LOADING_SEARCH));

        let fragment = match self.api.search_works(&self.session, query).await {
            Ok(items) => render::render_results_list(&items),
            Err(err) => error_status(&err, Operation::Search),
        };
        self.surface.replace(Target::Results, fragment);
    }

    /// Show the work named by the `id` parameter of a page query string, if any.
    pub async fn boot(&mut self, location_query: &str) {
        match id_param(location_query) {
            Some(id) => self.show_work(&id).await,
            None => debug!("no id on page load"),
        }
    }

    pub async fn show_work(&mut self, id: &str) {
        self.surface
            .replace(Target::Detail, render::render_status(StatusKind::Loading, text::LOADING_WORK));

        let fragment = match self.api.get_work(&self.session, id).await {
            Ok(work) => render::render_detail(&work),
            Err(err) => error_status(&err, Operation::Detail),
        };
        self.surface.replace(Target::Detail, fragment);
    }
}

fn error_status(err: &ApiError, operation: Operation) -> Vec<Node> {
    debug!(?operation, error = %err, "flow failed");
    let message = err
        .message()
        .unwrap_or_else(|| operation.fallback_message().to_string());
    render::render_status(StatusKind::Error, &message)
}

/// First non-empty `id` in a query string, with or without the leading `?`.
pub fn id_param(location_query: &str) -> Option<String> {
    url::form_urlencoded::parse(location_query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_param_reads_first_id() {
        assert_eq!(id_param("?id=7").as_deref(), Some("7"));
        assert_eq!(id_param("q=x&id=12&id=13").as_deref(), Some("12"));
        assert_eq!(id_param("?id=a%20b").as_deref(), Some("a b"));
    }

    #[test]
    fn id_param_absent_or_empty_is_none() {
        assert_eq!(id_param(""), None);
        assert_eq!(id_param("?q=monet"), None);
        assert_eq!(id_param("?id="), None);
    }

    #[test]
    fn page_replace_swaps_whole_container() {
        let mut page = Page::default();
        page.replace(Target::Results, render::render_status(StatusKind::Loading, "a"));
        page.replace(Target::Results, render::render_status(StatusKind::Empty, "b"));
        assert_eq!(page.results.children.len(), 1);
        assert_eq!(page.results.text_content(), "b");
        assert!(page.container(Target::Detail).children.is_empty());
    }

    #[test]
    fn page_clear_empties_only_its_target() {
        let mut page = Page::default();
        page.replace(Target::Results, render::render_status(StatusKind::Empty, "a"));
        page.replace(Target::Detail, render::render_status(StatusKind::Loading, "b"));
        page.clear(Target::Detail);
        assert!(page.detail.children.is_empty());
        assert_eq!(page.results.text_content(), "a");
        assert_eq!(page.detail.get_attr("id"), Some("detail"));
    }
}
