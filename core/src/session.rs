//! Per-page session flags.

/// State set by the last form submission and read by every later request.
///
/// Owned by the `Controller`; a page load starts from `Default`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_query: String,
    pub slow: bool,
    pub force_error: bool,
}

/// Values submitted with the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub slow: bool,
    pub error: bool,
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}
