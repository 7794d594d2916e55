//! User-facing strings. The interface is in Icelandic.

pub const TITLE: &str = "Art Institute of Chicago – Leit";
pub const LEAD: &str =
    "Leitaðu að verkum; smelltu á titil til að sjá nánar. Prófaðu „slow“ eða „error“ í leitarreit eða með gátboxum.";

pub const QUERY_LABEL: &str = "Leitarorð";
pub const QUERY_PLACEHOLDER: &str = "t.d. monet, van gogh, landscape…";
pub const SLOW_LABEL: &str = "Hæga hermun (slow)";
pub const ERROR_LABEL: &str = "Villa í kalli (error)";
pub const SUBMIT: &str = "Leita";
pub const RESULTS_HEADING: &str = "Niðurstöður";
pub const DETAIL_HEADING: &str = "Stakt verk";

pub const LOADING_SEARCH: &str = "Sæki…";
pub const LOADING_WORK: &str = "Sæki verk…";
pub const NO_RESULTS: &str = "Engar niðurstöður.";
pub const SEARCH_FAILED_FALLBACK: &str = "Villa í leit";
pub const WORK_FAILED_FALLBACK: &str = "Villa í verki";

pub const SIMULATED_SEARCH_ERROR: &str = "Hermuð villa í leit";
pub const SIMULATED_WORK_ERROR: &str = "Hermuð villa í sækja stakt verk";
pub const SEARCH_STATUS_PREFIX: &str = "Leit brást";
pub const WORK_STATUS_PREFIX: &str = "Sækja verk brást";

pub const BACK: &str = "← Til baka í leit";
pub const NO_IMAGE: &str = "Engin mynd";
pub const MISSING: &str = "—";

pub const ARTIST: &str = "Höfundur";
pub const DATE: &str = "Dagsetning";
pub const MEDIUM: &str = "Miðill";
pub const DIMENSIONS: &str = "Stærð";
pub const CREDIT: &str = "Heimild";
