//! Pure rendering from API data to node fragments.
//!
//! Nothing here touches the network or session state. Each function returns
//! the complete new content of a container; the controller swaps it in with
//! a single `Surface::replace`.

use crate::dom::{el, Element, Node};
use crate::session::SearchForm;
use crate::text;
use crate::types::{present, ArtworkDetail, SearchResultItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Loading => "loading",
            StatusKind::Error => "error",
            StatusKind::Empty => "empty",
        }
    }
}

/// IIIF URL for an image id, at the 843px-wide derivative.
pub fn iiif_url(image_id: Option<&str>) -> Option<String> {
    image_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://www.artic.edu/iiif/2/{id}/full/843,/0/default.jpg"))
}

pub fn render_status(kind: StatusKind, message: &str) -> Vec<Node> {
    vec![el("div")
        .class(&format!("status status--{}", kind.as_str()))
        .child(el("p").child(message))
        .into()]
}

pub fn render_results_list(items: &[SearchResultItem]) -> Vec<Node> {
    if items.is_empty() {
        return render_status(StatusKind::Empty, text::NO_RESULTS);
    }
    let links = items.iter().map(|item| -> Node {
        let label = present(&item.title)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", item.id));
        el("li")
            .child(
                el("a")
                    .attr("href", format!("?id={}", item.id))
                    .attr("data-id", item.id.to_string())
                    .class("result__link")
                    .child(label),
            )
            .into()
    });
    vec![el("ol").class("results__list").children(links).into()]
}

pub fn render_detail(work: &ArtworkDetail) -> Vec<Node> {
    let heading = present(&work.title)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", work.id));

    let image: Node = match iiif_url(work.image_id.as_deref()) {
        Some(src) => el("img")
            .attr("src", src)
            .attr("alt", present(&work.title).unwrap_or(""))
            .into(),
        None => el("div").class("noimg").child(text::NO_IMAGE).into(),
    };

    let rows = [
        (text::ARTIST, &work.artist_title),
        (text::DATE, &work.date_display),
        (text::MEDIUM, &work.medium_display),
        (text::DIMENSIONS, &work.dimensions),
        (text::CREDIT, &work.credit_line),
    ];
    let mut meta = el("dl").class("meta");
    for (label, value) in rows {
        meta = meta
            .child(el("dt").child(label))
            .child(el("dd").child(present(value).unwrap_or(text::MISSING)));
    }

    vec![
        el("a")
            .attr("href", "./")
            .class("button button--back")
            .child(text::BACK)
            .into(),
        el("h3").child(heading).into(),
        image,
        meta.into(),
    ]
}

/// An empty render container.
pub fn container(id: &str, class: &str) -> Element {
    el("div").attr("id", id).class(class)
}

fn form_row(label: &str, input: Element) -> Element {
    el("label")
        .class("form-row")
        .child(el("span").class("form-row__label").child(label))
        .child(input)
}

fn checkbox(name: &str, checked: bool) -> Element {
    let input = el("input").attr("type", "checkbox").attr("id", name).attr("name", name);
    if checked {
        input.attr("checked", "checked")
    } else {
        input
    }
}

/// The whole page body: heading, search form, and both containers.
pub fn render_shell(form: &SearchForm, results: &Element, detail: &Element) -> Vec<Node> {
    let query = el("input")
        .attr("type", "search")
        .attr("name", "q")
        .attr("value", form.query.as_str())
        .attr("placeholder", text::QUERY_PLACEHOLDER)
        .attr("required", "true")
        .attr("autocomplete", "off")
        .class("input");

    let controls = el("div")
        .class("controls")
        .child(form_row(text::SLOW_LABEL, el("div").child(checkbox("slow", form.slow))))
        .child(form_row(text::ERROR_LABEL, el("div").child(checkbox("error", form.error))));

    let search = el("form")
        .attr("id", "search-form")
        .attr("method", "get")
        .class("search")
        .child(form_row(text::QUERY_LABEL, query))
        .child(controls)
        .child(el("button").attr("type", "submit").class("button").child(text::SUBMIT));

    vec![
        el("h1").child(text::TITLE).into(),
        el("p").class("lead").child(text::LEAD).into(),
        search.into(),
        el("h2").child(text::RESULTS_HEADING).into(),
        results.clone().into(),
        el("h2").child(text::DETAIL_HEADING).into(),
        detail.clone().into(),
    ]
}
