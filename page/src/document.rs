//! Full HTML document around the rendered page body.

use artic_core::dom::{el, Node};
use artic_core::text;
use artic_core::{Page, SearchForm};

pub fn render_document(page: &Page, form: &SearchForm) -> String {
    let app: Node = el("div").attr("id", "app").children(page.render(form)).into();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"is\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        text::TITLE,
        app.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_page_in_app_root() {
        let html = render_document(&Page::default(), &SearchForm::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"is\">"));
        assert!(html.contains("<title>Art Institute of Chicago – Leit</title>"));
        assert!(html.contains(r#"<body>
<div id="app"><h1>"#));
        assert!(html.contains(r#"<form id="search-form" method="get" class="search">"#));
    }
}
