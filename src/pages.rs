use axum::{
    extract::Query,
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

/// Static view handlers. Each serves a fixed HTML page with no business
/// logic; only `/new` takes input, a single pass-through query value.

pub async fn landing() -> Html<&'static str> {
    Html(include_str!("../templates/landing.html"))
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../templates/index.html"))
}

pub async fn analyzecode() -> Html<&'static str> {
    Html(include_str!("../templates/code_analyzer.html"))
}

pub async fn codegen() -> Html<&'static str> {
    Html(include_str!("../templates/code_builder.html"))
}

pub async fn debug_page() -> Html<&'static str> {
    Html(include_str!("../templates/code_debugger.html"))
}

pub async fn mmap() -> Html<&'static str> {
    Html(include_str!("../templates/mmap.html"))
}

pub async fn edit() -> Html<&'static str> {
    Html(include_str!("../templates/edit.html"))
}

pub async fn mme() -> Html<&'static str> {
    Html(include_str!("../templates/mind-map-editing.html"))
}

#[derive(Debug, Deserialize)]
pub struct NewPageParams {
    #[serde(default)]
    pub q: String,
}

/// Serves the mind map creation page with the optional `q` query value
/// forwarded unmodified into the view.
pub async fn new_page(Query(params): Query<NewPageParams>) -> Html<String> {
    debug!("New page requested with query: {:?}", params.q);
    Html(render_new(&params.q))
}

fn render_new(query: &str) -> String {
    include_str!("../templates/new.html").replace("{{query}}", &escape_html(query))
}

/// Escape a value for safe embedding in HTML text or attribute context.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
