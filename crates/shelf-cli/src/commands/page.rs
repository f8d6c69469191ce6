//! Page rendering command

use anyhow::Result;

use shelf_core::{Config, HtmlSurface, Library, Surface};

use crate::output::Output;

/// Render the page for a search query and fragment, as the browser would
/// show it after those two events
pub fn html(
    config: Config,
    query: Option<String>,
    fragment: Option<String>,
    output: &Output,
) -> Result<()> {
    let surface = match fragment.as_deref() {
        Some(f) => HtmlSurface::with_fragment(f),
        None => HtmlSurface::new(),
    };

    let mut library = Library::new(surface, config);
    library.start();
    if let Some(q) = query {
        library.search(&q);
    }

    if output.is_json() {
        let page = library.surface();
        println!(
            "{}",
            serde_json::json!({
                "fragment": page.fragment(),
                "route": library.route(),
                "results": page.results_html(),
                "detail": page.is_detail_visible().then(|| page.detail_html()),
            })
        );
    } else {
        print!("{}", library.surface().page_html());
    }

    Ok(())
}
