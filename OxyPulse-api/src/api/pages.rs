//! Static HTML pages served next to the API.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

/// Landing page served at `/`
pub const INDEX_PAGE: &str = "index.html";

/// Serve `index.html` at `/` and every other unmatched path from `static_dir`.
///
/// `ServeDir` rejects paths that escape the directory.
pub fn serve_pages<S>(router: Router<S>, static_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    debug!("Serving static pages from {}", static_dir.display());

    router
        .route_service("/", ServeFile::new(static_dir.join(INDEX_PAGE)))
        .fallback_service(ServeDir::new(static_dir))
}
