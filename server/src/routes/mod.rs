//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a Leptos route rendered server-side and hydrated in the
//! browser. Compiled assets live under the Leptos site root: `/pkg` holds the
//! WASM bundle and stylesheet, everything else in the site root (logo,
//! favicon) is served by the fallback, which renders the not-found view when
//! no file matches.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Apply the `SITE_ROOT` override on top of the options read from the
/// workspace manifest.
fn with_site_root(mut options: LeptosOptions, site_root: Option<&str>) -> LeptosOptions {
    if let Some(root) = site_root {
        options.site_root = root.into();
    }
    options
}

/// Leptos SSR site: page routes, `/pkg` assets, static fallback, health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("{e}"))?;
    Ok(site_router(with_site_root(conf.leptos_options, config.site_root.as_deref()), config.compression))
}

fn site_router(leptos_options: LeptosOptions, compression: bool) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    if compression { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
