use anyhow::{Context, Result};
use std::{sync::Arc, time::Duration};

use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{http_cache, log_requests, state::*, ServerConfig};
use crate::catalog::{Catalog, CatalogQuery, FileRecord};
use crate::search::FileFilter;

const NOT_FOUND_MESSAGE: &str = "The page you're looking for doesn't exist or has been moved.";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerStats {
    pub uptime: String,
    pub files_count: usize,
    pub categories_count: usize,
}

#[derive(Serialize)]
struct NotFoundBody {
    pub error: &'static str,
    pub message: &'static str,
}

/// A file together with everything its detail view shows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedFile<'a> {
    pub file: &'a FileRecord,
    pub related: Vec<&'a FileRecord>,
    pub formatted_size: String,
    pub formatted_release_date: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

fn not_found() -> Response {
    let body = NotFoundBody {
        error: "not_found",
        message: NOT_FOUND_MESSAGE,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let query = CatalogQuery::new(&state.catalog);
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        files_count: state.catalog.get_files_count(),
        categories_count: query.list_categories().len(),
    };
    Json(stats)
}

async fn list_files(
    State(catalog): State<SharedCatalog>,
    Query(filter): Query<FileFilter>,
) -> Response {
    let query = CatalogQuery::new(&catalog);
    Json(filter.apply(query.list_all())).into_response()
}

async fn get_file(State(catalog): State<SharedCatalog>, Path(id): Path<String>) -> Response {
    match CatalogQuery::new(&catalog).get_by_id(&id) {
        Some(file) => Json(file).into_response(),
        None => not_found(),
    }
}

async fn get_related_files(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Response {
    Json(CatalogQuery::new(&catalog).get_related(&id)).into_response()
}

async fn get_resolved_file(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Response {
    let query = CatalogQuery::new(&catalog);
    match query.get_by_id(&id) {
        Some(file) => Json(ResolvedFile {
            file,
            related: query.get_related(&id),
            formatted_size: file.formatted_size(),
            formatted_release_date: file.formatted_release_date(),
        })
        .into_response(),
        None => not_found(),
    }
}

async fn get_categories(State(catalog): State<SharedCatalog>) -> Response {
    Json(CatalogQuery::new(&catalog).list_categories()).into_response()
}

pub fn make_app(config: ServerConfig, catalog: Catalog) -> Router {
    let state = ServerState::new(config.clone(), Arc::new(catalog));

    let content_routes: Router = Router::new()
        .route("/files", get(list_files))
        .route("/files/{id}", get(get_file))
        .route("/files/{id}/related", get(get_related_files))
        .route("/files/{id}/resolved", get(get_resolved_file))
        .route("/categories", get(get_categories))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .fallback(|| async { not_found() })
            .with_state(state.clone()),
    };

    #[allow(unused_mut)]
    let mut app: Router = home_router.nest("/v1", content_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, catalog: Catalog) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Ready to serve at port {}!", port);

    Ok(axum::serve(listener, app).await?)
}
