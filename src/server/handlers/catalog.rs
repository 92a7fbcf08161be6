use std::sync::Arc;

use axum::extract::{Extension, Json};

use crate::config::{Catalog, RouteSpec};

pub async fn routes(Extension(catalog): Extension<Arc<Catalog>>) -> Json<Vec<RouteSpec>> {
    Json(catalog.routes.clone())
}

pub async fn container_types(Extension(catalog): Extension<Arc<Catalog>>) -> Json<Vec<String>> {
    Json(catalog.container_types.clone())
}
