mod extract;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::config::Catalog;
use crate::server::handlers::{bids, catalog, negotiations, system};

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr, catalog: Catalog) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/health", get(system::health))
        .route("/bids", post(bids::create).get(bids::list))
        .route(
            "/negotiations",
            post(negotiations::create).get(negotiations::list),
        )
        .route("/negotiations/:id", get(negotiations::find))
        .route("/negotiations/:id/offers", post(negotiations::submit_offer))
        .route("/negotiations/:id/accept", patch(negotiations::accept))
        .route("/negotiations/:id/reject", patch(negotiations::reject))
        .route("/routes", get(catalog::routes))
        .route("/container-types", get(catalog::container_types))
        .layer(Extension(api))
        .layer(Extension(Arc::new(catalog)));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
