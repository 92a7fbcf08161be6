use axum::extract::{Extension, Json};
use serde_json::{json, Value};

use crate::api::DynAPI;
use crate::error::Error;

pub async fn health(Extension(api): Extension<DynAPI>) -> Result<Json<Value>, Error> {
    api.ping().await?;

    Ok(Json(json!({ "ok": true })))
}
