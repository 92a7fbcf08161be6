use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{Negotiation, NegotiationSummary, NegotiationThread, Proposal};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    base_bid_id: Uuid,
    price: f64,
    delivery_days: i64,
    message: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(params): Json<CreateParams>,
) -> Result<Json<NegotiationThread>, Error> {
    let proposal = Proposal {
        price: params.price,
        delivery_days: params.delivery_days,
        message: params.message,
    };

    let thread = api
        .open_negotiation(user, params.base_bid_id, proposal)
        .await?;

    Ok(thread.into())
}

pub async fn submit_offer(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
    Json(proposal): Json<Proposal>,
) -> Result<Json<NegotiationThread>, Error> {
    let thread = api.submit_offer(user, id, proposal).await?;

    Ok(thread.into())
}

pub async fn accept(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
) -> Result<Json<Negotiation>, Error> {
    let negotiation = api.accept_negotiation(user, id).await?;

    Ok(negotiation.into())
}

pub async fn reject(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
) -> Result<Json<Negotiation>, Error> {
    let negotiation = api.reject_negotiation(user, id).await?;

    Ok(negotiation.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<Vec<NegotiationSummary>>, Error> {
    let negotiations = api.list_negotiations(user).await?;

    Ok(negotiations.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
) -> Result<Json<NegotiationThread>, Error> {
    let thread = api.find_negotiation(user, id).await?;

    Ok(thread.into())
}
