use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{Bid, BidDraft};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(draft): Json<BidDraft>,
) -> Result<Json<Bid>, Error> {
    let bid = api.create_bid(user, draft).await?;

    Ok(bid.into())
}

pub async fn list(Extension(api): Extension<DynAPI>, user: User) -> Result<Json<Vec<Bid>>, Error> {
    let bids = api.list_bids(user).await?;

    Ok(bids.into())
}
