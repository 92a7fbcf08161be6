use super::Database;

use sqlx::{pool::PoolConnection, types::Json, Executor, Row, Transaction};
use uuid::Uuid;

use crate::{
    entities::{Bid, Negotiation, Offer},
    error::{not_found_error, Error},
};

#[tracing::instrument(skip(conn))]
pub async fn fetch_bid(conn: &mut PoolConnection<Database>, id: &Uuid) -> Result<Bid, Error> {
    let Json(bid): Json<Bid> = conn
        .fetch_optional(sqlx::query("SELECT data FROM bids WHERE id = $1").bind(id))
        .await?
        .ok_or_else(|| not_found_error())?
        .try_get("data")?;

    Ok(bid)
}

#[tracing::instrument(skip(tx))]
pub async fn fetch_negotiation_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Negotiation, Error> {
    let Json(negotiation): Json<Negotiation> = tx
        .fetch_optional(
            sqlx::query("SELECT data FROM negotiations WHERE id = $1 FOR UPDATE").bind(id),
        )
        .await?
        .ok_or_else(|| not_found_error())?
        .try_get("data")?;

    Ok(negotiation)
}

#[tracing::instrument(skip(tx))]
pub async fn update_negotiation(
    tx: &mut Transaction<'_, Database>,
    negotiation: &Negotiation,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE negotiations SET status = $2, data = $3 WHERE id = $1")
            .bind(&negotiation.id)
            .bind(negotiation.status.name())
            .bind(Json(negotiation)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(tx))]
pub async fn insert_offer(tx: &mut Transaction<'_, Database>, offer: &Offer) -> Result<(), Error> {
    tx.execute(
        sqlx::query(
            "INSERT INTO negotiation_offers (id, negotiation_id, author_id, data) VALUES ($1, $2, $3, $4)",
        )
        .bind(&offer.id)
        .bind(&offer.negotiation_id)
        .bind(&offer.author_id)
        .bind(Json(offer)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(conn))]
pub async fn fetch_offers(
    conn: &mut PoolConnection<Database>,
    negotiation_id: &Uuid,
) -> Result<Vec<Offer>, Error> {
    let rows = conn
        .fetch_all(
            sqlx::query(
                "SELECT data FROM negotiation_offers WHERE negotiation_id = $1 ORDER BY seq ASC",
            )
            .bind(negotiation_id),
        )
        .await?;

    let mut offers = Vec::new();

    for row in rows.iter() {
        let Json(offer): Json<Offer> = row.try_get("data")?;
        offers.push(offer);
    }

    Ok(offers)
}
