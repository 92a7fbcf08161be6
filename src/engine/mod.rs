mod bid_api;
mod helpers;
mod negotiation_api;

use async_trait::async_trait;
use oso::Oso;
use sqlx::{Executor, Pool, Postgres};

use crate::{
    api::{SystemAPI, API},
    auth::authorizor,
    error::{forbidden_error, Error},
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    authorizor: Oso,
    bid_list_limit: i64,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, bid_list_limit: i64) -> Result<Self, Error> {
        // TODO: move schema setup to sqlx migrations

        // bid service (KV store)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS bids (id UUID PRIMARY KEY, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        // negotiation service; queryable fields are mirrored into columns,
        // the document stays authoritative
        pool.execute(
            "CREATE TABLE IF NOT EXISTS negotiations (id UUID PRIMARY KEY, base_bid_id UUID NOT NULL REFERENCES bids (id), base_author_id UUID NOT NULL, status VARCHAR NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        // seq gives offers their append order
        pool.execute(
            "CREATE TABLE IF NOT EXISTS negotiation_offers (seq BIGSERIAL PRIMARY KEY, id UUID NOT NULL, negotiation_id UUID NOT NULL REFERENCES negotiations (id), author_id UUID NOT NULL, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self {
            pool,
            authorizor: authorizor::new(),
            bid_list_limit,
        })
    }
}

impl Engine {
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.authorizor.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(forbidden_error())
    }
}

#[async_trait]
impl SystemAPI for Engine {
    async fn ping(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(sqlx::query("SELECT 1")).await?;

        Ok(())
    }
}

impl API for Engine {}
