use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Bid, BidDraft, Negotiation, NegotiationSummary, NegotiationThread, Proposal};
use crate::error::Error;

#[async_trait]
pub trait BidAPI {
    async fn create_bid(&self, user: User, draft: BidDraft) -> Result<Bid, Error>;

    async fn list_bids(&self, user: User) -> Result<Vec<Bid>, Error>;
}

#[async_trait]
pub trait NegotiationAPI {
    async fn open_negotiation(
        &self,
        user: User,
        base_bid_id: Uuid,
        proposal: Proposal,
    ) -> Result<NegotiationThread, Error>;

    async fn submit_offer(
        &self,
        user: User,
        negotiation_id: Uuid,
        proposal: Proposal,
    ) -> Result<NegotiationThread, Error>;

    async fn accept_negotiation(&self, user: User, negotiation_id: Uuid)
        -> Result<Negotiation, Error>;

    async fn reject_negotiation(&self, user: User, negotiation_id: Uuid)
        -> Result<Negotiation, Error>;

    async fn list_negotiations(&self, user: User) -> Result<Vec<NegotiationSummary>, Error>;

    async fn find_negotiation(
        &self,
        user: User,
        negotiation_id: Uuid,
    ) -> Result<NegotiationThread, Error>;
}

#[async_trait]
pub trait SystemAPI {
    async fn ping(&self) -> Result<(), Error>;
}

pub trait API: BidAPI + NegotiationAPI + SystemAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
