use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{Role, User};
use crate::error::{validation_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub user_role: Role,
    pub route: String,
    pub transport_type: String,
    pub cost: f64,
    pub delivery_days: i64,
    pub is_counter_bid: bool,
    pub original_bid_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidDraft {
    pub route: String,
    pub transport_type: String,
    pub cost: f64,
    pub delivery_days: i64,
    #[serde(default)]
    pub is_counter_bid: bool,
    pub original_bid_id: Option<Uuid>,
}

impl BidDraft {
    pub fn validate(&self) -> Result<(), Error> {
        if self.route.trim().is_empty() {
            return Err(validation_error("route must not be empty"));
        }

        if self.transport_type.trim().is_empty() {
            return Err(validation_error("transport_type must not be empty"));
        }

        if !self.cost.is_finite() || self.cost <= 0.0 {
            return Err(validation_error("cost must be a positive number"));
        }

        if self.delivery_days < 1 {
            return Err(validation_error("delivery_days must be at least 1"));
        }

        match (self.is_counter_bid, self.original_bid_id) {
            (true, None) => Err(validation_error(
                "counter bids must reference an original bid",
            )),
            (false, Some(_)) => Err(validation_error(
                "only counter bids may reference an original bid",
            )),
            _ => Ok(()),
        }
    }
}

impl Bid {
    pub fn new(author: &User, draft: BidDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            user_email: author.email.clone(),
            user_role: author.role,
            route: draft.route,
            transport_type: draft.transport_type,
            cost: draft.cost,
            delivery_days: draft.delivery_days,
            is_counter_bid: draft.is_counter_bid,
            original_bid_id: draft.original_bid_id,
            created_at: Utc::now(),
        }
    }
}
