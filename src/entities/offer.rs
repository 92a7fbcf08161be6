use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{Role, User};
use crate::error::{validation_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub negotiation_id: Uuid,
    pub author_id: Uuid,
    pub author_role: Role,
    pub price: f64,
    pub delivery_days: i64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub price: f64,
    pub delivery_days: i64,
    pub message: Option<String>,
}

impl Proposal {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(validation_error("price must be a positive number"));
        }

        if self.delivery_days < 1 {
            return Err(validation_error("delivery_days must be at least 1"));
        }

        Ok(())
    }
}

impl Offer {
    pub fn new(negotiation_id: Uuid, author: &User, proposal: Proposal) -> Self {
        Self {
            id: Uuid::new_v4(),
            negotiation_id,
            author_id: author.id,
            author_role: author.role,
            price: proposal.price,
            delivery_days: proposal.delivery_days,
            message: proposal.message,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_bounds_are_enforced() {
        let proposal = Proposal {
            price: 2200.0,
            delivery_days: 35,
            message: None,
        };
        assert!(proposal.validate().is_ok());

        let proposal = Proposal {
            price: -1.0,
            delivery_days: 35,
            message: None,
        };
        assert_eq!(proposal.validate().unwrap_err().code, 101);

        let proposal = Proposal {
            price: 2200.0,
            delivery_days: 0,
            message: None,
        };
        assert_eq!(proposal.validate().unwrap_err().code, 101);
    }

    #[test]
    fn new_offer_snapshots_its_author() {
        let author = User {
            id: Uuid::new_v4(),
            email: "buyer@example.com".into(),
            role: Role::Buyer,
        };

        let negotiation_id = Uuid::new_v4();
        let offer = Offer::new(
            negotiation_id,
            &author,
            Proposal {
                price: 2100.0,
                delivery_days: 40,
                message: Some("firm".into()),
            },
        );

        assert_eq!(offer.negotiation_id, negotiation_id);
        assert_eq!(offer.author_id, author.id);
        assert_eq!(offer.author_role, Role::Buyer);
        assert_eq!(offer.price, 2100.0);
    }
}
