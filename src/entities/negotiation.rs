use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Offer;
use crate::error::{invalid_state_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: Uuid,
    pub base_bid_id: Uuid,
    pub base_author_id: Uuid,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Open,
    Accepted,
    Rejected,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Open => "open".into(),
            Self::Accepted => "accepted".into(),
            Self::Rejected => "rejected".into(),
        }
    }
}

impl Negotiation {
    pub fn new(base_bid_id: Uuid, base_author_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            base_bid_id,
            base_author_id,
            status: Status::Open,
            created_at: Utc::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        match self.status {
            Status::Open => true,
            _ => false,
        }
    }

    #[tracing::instrument]
    pub fn accept(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Open => {
                self.status = Status::Accepted;
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }

    #[tracing::instrument]
    pub fn reject(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Open => {
                self.status = Status::Rejected;
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NegotiationThread {
    pub negotiation: Negotiation,
    pub offers: Vec<Offer>,
}

impl NegotiationThread {
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        if self.negotiation.base_author_id == user_id {
            return true;
        }

        self.offers.iter().any(|offer| offer.author_id == user_id)
    }
}

impl oso::PolarClass for NegotiationThread {
    fn get_polar_class_builder() -> oso::ClassBuilder<NegotiationThread> {
        oso::Class::builder()
            .name("NegotiationThread")
            .add_method("is_participant", NegotiationThread::is_participant)
    }

    fn get_polar_class() -> oso::Class {
        let builder = NegotiationThread::get_polar_class_builder();
        builder.build()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NegotiationSummary {
    pub negotiation: Negotiation,
    pub last_offer: Option<Offer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, User};
    use crate::entities::Proposal;

    #[test]
    fn open_negotiation_accepts_once() {
        let mut negotiation = Negotiation::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(negotiation.is_open());

        negotiation.accept().unwrap();
        assert_eq!(negotiation.status, Status::Accepted);

        assert_eq!(negotiation.accept().unwrap_err().code, 100);
        assert_eq!(negotiation.reject().unwrap_err().code, 100);
    }

    #[test]
    fn open_negotiation_rejects_once() {
        let mut negotiation = Negotiation::new(Uuid::new_v4(), Uuid::new_v4());

        negotiation.reject().unwrap();
        assert_eq!(negotiation.status, Status::Rejected);
        assert!(!negotiation.is_open());

        assert_eq!(negotiation.accept().unwrap_err().code, 100);
    }

    #[test]
    fn status_names_match_stored_values() {
        assert_eq!(Status::Open.name(), "open");
        assert_eq!(Status::Accepted.name(), "accepted");
        assert_eq!(Status::Rejected.name(), "rejected");
    }

    #[test]
    fn participation_is_derived_from_authorship() {
        let base_author_id = Uuid::new_v4();
        let negotiation = Negotiation::new(Uuid::new_v4(), base_author_id);

        let buyer = User {
            id: Uuid::new_v4(),
            email: "buyer@example.com".into(),
            role: Role::Buyer,
        };

        let offer = Offer::new(
            negotiation.id,
            &buyer,
            Proposal {
                price: 2200.0,
                delivery_days: 35,
                message: Some("can you do better on lead time?".into()),
            },
        );

        let thread = NegotiationThread {
            negotiation,
            offers: vec![offer],
        };

        assert!(thread.is_participant(base_author_id));
        assert!(thread.is_participant(buyer.id));
        assert!(!thread.is_participant(Uuid::new_v4()));
    }
}
