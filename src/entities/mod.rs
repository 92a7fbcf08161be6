mod bid;
mod negotiation;
mod offer;

pub use bid::{Bid, BidDraft};
pub use negotiation::{Negotiation, NegotiationSummary, NegotiationThread};
pub use offer::{Offer, Proposal};
