use std::collections::HashMap;

use uuid::Uuid;

use crate::auth::{Role, User};
use crate::entities::Bid;

// Partitions the flat bid list into what one actor may see. Pure and
// order-preserving: callers pass the same snapshot to every viewer.
//
// Logisticians see their own bids plus counter-bids aimed at their
// originals. Everyone else sees logistician originals plus their own
// counter-bids. A counter-bid whose original fell outside the snapshot
// matches no owner and stays visible to its author only.
pub fn visible_bids(all_bids: &[Bid], viewer: &User) -> Vec<Bid> {
    // counter-bids never anchor other bids, so only originals are owners
    let original_owner: HashMap<Uuid, Uuid> = all_bids
        .iter()
        .filter(|bid| !bid.is_counter_bid)
        .map(|bid| (bid.id, bid.user_id))
        .collect();

    all_bids
        .iter()
        .filter(|bid| match viewer.role {
            Role::Logistician => {
                bid.user_id == viewer.id
                    || (bid.is_counter_bid
                        && bid
                            .original_bid_id
                            .and_then(|original_id| original_owner.get(&original_id))
                            == Some(&viewer.id))
            }
            _ => {
                (!bid.is_counter_bid && bid.user_role == Role::Logistician)
                    || (bid.is_counter_bid && bid.user_id == viewer.id)
            }
        })
        .cloned()
        .collect()
}
