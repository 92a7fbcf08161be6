use oso::{Oso, PolarClass};

use crate::auth::User;
use crate::entities::NegotiationThread;

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(User::get_polar_class()).unwrap();
    o.register_class(NegotiationThread::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}

#[test]
fn base_author_participant_test() {
    use crate::auth::Role;
    use crate::entities::{Negotiation, NegotiationThread};
    use uuid::Uuid;

    let authorizor = new();

    let author = User {
        id: Uuid::new_v4(),
        email: "logistician@example.com".into(),
        role: Role::Logistician,
    };

    let negotiation = Negotiation::new(Uuid::new_v4(), author.id);
    let thread = NegotiationThread {
        negotiation,
        offers: vec![],
    };

    let result = authorizor.query_rule("has_role", (author.clone(), "participant", thread.clone()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result = authorizor.is_allowed(author, "read", thread.clone());
    assert_eq!(result.unwrap(), true);

    let stranger = User {
        id: Uuid::new_v4(),
        email: "stranger@example.com".into(),
        role: Role::Buyer,
    };

    let result = authorizor.query_rule("has_role", (stranger.clone(), "participant", thread.clone()));
    assert!(result.unwrap().next().is_none());

    let result = authorizor.is_allowed(stranger, "read", thread);
    assert_eq!(result.unwrap(), false);
}

#[test]
fn offer_author_participant_test() {
    use crate::auth::Role;
    use crate::entities::{Negotiation, NegotiationThread, Offer, Proposal};
    use uuid::Uuid;

    let authorizor = new();

    let buyer = User {
        id: Uuid::new_v4(),
        email: "buyer@example.com".into(),
        role: Role::Buyer,
    };

    let negotiation = Negotiation::new(Uuid::new_v4(), Uuid::new_v4());
    let offer = Offer::new(
        negotiation.id,
        &buyer,
        Proposal {
            price: 1800.0,
            delivery_days: 30,
            message: None,
        },
    );
    let thread = NegotiationThread {
        negotiation,
        offers: vec![offer],
    };

    let result = authorizor.is_allowed(buyer, "read", thread.clone());
    assert_eq!(result.unwrap(), true);

    // admins get no blanket access to other people's threads
    let admin = User {
        id: Uuid::new_v4(),
        email: "admin@example.com".into(),
        role: Role::Admin,
    };

    let result = authorizor.is_allowed(admin, "read", thread);
    assert_eq!(result.unwrap(), false);
}
