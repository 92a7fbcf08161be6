use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PolarClass)]
pub struct User {
    #[polar(attribute)]
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Logistician,
    Admin,
}

impl Role {
    pub fn name(&self) -> String {
        match self {
            Self::Buyer => "buyer".into(),
            Self::Logistician => "logistician".into(),
            Self::Admin => "admin".into(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buyer" => Some(Self::Buyer),
            "logistician" => Some(Self::Logistician),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in [Role::Buyer, Role::Logistician, Role::Admin] {
            assert_eq!(Role::parse(&role.name()), Some(role));
        }

        assert_eq!(Role::parse("dispatcher"), None);
        assert_eq!(Role::parse("Buyer"), None);
    }
}
