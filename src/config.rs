use std::env;
use std::fmt::Debug;
use std::fs;
use std::net::SocketAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{config_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
}

// Read-only reference data served to clients. The lists are fixed at
// startup; there is no dictionary CRUD.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub routes: Vec<RouteSpec>,
    pub container_types: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        let pairs = [
            ("Moscow", "Shanghai"),
            ("Moscow", "Beijing"),
            ("Moscow", "Ningbo"),
            ("Moscow", "Qingdao"),
            ("Moscow", "Yantian"),
            ("Saint Petersburg", "Shanghai"),
            ("Saint Petersburg", "Beijing"),
            ("Saint Petersburg", "Ningbo"),
            ("Yekaterinburg", "Shanghai"),
            ("Yekaterinburg", "Guangzhou"),
        ];

        Self {
            routes: pairs
                .iter()
                .map(|(from, to)| RouteSpec {
                    from: (*from).into(),
                    to: (*to).into(),
                })
                .collect(),
            container_types: vec![
                "20'".into(),
                "20' Heavy".into(),
                "40'".into(),
                "40' HC".into(),
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub bid_list_limit: i64,
    pub catalog: Catalog,
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Ok(Self {
            listen_addr: parse_env("LISTEN_ADDR", "127.0.0.1:3000")?,
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", "5")?,
            bid_list_limit: parse_env("BID_LIST_LIMIT", "500")?,
            catalog: load_catalog()?,
        })
    }
}

fn parse_env<T>(name: &str, default: &str) -> Result<T, Error>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    env::var(name)
        .unwrap_or_else(|_| default.into())
        .parse()
        .map_err(config_error)
}

fn load_catalog() -> Result<Catalog, Error> {
    match env::var("CATALOG_PATH") {
        Ok(path) => {
            let raw = fs::read_to_string(&path).map_err(config_error)?;
            let catalog = serde_json::from_str(&raw).map_err(config_error)?;

            tracing::info!("loaded catalog from {}", path);

            Ok(catalog)
        }
        Err(_) => Ok(Catalog::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_populated() {
        let catalog = Catalog::default();

        assert_eq!(catalog.routes.len(), 10);
        assert_eq!(catalog.container_types.len(), 4);
        assert!(catalog.routes.contains(&RouteSpec {
            from: "Moscow".into(),
            to: "Shanghai".into(),
        }));
    }

    #[test]
    fn catalog_deserializes_from_json() {
        let raw = r#"{
            "routes": [{ "from": "Moscow", "to": "Shanghai" }],
            "container_types": ["40'"]
        }"#;

        let catalog: Catalog = serde_json::from_str(raw).unwrap();

        assert_eq!(catalog.routes.len(), 1);
        assert_eq!(catalog.container_types, vec!["40'".to_string()]);
    }
}
