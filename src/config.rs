use crate::domain::ports::CardStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryCardStore;
use crate::infrastructure::json_file::JsonFileCardStore;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CARDS_FILE: &str = "amex_cards.json";

/// Resolved runtime settings for the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Snapshot file for registered cards. `None` keeps cards in memory only.
    pub cards_file: Option<PathBuf>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cards_file: Some(PathBuf::from(DEFAULT_CARDS_FILE)),
        }
    }
}

impl GatewayConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Opens the configured card store. A corrupt snapshot file is an error.
    pub fn open_store(&self) -> Result<CardStoreBox> {
        match &self.cards_file {
            Some(path) => {
                let store = JsonFileCardStore::load(path)?;
                tracing::info!("Loaded card store from {}", store.path().display());
                Ok(Box::new(store))
            }
            None => {
                tracing::info!("Using in-memory card store, registrations will not be persisted");
                Ok(Box::new(InMemoryCardStore::new()))
            }
        }
    }
}
