use crate::domain::card::{CardRecord, CardTable};
use crate::domain::ports::CardStore;
use crate::domain::token::Token;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

/// A card store persisted as one JSON object keyed by token.
///
/// The file is read once by [`JsonFileCardStore::load`] and rewritten in full
/// after every registration. Writes go to a temporary file in the same
/// directory which is then renamed over the target, so a crash mid-write
/// leaves the previous snapshot intact.
///
/// A registration whose snapshot cannot be written is rolled back, so memory
/// never holds a card the file does not. Concurrent processes sharing one
/// file are not coordinated: the last writer wins.
pub struct JsonFileCardStore {
    path: PathBuf,
    cards: RwLock<CardTable>,
}

impl JsonFileCardStore {
    /// Loads the snapshot at `path`, or starts empty when the file does not exist.
    ///
    /// A file that exists but does not parse is reported as
    /// [`GatewayError::CorruptStore`] instead of being silently discarded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let cards = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                GatewayError::CorruptStore {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CardTable::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            cards: RwLock::new(cards),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, cards: &CardTable) -> Result<()> {
        let mut snapshot = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut snapshot, PrettyFormatter::with_indent(b"    "));
        cards.serialize(&mut serializer)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_snapshot(&path, &snapshot))
            .await
            .map_err(io::Error::other)?
    }
}

/// Writes `snapshot` next to `path` and renames it into place.
fn write_snapshot(path: &Path, snapshot: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(snapshot)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl CardStore for JsonFileCardStore {
    async fn register(&self, record: CardRecord) -> Result<Token> {
        let mut cards = self.cards.write().await;
        let token = cards.register(record, &mut rand::thread_rng());
        if let Err(e) = self.persist(&cards).await {
            cards.remove(&token);
            return Err(e);
        }
        Ok(token)
    }

    async fn find_by_card_number(&self, card_number: &str) -> Result<Option<(Token, CardRecord)>> {
        let cards = self.cards.read().await;
        Ok(cards
            .find_by_card_number(card_number)
            .map(|(token, record)| (token.clone(), record.clone())))
    }

    async fn get(&self, token: &Token) -> Result<Option<CardRecord>> {
        let cards = self.cards.read().await;
        Ok(cards.get(token).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.cards.read().await.len())
    }
}
