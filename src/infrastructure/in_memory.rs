use crate::domain::card::{CardRecord, CardTable};
use crate::domain::ports::CardStore;
use crate::domain::token::Token;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory card store.
///
/// Uses `Arc<RwLock<CardTable>>` so clones share the same cards. Nothing is
/// written to disk; registrations are lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryCardStore {
    cards: Arc<RwLock<CardTable>>,
}

impl InMemoryCardStore {
    /// Creates a new, empty in-memory card store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn register(&self, record: CardRecord) -> Result<Token> {
        let mut cards = self.cards.write().await;
        Ok(cards.register(record, &mut rand::thread_rng()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_card_store() {
        let store = InMemoryCardStore::new();
        let record = CardRecord::new("378282246310005");

        let token = store.register(record.clone()).await.unwrap();
        let retrieved = store.get(&token).await.unwrap().unwrap();
        assert_eq!(retrieved, record);

        let (found, _) = store
            .find_by_card_number("378282246310005")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, token);

        assert!(store.find_by_card_number("0").await.unwrap().is_none());
        assert!(store.get(&Token::from("tok_0")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_cards() {
        let store = InMemoryCardStore::new();
        let clone = store.clone();

        clone.register(CardRecord::new("371449635398431")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
