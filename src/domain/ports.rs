use super::card::CardRecord;
use super::token::Token;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CardStore: Send + Sync {
    /// Registers a card under a freshly generated token and makes it durable.
    async fn register(&self, record: CardRecord) -> Result<Token>;
    /// First registration, in insertion order, whose card number matches exactly.
    async fn find_by_card_number(&self, card_number: &str) -> Result<Option<(Token, CardRecord)>>;
    async fn get(&self, token: &Token) -> Result<Option<CardRecord>>;
    async fn count(&self) -> Result<usize>;
}

pub type CardStoreBox = Box<dyn CardStore>;
pub type CardStoreFactory = Box<dyn Fn() -> CardStoreBox + Send + Sync>;
