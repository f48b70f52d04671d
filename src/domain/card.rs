use super::token::Token;
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tokenized card as it is kept in the store.
///
/// Everything except the card number is kept exactly as the client sent it,
/// including the CVV. This is a mock; nothing here is meant to be secure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CardRecord {
    pub card_number: String,
    pub exp_month: Option<Value>,
    pub exp_year: Option<Value>,
    pub cvv: Option<Value>,
    pub name: Option<Value>,
    pub address: Option<Value>,
}

impl CardRecord {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            exp_month: None,
            exp_year: None,
            cvv: None,
            name: None,
            address: None,
        }
    }
}

/// Last four characters of a card number, or the whole number when shorter.
pub fn last4(card_number: &str) -> String {
    let len = card_number.chars().count();
    card_number.chars().skip(len.saturating_sub(4)).collect()
}

/// Card number safe for log lines.
pub fn mask_card_number(card_number: &str) -> String {
    format!("****{}", last4(card_number))
}

/// Token to record mapping in insertion order.
///
/// Insertion order matters: card numbers are not unique, and lookups return
/// the earliest registration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardTable {
    cards: IndexMap<Token, CardRecord>,
}

impl CardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, token: &Token) -> Option<&CardRecord> {
        self.cards.get(token)
    }

    pub fn find_by_card_number(&self, card_number: &str) -> Option<(&Token, &CardRecord)> {
        self.cards
            .iter()
            .find(|(_, record)| record.card_number == card_number)
    }

    /// Inserts `record` under a token not yet present in the table.
    pub fn register<R: Rng + ?Sized>(&mut self, record: CardRecord, rng: &mut R) -> Token {
        let mut token = Token::generate(rng);
        while self.cards.contains_key(&token) {
            token = Token::generate(rng);
        }
        self.cards.insert(token.clone(), record);
        token
    }

    /// Removes a registration, keeping the order of the remaining cards.
    pub fn remove(&mut self, token: &Token) -> Option<CardRecord> {
        self.cards.shift_remove(token)
    }
}
