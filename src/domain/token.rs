use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const TOKEN_PREFIX: &str = "tok_";

/// Opaque identifier handed out in place of a card number.
///
/// Tokens look like `tok_12345678`: the prefix keeps them from ever being
/// mistaken for a card number, the eight digits come from the thread RNG.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Draws a fresh token. Uniqueness against existing tokens is the
    /// caller's job, see [`CardTable::register`](super::card::CardTable::register).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let digits: u32 = rng.gen_range(10_000_000..=99_999_999);
        Self(format!("{TOKEN_PREFIX}{digits}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
