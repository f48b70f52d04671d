//! Domain layer: card records, tokens and the store port.

pub mod card;
pub mod ports;
pub mod token;
