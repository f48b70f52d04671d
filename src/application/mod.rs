//! Application layer containing the gateway operations.
//!
//! This module defines the `CardGateway`, which turns decoded requests into
//! card store calls and builds the canned responses of the mock network.

pub mod gateway;
pub mod messages;
