//! Request and response bodies of the gateway operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CARD_BRAND: &str = "American Express";
pub const CAPTURED_MESSAGE: &str = "Request captured successfully.";

/// Field is absent or falsy: `null`, `false`, zero, or an empty string,
/// array or object.
pub(crate) fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(fields)) => fields.is_empty(),
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct TokenizeRequest {
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub exp_month: Option<Value>,
    #[serde(default)]
    pub exp_year: Option<Value>,
    #[serde(default)]
    pub cvv: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TokenizeResponse {
    pub token: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ChargeRequest {
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub exp_month: Option<Value>,
    #[serde(default)]
    pub exp_year: Option<Value>,
    #[serde(default)]
    pub cvv: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Approved,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CardSummary {
    pub brand: String,
    pub last4: String,
    pub exp_month: Value,
    pub exp_year: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ChargeApproval {
    pub status: ChargeStatus,
    pub authorization_code: String,
    pub card: CardSummary,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ThreeDsStatus {
    Authenticated,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct ThreeDsResponse {
    #[serde(rename = "3ds_status")]
    pub status: ThreeDsStatus,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CaptureResponse {
    pub status: String,
    pub message: String,
}

impl CaptureResponse {
    pub fn captured() -> Self {
        Self {
            status: "ok".to_string(),
            message: CAPTURED_MESSAGE.to_string(),
        }
    }
}
