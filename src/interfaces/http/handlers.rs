//! Axum handlers and router for the gateway endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/tokenize` | Register a card and return its token |
//! | `POST` | `/charge` | Approve or decline a charge by card number |
//! | `POST` | `/3ds-challenge` | Always authenticates |
//! | `POST` | `/3ds-fail` | Always fails |
//! | any | anything else | Captured and acknowledged with `200` |

use crate::application::gateway::CardGateway;
use crate::application::messages::{
    CaptureResponse, ChargeApproval, ChargeRequest, ThreeDsResponse, TokenizeRequest,
    TokenizeResponse,
};
use crate::domain::card::mask_card_number;
use crate::error::{GatewayError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::post;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub type SharedGateway = Arc<CardGateway>;

/// Builds the router. Known paths reached with a method other than `POST`
/// fall through to the capture handler like any unknown path.
pub fn routes(gateway: SharedGateway) -> Router {
    Router::new()
        .route("/tokenize", post(tokenize).fallback(capture))
        .route("/charge", post(charge).fallback(capture))
        .route("/3ds-challenge", post(three_ds_challenge).fallback(capture))
        .route("/3ds-fail", post(three_ds_fail).fallback(capture))
        .fallback(capture)
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Decodes a JSON object body. Arrays and scalars are rejected even when
/// they would line up with the struct fields by position.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    let malformed = |e: serde_json::Error| GatewayError::MalformedBody(e.to_string());
    match serde_json::from_slice::<Value>(body).map_err(malformed)? {
        object @ Value::Object(_) => serde_json::from_value(object).map_err(malformed),
        _ => Err(GatewayError::MalformedBody(
            "expected a JSON object".to_string(),
        )),
    }
}

async fn tokenize(
    State(gateway): State<SharedGateway>,
    body: Bytes,
) -> Result<Json<TokenizeResponse>> {
    let request: TokenizeRequest = parse_body(&body)?;
    debug!(
        card = ?request.card_number.as_deref().map(mask_card_number),
        "incoming tokenize request"
    );
    gateway.tokenize(request).await.map(Json)
}

async fn charge(
    State(gateway): State<SharedGateway>,
    body: Bytes,
) -> Result<Json<ChargeApproval>> {
    let request: ChargeRequest = parse_body(&body)?;
    debug!(
        card = ?request.card_number.as_deref().map(mask_card_number),
        "incoming charge request"
    );
    gateway.charge(request).await.map(Json)
}

async fn three_ds_challenge(
    State(gateway): State<SharedGateway>,
    body: Bytes,
) -> Json<ThreeDsResponse> {
    debug!(body = %String::from_utf8_lossy(&body), "incoming 3DS challenge");
    Json(gateway.three_ds_challenge())
}

async fn three_ds_fail(
    State(gateway): State<SharedGateway>,
    body: Bytes,
) -> Json<ThreeDsResponse> {
    debug!(body = %String::from_utf8_lossy(&body), "incoming 3DS fail simulation");
    Json(gateway.three_ds_fail())
}

async fn capture(
    State(gateway): State<SharedGateway>,
    method: Method,
    uri: Uri,
) -> Json<CaptureResponse> {
    Json(gateway.capture(method.as_str(), uri.path()))
}
