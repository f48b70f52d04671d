use crate::application::messages::{
    CARD_BRAND, CaptureResponse, CardSummary, ChargeApproval, ChargeRequest, ChargeStatus,
    ThreeDsResponse, ThreeDsStatus, TokenizeRequest, TokenizeResponse, is_missing,
};
use crate::domain::card::{CardRecord, last4, mask_card_number};
use crate::domain::ports::CardStoreBox;
use crate::error::{GatewayError, Result};
use rand::Rng;
use tracing::{info, warn};

/// The mock card network.
///
/// `CardGateway` owns the card store and implements each endpoint as a plain
/// async method. None of the operations keep state between calls beyond
/// what they write to the store.
pub struct CardGateway {
    store: CardStoreBox,
}

impl CardGateway {
    /// Creates a new `CardGateway` backed by `store`.
    pub fn new(store: CardStoreBox) -> Self {
        Self { store }
    }

    /// Registers the submitted card and returns its token.
    pub async fn tokenize(&self, request: TokenizeRequest) -> Result<TokenizeResponse> {
        let card_number = match request.card_number {
            Some(number) if !number.is_empty() => number,
            _ => return Err(GatewayError::MissingField("Card number missing".to_string())),
        };

        let masked = mask_card_number(&card_number);
        let record = CardRecord {
            card_number,
            exp_month: request.exp_month,
            exp_year: request.exp_year,
            cvv: request.cvv,
            name: request.name,
            address: request.address,
        };

        let token = self.store.register(record).await?;
        info!(card = %masked, %token, "tokenized card");

        Ok(TokenizeResponse {
            token: token.to_string(),
        })
    }

    /// Approves the charge when the card number has been tokenized before.
    ///
    /// Only the card number is looked up; expiry and CVV are echoed back but
    /// never compared against the stored record.
    pub async fn charge(&self, request: ChargeRequest) -> Result<ChargeApproval> {
        let missing_details = || GatewayError::MissingField("Missing card details".to_string());

        let card_number = request
            .card_number
            .filter(|number| !number.is_empty())
            .ok_or_else(missing_details)?;
        if is_missing(&request.exp_month) || is_missing(&request.exp_year) || is_missing(&request.cvv) {
            return Err(missing_details());
        }
        let (Some(exp_month), Some(exp_year)) = (request.exp_month, request.exp_year) else {
            return Err(missing_details());
        };

        let Some((token, _)) = self.store.find_by_card_number(&card_number).await? else {
            warn!(card = %mask_card_number(&card_number), "charge declined, card not found");
            return Err(GatewayError::CardNotFound);
        };

        let authorization_code = authorization_code(&mut rand::thread_rng());
        info!(%token, %authorization_code, "charge approved");

        Ok(ChargeApproval {
            status: ChargeStatus::Approved,
            authorization_code,
            card: CardSummary {
                brand: CARD_BRAND.to_string(),
                last4: last4(&card_number),
                exp_month,
                exp_year,
            },
        })
    }

    pub fn three_ds_challenge(&self) -> ThreeDsResponse {
        ThreeDsResponse {
            status: ThreeDsStatus::Authenticated,
        }
    }

    pub fn three_ds_fail(&self) -> ThreeDsResponse {
        ThreeDsResponse {
            status: ThreeDsStatus::Failed,
        }
    }

    pub fn capture(&self, method: &str, path: &str) -> CaptureResponse {
        warn!(%method, %path, "captured request to unknown path");
        CaptureResponse::captured()
    }
}

/// Six random digits, 100000 through 999999.
fn authorization_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(100_000..=999_999u32).to_string()
}
