/*
[INPUT]:  Card identifiers, transaction filters and session token
[OUTPUT]: Card listings, status, state changes and card events
[POS]:    HTTP layer - card endpoints (require session token)
[UPDATE]: When adding card actions or transaction filters
*/

// ### Card Endpoints

use reqwest::Method;
use url::form_urlencoded;

use crate::http::client::path_segment;
use crate::http::{GnosisPayClient, Result};
use crate::types::{Card, CardEvent, CardStatus, TransactionFilters};

const TRANSACTIONS_ENDPOINT: &str = "/api/v1/transactions";

impl GnosisPayClient {
    /// List the user's cards
    ///
    /// GET /api/v1/cards
    pub async fn list_cards(&self) -> Result<Vec<Card>> {
        let builder = self.request(Method::GET, "/api/v1/cards")?;
        self.send_json(builder).await
    }

    /// GET /api/v1/cards/{card_id}/status
    pub async fn get_card_status(&self, card_id: &str) -> Result<CardStatus> {
        let card_id = path_segment("card id", card_id)?;

        let builder =
            self.request_segments(Method::GET, &["api", "v1", "cards", card_id, "status"])?;
        self.send_json(builder).await
    }

    /// POST /api/v1/cards/{card_id}/activate
    pub async fn activate_card(&self, card_id: &str) -> Result<()> {
        self.card_action(card_id, "activate").await
    }

    /// POST /api/v1/cards/{card_id}/freeze
    pub async fn freeze_card(&self, card_id: &str) -> Result<()> {
        self.card_action(card_id, "freeze").await
    }

    /// POST /api/v1/cards/{card_id}/unfreeze
    pub async fn unfreeze_card(&self, card_id: &str) -> Result<()> {
        self.card_action(card_id, "unfreeze").await
    }

    /// POST /api/v1/cards/{card_id}/lost
    pub async fn report_lost_card(&self, card_id: &str) -> Result<()> {
        self.card_action(card_id, "lost").await
    }

    /// POST /api/v1/cards/{card_id}/stolen
    pub async fn report_stolen_card(&self, card_id: &str) -> Result<()> {
        self.card_action(card_id, "stolen").await
    }

    /// List card events, optionally filtered
    ///
    /// GET /api/v1/transactions?cardTokens=..&before=..&after=..
    pub async fn list_transactions(&self, filters: &TransactionFilters) -> Result<Vec<CardEvent>> {
        let pairs = filters.query_pairs();
        let endpoint = if pairs.is_empty() {
            TRANSACTIONS_ENDPOINT.to_string()
        } else {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            format!("{TRANSACTIONS_ENDPOINT}?{query}")
        };

        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    async fn card_action(&self, card_id: &str, action: &str) -> Result<()> {
        let card_id = path_segment("card id", card_id)?;

        let builder =
            self.request_segments(Method::POST, &["api", "v1", "cards", card_id, action])?;
        self.send_empty(builder).await
    }
}
