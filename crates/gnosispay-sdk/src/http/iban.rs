/*
[INPUT]:  Session token
[OUTPUT]: IBAN availability, details and transfer orders
[POS]:    HTTP layer - IBAN endpoints (require session token)
[UPDATE]: When IBAN provider endpoints change
*/

// ### IBAN Endpoints

use reqwest::Method;

use crate::http::{GnosisPayClient, Result};
use crate::types::{DataEnvelope, IbanDetails, IbanOrder};

impl GnosisPayClient {
    /// Whether an IBAN can be issued for the current user
    ///
    /// GET /api/v1/ibans/available. Any 2xx means available; error statuses
    /// surface as errors rather than `false`.
    pub async fn check_iban_availability(&self) -> Result<bool> {
        let builder = self.request(Method::GET, "/api/v1/ibans/available")?;
        self.send_empty(builder).await?;
        Ok(true)
    }

    /// Create the Monerium profile backing the user's IBAN
    ///
    /// POST /api/v1/ibans/monerium-profile
    pub async fn activate_iban(&self) -> Result<()> {
        let builder = self.request(Method::POST, "/api/v1/ibans/monerium-profile")?;
        self.send_empty(builder).await
    }

    /// GET /api/v1/ibans/details
    pub async fn get_iban_details(&self) -> Result<IbanDetails> {
        let builder = self.request(Method::GET, "/api/v1/ibans/details")?;
        let envelope: DataEnvelope<IbanDetails> = self.send_json(builder).await?;
        Ok(envelope.data)
    }

    /// GET /api/v1/ibans/orders
    pub async fn list_iban_orders(&self) -> Result<Vec<IbanOrder>> {
        let builder = self.request(Method::GET, "/api/v1/ibans/orders")?;
        let envelope: DataEnvelope<Vec<IbanOrder>> = self.send_json(builder).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::{ClientConfig, GnosisPayClient};

    fn client_for(server: &MockServer) -> GnosisPayClient {
        GnosisPayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .unwrap()
            .with_auth_token("session")
    }

    #[tokio::test]
    async fn test_iban_availability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ibans/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        assert!(client_for(&server).check_iban_availability().await.unwrap());
    }

    #[tokio::test]
    async fn test_iban_availability_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ibans/available"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "not eligible",
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).check_iban_availability().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_activate_iban() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/ibans/monerium-profile"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        tokio_test::assert_ok!(client_for(&server).activate_iban().await);
    }

    #[tokio::test]
    async fn test_iban_details_and_orders_unwrap_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ibans/details"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"iban": "DE89370400440532013000", "bic": "COBADEFFXXX", "ibanStatus": "ASSIGNED"},
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ibans/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "order-1",
                    "kind": "redeem",
                    "currency": "eur",
                    "amount": "42.10",
                    "address": "0x0000000000000000000000000000000000000001",
                    "counterpart": {
                        "details": {"name": "Bob"},
                        "identifier": {"standard": "iban", "iban": "FR7630006000011234567890189"},
                    },
                    "state": "processed",
                    "meta": {"placedAt": "2024-03-01T10:00:00Z"},
                }],
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let details = client.get_iban_details().await.unwrap();
        assert_eq!(details.bic.as_deref(), Some("COBADEFFXXX"));

        let orders = client.list_iban_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].amount, Decimal::new(4210, 2));
        let counterpart = orders[0].counterpart.as_ref().unwrap();
        assert_eq!(counterpart.details.name.as_deref(), Some("Bob"));
    }
}
