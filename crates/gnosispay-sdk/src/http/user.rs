/*
[INPUT]:  Session token
[OUTPUT]: User profile and referral data
[POS]:    HTTP layer - user endpoints (require session token)
[UPDATE]: When adding new user endpoints
*/

// ### User Endpoints

use reqwest::Method;

use crate::http::{GnosisPayClient, Result};
use crate::types::{User, UserReferralCode, UserReferrals};

impl GnosisPayClient {
    /// Get the authenticated user's profile
    ///
    /// GET /api/v1/user
    pub async fn get_user(&self) -> Result<User> {
        let builder = self.request(Method::GET, "/api/v1/user")?;
        self.send_json(builder).await
    }

    /// GET /api/v1/user/referrals
    pub async fn get_user_referrals(&self) -> Result<UserReferrals> {
        let builder = self.request(Method::GET, "/api/v1/user/referrals")?;
        self.send_json(builder).await
    }

    /// Create (or fetch) the user's referrer code
    ///
    /// POST /api/v1/user/referrer-code
    pub async fn create_referral_code(&self) -> Result<UserReferralCode> {
        let builder = self.request(Method::POST, "/api/v1/user/referrer-code")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::{ClientConfig, GnosisPayClient};
    use crate::types::KycStatus;

    fn client_for(server: &MockServer) -> GnosisPayClient {
        GnosisPayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .unwrap()
            .with_auth_token("session")
    }

    #[tokio::test]
    async fn test_get_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user"))
            .and(header("authorization", "Bearer session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "email": "alice@example.com",
                "firstName": "Alice",
                "kycStatus": "pending",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).get_user().await.unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Alice"));
        assert_eq!(user.kyc_status, Some(KycStatus::Pending));
    }

    #[tokio::test]
    async fn test_referrals_and_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user/referrals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "isOgTokenHolder": true,
                "pendingReferrals": 2,
                "completedReferrals": 5,
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/user/referrer-code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "user-1",
                "referrerCode": "GNO123",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let referrals = client.get_user_referrals().await.unwrap();
        assert!(referrals.is_og_token_holder);
        assert_eq!(referrals.completed_referrals, 5);

        let code = client.create_referral_code().await.unwrap();
        assert_eq!(code.referrer_code, "GNO123");
    }
}
