/*
[INPUT]:  KYC answers, phone verification data and session token
[OUTPUT]: KYC integration links, questionnaires and submission results
[POS]:    HTTP layer - KYC endpoints (require session token)
[UPDATE]: When the onboarding flow gains or loses steps
*/

// ### KYC Endpoints

use reqwest::Method;

use crate::http::{GnosisPayClient, GnosisPayError, Result};
use crate::types::{
    ApiGenericResponse, KycAnswer, KycImportPartnerApplicant, KycImportPartnerApplicantResponse,
    KycIntegration, KycPhoneVerification, KycPhoneVerificationCheck, KycQuestion,
};

impl GnosisPayClient {
    /// Get the hosted KYC flow for the current user
    ///
    /// GET /api/v1/kyc/integration
    pub async fn get_kyc_integration(&self) -> Result<KycIntegration> {
        let builder = self.request(Method::GET, "/api/v1/kyc/integration")?;
        self.send_json(builder).await
    }

    /// GET /api/v1/source-of-funds
    pub async fn list_source_of_funds(&self) -> Result<Vec<KycQuestion>> {
        let builder = self.request(Method::GET, "/api/v1/source-of-funds")?;
        self.send_json(builder).await
    }

    /// POST /api/v1/source-of-funds
    pub async fn submit_source_of_funds(&self, answers: &[KycAnswer]) -> Result<ApiGenericResponse> {
        let builder = self
            .request(Method::POST, "/api/v1/source-of-funds")?
            .json(answers);
        self.send_json(builder).await
    }

    /// Send a verification code to a phone number
    ///
    /// POST /api/v1/verification
    pub async fn start_phone_verification(&self, phone_number: &str) -> Result<ApiGenericResponse> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(GnosisPayError::Validation(
                "phone number cannot be empty".to_string(),
            ));
        }

        let body = KycPhoneVerification {
            phone_number: phone_number.to_string(),
        };
        let builder = self.request(Method::POST, "/api/v1/verification")?.json(&body);
        self.send_json(builder).await
    }

    /// POST /api/v1/verification/check
    pub async fn check_phone_verification(&self, code: &str) -> Result<ApiGenericResponse> {
        let body = KycPhoneVerificationCheck {
            code: code.trim().to_string(),
        };
        let builder = self
            .request(Method::POST, "/api/v1/verification/check")?
            .json(&body);
        self.send_json(builder).await
    }

    /// Reuse a KYC applicant from a partner application
    ///
    /// POST /api/v1/kyc/import-partner-applicant
    pub async fn import_partner_applicant(
        &self,
        request: &KycImportPartnerApplicant,
    ) -> Result<KycImportPartnerApplicantResponse> {
        let builder = self
            .request(Method::POST, "/api/v1/kyc/import-partner-applicant")?
            .json(request);
        self.send_json(builder).await
    }
}
