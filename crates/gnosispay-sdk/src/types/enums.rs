/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KycStatus {
    NotStarted,
    DocumentsRequested,
    Pending,
    Processing,
    Approved,
    ResubmissionRequested,
    Rejected,
    RequiresAction,
    #[serde(other)]
    Unknown,
}

impl KycStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, KycStatus::Approved)
    }
}
