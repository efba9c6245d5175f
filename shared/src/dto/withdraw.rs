use serde::{Deserialize, Serialize};

/// Status of a withdrawal request; transitions are exclusively server-driven.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Denied,
}

impl WithdrawalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Denied => "denied",
        }
    }
}

/// A user-initiated claim against accumulated commission earnings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: RequestingUser,
    pub amount_requested: f64,
    pub deduction_amount: f64,
    pub net_amount: f64,
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestingUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u32,
    pub page: u32,
    pub pages: u32,
    pub limit: u32,
}

/// Payload of `GET /withdraw/withdrawal/requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequestPage {
    #[serde(default)]
    pub withdrawal_requests: Vec<WithdrawalRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Body for `POST /withdraw/withdrawal`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWithdrawalRequest {
    pub user_id: String,
    pub amount_requested: f64,
}

/// Body for `POST /withdraw/withdrawal/approve-or-deny`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithdrawalRequest {
    pub withdrawal_request_id: String,
    pub status: WithdrawalStatus,
}
