use serde::{Deserialize, Serialize};

/// Profile aggregate as served by `GET /update/user/:id`.
///
/// Fetched fresh on every page that needs it; the client keeps no cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAggregate {
    #[serde(default)]
    pub user_details: UserDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_details: Option<AddressDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

impl ProfileAggregate {
    pub fn is_admin(&self) -> bool {
        self.user_details.user_type.as_deref() == Some("Admin")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub husband_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub ifsc_code: String,
}

/// Body for `PUT /update/user/:id` (profile + address).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub father_name: String,
    pub husband_name: String,
    pub address: AddressDetails,
}

/// Body for `PUT /update/user/:id/bank-details`. The confirmation field is a
/// UI-only guard and never leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBankDetailsRequest {
    pub account_number: String,
    pub account_holder_name: String,
    pub branch_name: String,
    pub ifsc_code: String,
}

/// Earnings breakdown from `GET /update/user/wallet/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(default)]
    pub direct_referral_income: f64,
    #[serde(default)]
    pub indirect_referral_income: f64,
}

impl EarningsSummary {
    pub fn total(&self) -> f64 {
        self.direct_referral_income + self.indirect_referral_income
    }
}
