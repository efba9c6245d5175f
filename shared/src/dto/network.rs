use serde::{Deserialize, Serialize};

/// One member of a referral-tree level, as returned by
/// `GET /update/user/:referralCode/users`. The server delivers one level at a
/// time; deeper levels are fetched lazily on expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralUser {
    pub name: String,
    pub referral_code: String,
}
