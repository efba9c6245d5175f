use serde::{Deserialize, Serialize};

/// Lifecycle state of a PIN voucher. Transitions are server-driven; the
/// client only displays them and disables actions accordingly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PinStatus {
    Available,
    Used,
    Transferred,
}

impl PinStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PinStatus::Available => "available",
            PinStatus::Used => "used",
            PinStatus::Transferred => "transferred",
        }
    }

    /// A pin can seed a registration while it has not been consumed.
    pub fn is_usable(&self) -> bool {
        matches!(self, PinStatus::Available | PinStatus::Transferred)
    }
}

/// Single-use voucher gating registration, tied to a purchased package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    #[serde(rename = "_id")]
    pub id: String,
    pub pin_code: String,
    pub status: PinStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_date: Option<String>,
}

/// Payload of `GET /pin/pins/:userId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PinList {
    #[serde(default)]
    pub pins: Vec<Pin>,
}

/// Purchasable package backing PIN creation (`GET /packages/get/all`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub product_price: f64,
    pub direct_income: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePinRequest {
    pub user_id: String,
    pub package_id: String,
}

/// Transfer by pin code to a user resolved through mobile-number lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferPinRequest {
    pub pin: String,
    pub user_id: String,
}

/// Result of `GET /users/user/details?mobileNumber=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_status_parses_lowercase_wire_values() {
        let pin: Pin = serde_json::from_str(
            r#"{"_id":"p1","pinCode":"AB12","status":"transferred","validityDate":"2026-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(pin.status, PinStatus::Transferred);
        assert!(pin.status.is_usable());
        assert!(!PinStatus::Used.is_usable());
    }
}
