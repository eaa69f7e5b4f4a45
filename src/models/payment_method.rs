//! Saved payment method.

use crate::default_set::DefaultFlagged;
use crate::domain::{DialCode, ItemId};
use serde::{Deserialize, Serialize};

/// What kind of instrument a payment method is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentDetails {
    #[serde(rename_all = "camelCase")]
    Card {
        brand: String,
        last4: String,
        expiry_month: u8,
        expiry_year: u16,
    },

    /// M-Pesa, Airtel Money and the like. The phone is required.
    #[serde(rename_all = "camelCase")]
    MobileMoney {
        provider: String,
        dial_code: DialCode,
        phone: String,
    },
}

impl PaymentDetails {
    /// Short label for lists, e.g. "Visa •••• 4242" or "M-Pesa +254 712 345 678".
    pub fn label(&self) -> String {
        match self {
            Self::Card { brand, last4, .. } => format!("{} •••• {}", brand, last4),
            Self::MobileMoney {
                provider, phone, ..
            } => format!("{} {}", provider, phone),
        }
    }
}

/// A payment method on the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: ItemId,

    pub holder_name: String,

    pub details: PaymentDetails,

    #[serde(default)]
    pub is_default: bool,
}

impl DefaultFlagged for PaymentMethod {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_wire_format() {
        let json = r#"{
            "id": "pm_1",
            "holderName": "Amina Odhiambo",
            "details": {"type": "card", "brand": "Visa", "last4": "4242", "expiryMonth": 8, "expiryYear": 2027},
            "isDefault": true
        }"#;

        let method: PaymentMethod = serde_json::from_str(json).unwrap();
        assert!(method.is_default);
        assert_eq!(method.details.label(), "Visa •••• 4242");
    }

    #[test]
    fn test_mobile_money_wire_format() {
        let method = PaymentMethod {
            id: ItemId::new("pm_2").unwrap(),
            holder_name: "Baraka".to_string(),
            details: PaymentDetails::MobileMoney {
                provider: "M-Pesa".to_string(),
                dial_code: DialCode::new("254").unwrap(),
                phone: "+254 712 345 678".to_string(),
            },
            is_default: false,
        };

        let value = serde_json::to_value(&method).unwrap();
        assert_eq!(value["details"]["type"], "mobileMoney");
        assert_eq!(value["details"]["dialCode"], "+254");
        assert_eq!(value["isDefault"], false);

        let back: PaymentMethod = serde_json::from_value(value).unwrap();
        assert_eq!(back, method);
    }
}
