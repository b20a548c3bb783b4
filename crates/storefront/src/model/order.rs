//! Ledger records.

use super::{CartItem, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

super::string_id!(
    /// Identifier of a submitted order.
    OrderId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Status text shown to shoppers, in the storefront's Portuguese.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmado",
            OrderStatus::Processing => "Processando",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact, delivery address and payment details entered at checkout.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl ShippingInfo {
    /// Names of the fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("cardNumber", &self.card_number),
            ("expiryDate", &self.expiry_date),
            ("cvv", &self.cvv),
            ("cardName", &self.card_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Debug for ShippingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShippingInfo")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("zip_code", &self.zip_code)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(alias = "address")]
    pub shipping_info: ShippingInfo,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// DTO for submitting an order. Items and total are owned copies, so later
/// cart changes cannot reach them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub shipping_info: ShippingInfo,
}

/// Orders are immutable once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderUpdate {}

/// Ledger-wide figures for the admin panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub count: usize,
    pub total_revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ShippingInfo {
        ShippingInfo {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            card_number: "4111111111111111".into(),
            expiry_date: "12/30".into(),
            cvv: "123".into(),
            card_name: "ALICE".into(),
        }
    }

    #[test]
    fn test_missing_fields_reports_blanks_in_form_order() {
        assert!(complete_form().is_complete());

        let form = ShippingInfo {
            phone: "  ".into(),
            cvv: String::new(),
            ..complete_form()
        };
        assert_eq!(form.missing_fields(), vec!["phone", "cvv"]);
        assert_eq!(ShippingInfo::default().missing_fields().len(), 11);
    }

    #[test]
    fn test_debug_hides_payment_details() {
        let rendered = format!("{:?}", complete_form());
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("123\""));
    }

    #[test]
    fn test_status_wire_format_and_label() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Confirmed).unwrap(),
            "confirmed"
        );
        assert_eq!(OrderStatus::Shipped.label(), "Enviado");
        assert_eq!(OrderStatus::Confirmed.to_string(), "Confirmado");
    }

    #[test]
    fn test_legacy_address_key_is_accepted() {
        let json = serde_json::json!({
            "id": "1",
            "userId": "admin",
            "items": [],
            "total": "0",
            "date": "2024-01-01T00:00:00Z",
            "status": "confirmed",
            "address": serde_json::to_value(complete_form()).unwrap(),
        });
        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.shipping_info, complete_form());
        assert_eq!(order.item_count(), 0);
    }
}
