//! Order DTOs for the checkout API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two crates. `Order` ignores
//! fields it does not know so richer server payloads still decode.

use serde::{Deserialize, Serialize};

/// An order as returned by the create and process endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// HATEOAS link attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Request payload for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderParams {
    /// `CAPTURE` or `AUTHORIZE`, passed through untouched.
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_units: Option<Vec<PurchaseUnit>>,
    /// Free-form context forwarded to the API; its keys are snake_cased on send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseUnit {
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
}

/// Identifies the order to process and the action to take on it.
///
/// Both fields become URL path segments verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessOrderParams {
    pub order_id: String,
    pub intent: String,
}

/// One order call, built once and consumed by [`crate::MerchantApi::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateOrder { params: CreateOrderParams },
    ProcessOrder(ProcessOrderParams),
}

impl CreateOrderParams {
    /// Single purchase unit for `value` in `currency_code`.
    pub fn single(intent: &str, currency_code: &str, value: &str) -> Self {
        Self {
            intent: intent.to_string(),
            purchase_units: Some(vec![PurchaseUnit {
                amount: Amount {
                    currency_code: currency_code.to_string(),
                    value: value.to_string(),
                },
            }]),
            application_context: None,
        }
    }
}

impl ProcessOrderParams {
    pub fn new(order_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            intent: intent.into(),
        }
    }
}
