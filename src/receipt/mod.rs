/// Receipt payload
///
/// Typed form of the provider's v4 sell document. Field names and nesting
/// follow the wire format exactly; serde does the rest.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Wire format of the document timestamp.
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellRequest {
    /// Caller-supplied idempotency key; the provider deduplicates on it.
    pub external_id: String,
    pub receipt: Receipt,
    pub service: ServiceInfo,
    pub timestamp: String,
}

impl SellRequest {
    /// Stamp a receipt with the current local time.
    pub fn new(external_id: String, receipt: Receipt, service: ServiceInfo) -> Self {
        Self {
            external_id,
            receipt,
            service,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub client: ClientInfo,
    pub company: Company,
    pub items: Vec<Item>,
    pub payments: Vec<Payment>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub email: String,
    pub inn: String,
    pub payment_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub sum: f64,
    pub measurement_unit: String,
    pub payment_method: String,
    pub payment_object: String,
    pub vat: Vat,
}

impl Item {
    /// Line item with `sum` derived from price and quantity.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: f64,
        measurement_unit: impl Into<String>,
        payment_method: impl Into<String>,
        payment_object: impl Into<String>,
        vat: Vat,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            sum: price * quantity,
            measurement_unit: measurement_unit.into(),
            payment_method: payment_method.into(),
            payment_object: payment_object.into(),
            vat,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Vat {
    pub fn none() -> Self {
        Self { kind: "none".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Provider payment type code (1 = electronic).
    #[serde(rename = "type")]
    pub kind: u8,
    pub sum: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub callback_url: String,
}
