//! The sales record: one transaction, fully typed.
//!
//! Values are produced by the normalization step in `salesq-io`; nothing in
//! the pipeline has to cope with missing or loosely-typed fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub transaction_id: String,
    /// ISO-8601 date (`YYYY-MM-DD`); string order is chronological order.
    pub date: String,
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: String,
    pub age: u32,
    pub customer_region: String,
    pub customer_type: String,
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub product_category: String,
    pub tags: Vec<String>,
    pub quantity: u32,
    pub price_per_unit: f64,
    pub discount_percentage: f64,
    pub total_amount: f64,
    pub final_amount: f64,
    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,
    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

impl Record {
    /// Gross minus net. Not clamped: `final_amount <= total_amount` is
    /// assumed, not enforced.
    pub fn discount(&self) -> f64 {
        self.total_amount - self.final_amount
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
