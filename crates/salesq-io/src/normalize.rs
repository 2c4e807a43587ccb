//! Lenient row → `Record` coercion.
//!
//! Rules:
//! - text: strings as-is, numbers rendered as text, anything else empty
//! - numbers: JSON numbers or numeric strings, anything else 0
//! - counts (age, quantity): rounded, clamped at 0
//! - tags: string entries of an array, or a comma-separated string;
//!   blank entries dropped, the rest trimmed

use serde_json::{Map, Value};

use salesq_core::record::Record;

/// One undecoded input row keyed by dataset column name.
pub type RawRow = Map<String, Value>;

/// Dataset keys in `Record` field order.
pub const COLUMNS: [&str; 26] = [
    "transactionId",
    "date",
    "customerId",
    "customerName",
    "phoneNumber",
    "gender",
    "age",
    "customerRegion",
    "customerType",
    "productId",
    "productName",
    "brand",
    "productCategory",
    "tags",
    "quantity",
    "pricePerUnit",
    "discountPercentage",
    "totalAmount",
    "finalAmount",
    "paymentMethod",
    "orderStatus",
    "deliveryType",
    "storeId",
    "storeLocation",
    "salespersonId",
    "employeeName",
];

/// Spreadsheet header → dataset key.
const DISPLAY_NAMES: [(&str, &str); 26] = [
    ("Transaction ID", "transactionId"),
    ("Date", "date"),
    ("Customer ID", "customerId"),
    ("Customer Name", "customerName"),
    ("Phone Number", "phoneNumber"),
    ("Gender", "gender"),
    ("Age", "age"),
    ("Customer Region", "customerRegion"),
    ("Customer Type", "customerType"),
    ("Product ID", "productId"),
    ("Product Name", "productName"),
    ("Brand", "brand"),
    ("Product Category", "productCategory"),
    ("Tags", "tags"),
    ("Quantity", "quantity"),
    ("Price per Unit", "pricePerUnit"),
    ("Discount Percentage", "discountPercentage"),
    ("Total Amount", "totalAmount"),
    ("Final Amount", "finalAmount"),
    ("Payment Method", "paymentMethod"),
    ("Order Status", "orderStatus"),
    ("Delivery Type", "deliveryType"),
    ("Store ID", "storeId"),
    ("Store Location", "storeLocation"),
    ("Salesperson ID", "salespersonId"),
    ("Employee Name", "employeeName"),
];

/// Map a column header to its dataset key. Unknown headers pass through.
pub fn canonical_key(header: &str) -> &str {
    let header = header.trim();
    DISPLAY_NAMES
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(header))
        .map(|(_, key)| *key)
        .unwrap_or(header)
}

pub fn normalize(row: &RawRow) -> Record {
    let text = |key: &str| row.get(key).map(coerce_text).unwrap_or_default();
    let number = |key: &str| row.get(key).map(coerce_number).unwrap_or(0.0);
    let count = |key: &str| row.get(key).map(coerce_count).unwrap_or(0);

    Record {
        transaction_id: text("transactionId"),
        date: text("date"),
        customer_id: text("customerId"),
        customer_name: text("customerName"),
        phone_number: text("phoneNumber"),
        gender: text("gender"),
        age: count("age"),
        customer_region: text("customerRegion"),
        customer_type: text("customerType"),
        product_id: text("productId"),
        product_name: text("productName"),
        brand: text("brand"),
        product_category: text("productCategory"),
        tags: row.get("tags").map(coerce_tags).unwrap_or_default(),
        quantity: count("quantity"),
        price_per_unit: number("pricePerUnit"),
        discount_percentage: number("discountPercentage"),
        total_amount: number("totalAmount"),
        final_amount: number("finalAmount"),
        payment_method: text("paymentMethod"),
        order_status: text("orderStatus"),
        delivery_type: text("deliveryType"),
        store_id: text("storeId"),
        store_location: text("storeLocation"),
        salesperson_id: text("salespersonId"),
        employee_name: text("employeeName"),
    }
}

fn coerce_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Integral floats lose their `.0` so `9876543210.0` reads as a phone number.
fn render_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn coerce_number(v: &Value) -> f64 {
    let f = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    f.filter(|f| f.is_finite()).unwrap_or(0.0)
}

fn coerce_count(v: &Value) -> u32 {
    let f = coerce_number(v);
    if f <= 0.0 {
        0
    } else {
        f.round().min(f64::from(u32::MAX)) as u32
    }
}

fn coerce_tags(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items
            .iter()
            .filter_map(|t| t.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> RawRow {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn numeric_phone_becomes_text() {
        let r = normalize(&row(json!({ "phoneNumber": 9876543210u64 })));
        assert_eq!(r.phone_number, "9876543210");

        let r = normalize(&row(json!({ "phoneNumber": 9876543210.0 })));
        assert_eq!(r.phone_number, "9876543210");
    }

    #[test]
    fn missing_fields_default() {
        let r = normalize(&RawRow::new());
        assert_eq!(r, Record::default());
        assert!(r.tags.is_empty());
    }

    #[test]
    fn malformed_tag_entries_are_dropped() {
        let r = normalize(&row(json!({ "tags": ["vip", "", "  ", 7, null, " gift "] })));
        assert_eq!(r.tags, vec!["vip", "gift"]);

        let r = normalize(&row(json!({ "tags": { "a": 1 } })));
        assert!(r.tags.is_empty());

        let r = normalize(&row(json!({ "tags": null })));
        assert!(r.tags.is_empty());
    }

    #[test]
    fn comma_separated_tags_are_split() {
        let r = normalize(&row(json!({ "tags": "organic, fragile,,gift" })));
        assert_eq!(r.tags, vec!["organic", "fragile", "gift"]);
    }

    #[test]
    fn numbers_from_strings_and_garbage() {
        let r = normalize(&row(json!({
            "age": "34",
            "quantity": -3,
            "totalAmount": "1200.50",
            "finalAmount": "n/a",
        })));
        assert_eq!(r.age, 34);
        assert_eq!(r.quantity, 0);
        assert_eq!(r.total_amount, 1200.5);
        assert_eq!(r.final_amount, 0.0);
    }

    #[test]
    fn display_headers_map_to_keys() {
        assert_eq!(canonical_key("Customer Name"), "customerName");
        assert_eq!(canonical_key(" price per unit "), "pricePerUnit");
        assert_eq!(canonical_key("customerName"), "customerName");
        assert_eq!(canonical_key("Loyalty Tier"), "Loyalty Tier");
    }
}
