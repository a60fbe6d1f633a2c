use serde::Serialize;
use serde_json::{Map, Value};

use invoicegen_core::{ValidationError, ValidationResult, is_truthy, non_empty_str, number_like};

use crate::contact::Contact;
use crate::words::rupees_in_words;

/// One billable row on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    /// Unit rate in rupees.
    pub rate: f64,
    /// Tax as sent by the client. Validated, but not part of any total.
    pub tax: f64,
}

impl LineItem {
    /// Line amount (`quantity × rate`).
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }

    fn from_json(index: usize, value: &Value) -> ValidationResult<Self> {
        let Value::Object(map) = value else {
            return Err(ValidationError::invalid_item(index, "item"));
        };

        let description = map
            .get("item_desc")
            .and_then(non_empty_str)
            .ok_or_else(|| ValidationError::invalid_item(index, "item_desc"))?;

        let quantity = non_negative(map, "qty", index)?;
        let rate = non_negative(map, "rate_item", index)?;
        let tax = map
            .get("tax")
            .and_then(number_like)
            .ok_or_else(|| ValidationError::invalid_item(index, "tax"))?;

        Ok(Self {
            description: description.to_string(),
            quantity,
            rate,
            tax,
        })
    }
}

fn non_negative(map: &Map<String, Value>, field: &'static str, index: usize) -> ValidationResult<f64> {
    map.get(field)
        .and_then(number_like)
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| ValidationError::invalid_item(index, field))
}

/// A validated invoice request.
///
/// Exists for the duration of one HTTP request; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRequest {
    pub invoice_num: String,
    pub bill_to: Contact,
    pub ship_to: Contact,
    pub gst_num: String,
    pub items: Vec<LineItem>,
}

impl InvoiceRequest {
    /// Validate a raw JSON payload.
    ///
    /// Top-level fields are checked before any item, so a payload that is
    /// wrong in both places reports `MissingFields`. Items are checked in
    /// order and the first failure wins.
    pub fn from_json(body: &Value) -> ValidationResult<Self> {
        let Value::Object(map) = body else {
            return Err(ValidationError::missing("body"));
        };

        let invoice_num = required_label(map, "invoice_num")?;
        let bill_to = required_contact(map, "bill_to")?;
        let ship_to = required_contact(map, "ship_to")?;
        let gst_num = required_label(map, "gst_num")?;

        let Some(Value::Array(raw_items)) = map.get("items") else {
            return Err(ValidationError::missing("items"));
        };

        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, item)| LineItem::from_json(index, item))
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(Self {
            invoice_num,
            bill_to,
            ship_to,
            gst_num,
            items,
        })
    }

    /// Sum of `quantity × rate` over all items. Tax is not included.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }

    /// Total formatted for the "Amount Payable" row.
    pub fn amount_payable(&self) -> String {
        format!("{:.2}", self.total_amount())
    }

    /// Total spelled out for the "In Words" row.
    pub fn amount_in_words(&self) -> String {
        rupees_in_words(self.total_amount())
    }

    /// Download filename: `invoice_<invoice_num>.pdf`.
    ///
    /// The invoice number is kept as sent; only characters that cannot appear
    /// in a header value (controls and non-ASCII) are replaced with `_`.
    pub fn attachment_filename(&self) -> String {
        let safe: String = self
            .invoice_num
            .chars()
            .map(|c| if c == ' ' || c.is_ascii_graphic() { c } else { '_' })
            .collect();
        format!("invoice_{safe}.pdf")
    }
}

// Invoice and GST numbers are labels; numeric input is kept verbatim.
fn required_label(map: &Map<String, Value>, field: &'static str) -> ValidationResult<String> {
    match map.get(field).filter(|v| is_truthy(v)) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ValidationError::missing(field)),
    }
}

fn required_contact(map: &Map<String, Value>, field: &'static str) -> ValidationResult<Contact> {
    map.get(field)
        .filter(|v| is_truthy(v))
        .and_then(Contact::from_json)
        .ok_or_else(|| ValidationError::missing(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "invoice_num": "INV-001",
            "bill_to": "Acme Traders",
            "ship_to": "Acme Warehouse",
            "gst_num": "29ABCDE1234F1Z5",
            "items": [
                {"item_desc": "Widget", "qty": 2, "rate_item": 100, "tax": 18}
            ]
        })
    }

    #[test]
    fn valid_request_parses_and_totals_exclude_tax() {
        let req = InvoiceRequest::from_json(&valid_body()).unwrap();
        assert_eq!(req.invoice_num, "INV-001");
        assert_eq!(req.bill_to, Contact::Label("Acme Traders".to_string()));
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].tax, 18.0);
        assert_eq!(req.total_amount(), 200.0);
        assert_eq!(req.amount_payable(), "200.00");
        assert_eq!(req.amount_in_words(), "Two Hundred Rupees Only");
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let mut body = valid_body();
        body["items"] = json!([
            {"item_desc": "Bolt", "qty": "3", "rate_item": "12.5", "tax": "0"},
            {"item_desc": "Nut", "qty": 4, "rate_item": " 2 ", "tax": 5}
        ]);
        let req = InvoiceRequest::from_json(&body).unwrap();
        assert_eq!(req.total_amount(), 45.5);
        assert_eq!(req.amount_payable(), "45.50");
        assert_eq!(req.amount_in_words(), "Forty Five Rupees Only");
    }

    #[test]
    fn empty_item_list_is_a_zero_invoice() {
        let mut body = valid_body();
        body["items"] = json!([]);
        let req = InvoiceRequest::from_json(&body).unwrap();
        assert_eq!(req.total_amount(), 0.0);
        assert_eq!(req.amount_in_words(), "Zero Rupees Only");
    }

    #[test]
    fn missing_gst_num_is_rejected() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("gst_num");
        let err = InvoiceRequest::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::missing("gst_num"));
        assert_eq!(err.to_string(), "Missing or invalid required fields");
    }

    #[test]
    fn falsy_top_level_fields_are_rejected() {
        for (field, bad) in [
            ("invoice_num", json!("")),
            ("invoice_num", json!(0)),
            ("bill_to", json!(null)),
            ("ship_to", json!(false)),
            ("gst_num", json!("")),
        ] {
            let mut body = valid_body();
            body[field] = bad;
            let err = InvoiceRequest::from_json(&body).unwrap_err();
            assert_eq!(err, ValidationError::missing(field));
        }
    }

    #[test]
    fn items_must_be_an_array() {
        let mut body = valid_body();
        body["items"] = json!({"item_desc": "Widget"});
        assert_eq!(
            InvoiceRequest::from_json(&body).unwrap_err(),
            ValidationError::missing("items")
        );
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert_eq!(
            InvoiceRequest::from_json(&json!([1, 2])).unwrap_err(),
            ValidationError::missing("body")
        );
    }

    #[test]
    fn non_numeric_qty_is_an_item_error() {
        let mut body = valid_body();
        body["items"][0]["qty"] = json!("two");
        let err = InvoiceRequest::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::invalid_item(0, "qty"));
        assert_eq!(err.to_string(), "Invalid item data: ensure all fields are correct");
    }

    #[test]
    fn item_errors_report_the_first_bad_item() {
        let mut body = valid_body();
        body["items"] = json!([
            {"item_desc": "Widget", "qty": 1, "rate_item": 1, "tax": 0},
            {"item_desc": "", "qty": 1, "rate_item": 1, "tax": 0},
            {"item_desc": "Gadget", "qty": "x", "rate_item": 1, "tax": 0}
        ]);
        assert_eq!(
            InvoiceRequest::from_json(&body).unwrap_err(),
            ValidationError::invalid_item(1, "item_desc")
        );
    }

    #[test]
    fn negative_quantity_or_rate_is_rejected_but_negative_tax_is_not() {
        let mut body = valid_body();
        body["items"][0]["rate_item"] = json!(-1);
        assert_eq!(
            InvoiceRequest::from_json(&body).unwrap_err(),
            ValidationError::invalid_item(0, "rate_item")
        );

        let mut body = valid_body();
        body["items"][0]["tax"] = json!(-5);
        assert!(InvoiceRequest::from_json(&body).is_ok());
    }

    #[test]
    fn missing_tax_is_rejected() {
        let mut body = valid_body();
        body["items"][0].as_object_mut().unwrap().remove("tax");
        assert_eq!(
            InvoiceRequest::from_json(&body).unwrap_err(),
            ValidationError::invalid_item(0, "tax")
        );
    }

    #[test]
    fn structured_contacts_are_supported() {
        let mut body = valid_body();
        body["bill_to"] = json!({"name": "Acme Traders", "phone": "7892787054"});
        let req = InvoiceRequest::from_json(&body).unwrap();
        assert_eq!(req.bill_to.phone(), Some("7892787054"));
        assert_eq!(req.ship_to.phone(), None);
    }

    #[test]
    fn numeric_invoice_number_is_kept_as_text() {
        let mut body = valid_body();
        body["invoice_num"] = json!(1042);
        let req = InvoiceRequest::from_json(&body).unwrap();
        assert_eq!(req.invoice_num, "1042");
        assert_eq!(req.attachment_filename(), "invoice_1042.pdf");
    }

    #[test]
    fn attachment_filename_keeps_printable_invoice_numbers() {
        for (num, expected) in [
            ("INV 001", "invoice_INV 001.pdf"),
            ("INV/2024/001", "invoice_INV/2024/001.pdf"),
            ("INV#7", "invoice_INV#7.pdf"),
        ] {
            let mut body = valid_body();
            body["invoice_num"] = json!(num);
            let req = InvoiceRequest::from_json(&body).unwrap();
            assert_eq!(req.attachment_filename(), expected);
        }
    }

    #[test]
    fn attachment_filename_replaces_header_unsafe_characters() {
        let mut body = valid_body();
        body["invoice_num"] = json!("INV\r\n7\tक");
        let req = InvoiceRequest::from_json(&body).unwrap();
        assert_eq!(req.attachment_filename(), "invoice_INV__7__.pdf");
    }

    #[test]
    fn non_object_item_is_an_item_error() {
        for item in [json!(null), json!("Widget x2"), json!(42)] {
            let mut body = valid_body();
            body["items"] = json!([item]);
            assert_eq!(
                InvoiceRequest::from_json(&body).unwrap_err(),
                ValidationError::invalid_item(0, "item")
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total is the sum of line amounts whatever the tax.
        #[test]
        fn total_ignores_tax(
            lines in prop::collection::vec((0u32..1_000, 0u32..100_000, -100i32..100), 0..10)
        ) {
            let items: Vec<Value> = lines
                .iter()
                .map(|(qty, rate, tax)| json!({
                    "item_desc": "Line",
                    "qty": qty,
                    "rate_item": rate,
                    "tax": tax,
                }))
                .collect();
            let mut body = valid_body();
            body["items"] = Value::Array(items);

            let req = InvoiceRequest::from_json(&body).unwrap();
            let expected: u64 = lines.iter().map(|(q, r, _)| *q as u64 * *r as u64).sum();
            prop_assert_eq!(req.total_amount(), expected as f64);
        }
    }
}
