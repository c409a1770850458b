use chrono::Datelike;

use crate::ids::next_id;
use crate::random::{int_in, round_to};

use super::{DateStyle, FieldValue, InvoiceRecord, InvoiceSchema, RowContext, put};

const HEADER: &[&str] = &[
    "company_id",
    "company_name",
    "buyer_name",
    "company_pan",
    "buyer_pan",
    "company_tax_id",
    "buyer_tax_id",
    "invoice_id",
    "invoice_date",
    "grn_date",
    "acceptance_date",
    "payment_due_date",
    "invoice_amount",
    "currency",
    "credit_days",
    "transaction_type",
    "fiscal_year",
    "inv_reference",
    "sap_vendor_number",
    "sap_company_code",
    "market_type",
    "treds_flag",
    "product_type",
    "description",
    "covers_adjustment",
];

const COMPANY_NAMES: [&str; 2] = ["Ajay Fabrics Ltd", "Ajay Apparels Pvt Ltd"];
const REFERENCE_CODE: &str = "BSU";
const REFERENCE_SUBCODE: &str = "TREDS";

pub struct BuyerSelfUploadSchema;

impl InvoiceSchema for BuyerSelfUploadSchema {
    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn date_style(&self) -> DateStyle {
        DateStyle::DayFirst
    }

    fn build_row(&self, ctx: &mut RowContext<'_>) -> InvoiceRecord {
        let invoice_date = ctx.dates.posting;
        let invoice_id = next_id("INVID", ctx.clock_millis, &mut *ctx.rng);
        let description = format!(
            "Invoice for {} - {}",
            invoice_date.format("%b %Y"),
            invoice_id
        );
        // BSU|<random block>|TREDS|<year>|<GST-style tag from the row index>
        let gst_tag = format!("27TAJAYFU{:03}1Z{}", 29 + ctx.index, ctx.index % 10);
        let inv_reference = format!(
            "{REFERENCE_CODE}|{}|{REFERENCE_SUBCODE}|{}|{}",
            int_in(&mut *ctx.rng, 100_000, 999_999),
            ctx.today.year(),
            gst_tag
        );
        let company_name = if ctx.index % 2 == 0 {
            COMPANY_NAMES[1]
        } else {
            COMPANY_NAMES[0]
        };

        let mut row = InvoiceRecord::new();
        put(
            &mut row,
            "company_id",
            FieldValue::Text(format!("TAJAYFU{}", 29 + ctx.index)),
        );
        put(
            &mut row,
            "company_name",
            FieldValue::Text(company_name.to_string()),
        );
        put(
            &mut row,
            "buyer_name",
            FieldValue::Text(ctx.buyer_name.to_string()),
        );
        put(
            &mut row,
            "company_pan",
            FieldValue::Text(ctx.combination.seller_pan.clone()),
        );
        put(
            &mut row,
            "buyer_pan",
            FieldValue::Text(ctx.combination.buyer_pan.clone()),
        );
        put(
            &mut row,
            "company_tax_id",
            FieldValue::Text(ctx.combination.seller_gstin.clone()),
        );
        put(
            &mut row,
            "buyer_tax_id",
            FieldValue::Text(ctx.combination.buyer_gstin.clone()),
        );
        put(&mut row, "invoice_id", FieldValue::Text(invoice_id));
        put(&mut row, "invoice_date", FieldValue::Date(invoice_date));
        put(&mut row, "grn_date", FieldValue::Date(ctx.dates.grn));
        put(
            &mut row,
            "acceptance_date",
            FieldValue::Date(ctx.dates.transaction),
        );
        put(
            &mut row,
            "payment_due_date",
            FieldValue::Date(ctx.dates.payment_due),
        );
        put(
            &mut row,
            "invoice_amount",
            FieldValue::Float {
                value: round_to(ctx.index as f64 * 1000.0, 2),
                scale: 2,
            },
        );
        put(&mut row, "currency", FieldValue::Text("INR".to_string()));
        put(&mut row, "credit_days", FieldValue::Int(45));
        put(&mut row, "transaction_type", FieldValue::Int(1));
        put(
            &mut row,
            "fiscal_year",
            FieldValue::Int(ctx.today.year() as i64),
        );
        put(&mut row, "inv_reference", FieldValue::Text(inv_reference));
        put(
            &mut row,
            "sap_vendor_number",
            FieldValue::Int(int_in(&mut *ctx.rng, 100_000, 999_999)),
        );
        put(
            &mut row,
            "sap_company_code",
            FieldValue::Text("1000".to_string()),
        );
        put(&mut row, "market_type", FieldValue::Text("TREDS".to_string()));
        put(&mut row, "treds_flag", FieldValue::Text("Y".to_string()));
        put(
            &mut row,
            "product_type",
            FieldValue::Text(ctx.params.product_type.output().to_string()),
        );
        put(&mut row, "description", FieldValue::Text(description));
        put(
            &mut row,
            "covers_adjustment",
            FieldValue::Text("0".to_string()),
        );
        row
    }
}
