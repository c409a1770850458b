use chrono::Datelike;

use crate::ids::next_id;
use crate::random::{int_in, pick};

use super::{DateStyle, FieldValue, InvoiceRecord, InvoiceSchema, RowContext, document_number, put};

const HEADER: &[&str] = &[
    "company_id",
    "company_name",
    "sap_reference_number",
    "company_pan",
    "buyer_pan",
    "company_tax_id",
    "buyer_tax_id",
    "posting_date",
    "grn_date",
    "transaction_date",
    "payment_due_date",
    "invoice_id",
    "voucher_id",
    "voucher_line_id",
    "amount",
    "currency",
    "transaction_type",
    "fiscal_year",
    "sequential_document_number",
    "buyer_name",
    "sap_vendor_number",
    "credit_days",
    "sap_payment_term",
    "sap_company_code",
    "sap_discount_base_amount",
    "business_place",
    "posting_key",
    "document_type",
    "special_gl_indicator",
    "reference_key",
    "assignment_number",
    "line_item_text",
    "product_type",
    "description",
];

const BASE_VOUCHER_ID: i64 = 510_000_000;
const COMPANY_NAMES: [&str; 2] = ["Ajay Enterprises Ltd", "Vijay Traders Pvt Ltd"];
const BUSINESS_PLACES: &[&str] = &["MH01", "KA02", "DL03"];

pub struct ErpSchema;

impl InvoiceSchema for ErpSchema {
    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn date_style(&self) -> DateStyle {
        DateStyle::Iso
    }

    fn build_row(&self, ctx: &mut RowContext<'_>) -> InvoiceRecord {
        let company_name = if ctx.index % 4 < 2 {
            COMPANY_NAMES[0]
        } else {
            COMPANY_NAMES[1]
        };
        let payment_term = format!("Z{}{}", if ctx.index % 2 == 0 { "C" } else { "V" }, 30);

        let mut row = InvoiceRecord::new();
        put(
            &mut row,
            "company_id",
            FieldValue::Text(format!("AJAYCOMPANY{:02}", ctx.index)),
        );
        put(
            &mut row,
            "company_name",
            FieldValue::Text(company_name.to_string()),
        );
        put(
            &mut row,
            "sap_reference_number",
            FieldValue::Text(next_id("SAPREF", ctx.clock_millis, &mut *ctx.rng)),
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
        put(&mut row, "posting_date", FieldValue::Date(ctx.dates.posting));
        put(&mut row, "grn_date", FieldValue::Date(ctx.dates.grn));
        put(
            &mut row,
            "transaction_date",
            FieldValue::Date(ctx.dates.transaction),
        );
        put(
            &mut row,
            "payment_due_date",
            FieldValue::Date(ctx.dates.payment_due),
        );
        put(
            &mut row,
            "invoice_id",
            FieldValue::Text(next_id("INVID", ctx.clock_millis, &mut *ctx.rng)),
        );
        put(
            &mut row,
            "voucher_id",
            FieldValue::Int(BASE_VOUCHER_ID + ctx.index as i64),
        );
        put(&mut row, "voucher_line_id", FieldValue::Int(1));
        put(&mut row, "amount", FieldValue::Int(1000));
        put(&mut row, "currency", FieldValue::Text("INR".to_string()));
        put(&mut row, "transaction_type", FieldValue::Int(1));
        put(
            &mut row,
            "fiscal_year",
            FieldValue::Int(ctx.today.year() as i64),
        );
        put(
            &mut row,
            "sequential_document_number",
            FieldValue::Text(document_number(
                ctx.params.invoice_type,
                ctx.index,
                &mut *ctx.rng,
            )),
        );
        put(
            &mut row,
            "buyer_name",
            FieldValue::Text(ctx.buyer_name.to_string()),
        );
        put(
            &mut row,
            "sap_vendor_number",
            FieldValue::Int(int_in(&mut *ctx.rng, 100_000, 999_999)),
        );
        put(&mut row, "credit_days", FieldValue::Int(30));
        put(&mut row, "sap_payment_term", FieldValue::Text(payment_term));
        put(
            &mut row,
            "sap_company_code",
            FieldValue::Text("1000".to_string()),
        );
        put(
            &mut row,
            "sap_discount_base_amount",
            FieldValue::Int(10_000),
        );
        put(
            &mut row,
            "business_place",
            FieldValue::Text(pick(&mut *ctx.rng, BUSINESS_PLACES).to_string()),
        );
        put(&mut row, "posting_key", FieldValue::Int(31));
        put(
            &mut row,
            "document_type",
            FieldValue::Text("RE".to_string()),
        );
        put(&mut row, "special_gl_indicator", FieldValue::Empty);
        put(&mut row, "reference_key", FieldValue::Empty);
        put(&mut row, "assignment_number", FieldValue::Empty);
        put(&mut row, "line_item_text", FieldValue::Empty);
        put(
            &mut row,
            "product_type",
            FieldValue::Text(ctx.params.product_type.output().to_string()),
        );
        put(
            &mut row,
            "description",
            FieldValue::Text(next_id("DESCRIPTION", ctx.clock_millis, &mut *ctx.rng)),
        );
        row
    }
}
