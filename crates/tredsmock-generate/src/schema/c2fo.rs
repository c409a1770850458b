use rand::Rng;

use tredsmock_core::ProductType;

use crate::ids::next_id;
use crate::random::{float_in, int_in, pick, round_to};

use super::{DateStyle, FieldValue, InvoiceRecord, InvoiceSchema, RowContext, document_number, put};

const HEADER: &[&str] = &[
    "company_id",
    "company_name",
    "division_id",
    "sap_reference_number",
    "company_pan",
    "buyer_pan",
    "company_tax_id",
    "buyer_tax_id",
    "posting_date",
    "grn_date",
    "transaction_date",
    "pay_date",
    "payment_due_date",
    "invoice_id",
    "voucher_id",
    "voucher_line_id",
    "amount",
    "currency",
    "discount_percentage",
    "income",
    "discounted_invoice_amount",
    "offer_apr_amount",
    "transaction_type",
    "fiscal_year",
    "adj_invoice_id",
    "sequential_document_number",
    "buyer_name",
    "sap_vendor_number",
    "credit_days",
    "sap_payment_term",
    "fp_status",
    "market_type",
    "treds_flag",
    "sap_company_code",
    "discount_reason_code",
    "covers_adjustment",
    "adj_invoice_amount",
    "product_type",
    "description",
];

const BASE_VOUCHER_ID: i64 = 510_000_000;
const CREDIT_DAYS: &[i64] = &[30, 35, 40];

pub struct C2foSchema;

impl InvoiceSchema for C2foSchema {
    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn date_style(&self) -> DateStyle {
        DateStyle::Iso
    }

    fn build_row(&self, ctx: &mut RowContext<'_>) -> InvoiceRecord {
        use chrono::Datelike;

        let amount = int_in(&mut *ctx.rng, 0, 99_999);
        let discount_percentage = round_to(float_in(&mut *ctx.rng, 0.0, 1.0), 2);
        let income = round_to((amount as f64).abs() * discount_percentage / 100.0, 2);
        let discounted = if amount > 0 {
            amount as f64 - income
        } else {
            amount as f64 + income
        };
        let apr = round_to(float_in(&mut *ctx.rng, 10.0, 15.0), 1);
        let transaction_type = if ctx.params.product_type == ProductType::BiFactoring {
            2
        } else {
            1
        };
        let payment_term = format!(
            "Z{}{}",
            if ctx.rng.random_bool(0.5) { "C" } else { "V" },
            int_in(&mut *ctx.rng, 10, 99)
        );

        let mut row = InvoiceRecord::new();
        put(
            &mut row,
            "company_id",
            FieldValue::Text(format!("AJAYCOMPANY{:02}", ctx.index)),
        );
        put(
            &mut row,
            "company_name",
            FieldValue::Text(format!("Company {}", ctx.index)),
        );
        put(&mut row, "division_id", FieldValue::Empty);
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
            "pay_date",
            FieldValue::Date(ctx.dates.pay.unwrap_or(ctx.dates.payment_due)),
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
        put(&mut row, "amount", FieldValue::Int(amount));
        put(&mut row, "currency", FieldValue::Text("INR".to_string()));
        put(
            &mut row,
            "discount_percentage",
            FieldValue::Float {
                value: discount_percentage,
                scale: 2,
            },
        );
        put(
            &mut row,
            "income",
            FieldValue::Float {
                value: income,
                scale: 2,
            },
        );
        put(
            &mut row,
            "discounted_invoice_amount",
            FieldValue::Float {
                value: round_to(discounted, 2),
                scale: 2,
            },
        );
        put(
            &mut row,
            "offer_apr_amount",
            FieldValue::Float {
                value: apr,
                scale: 1,
            },
        );
        put(&mut row, "transaction_type", FieldValue::Int(transaction_type));
        put(
            &mut row,
            "fiscal_year",
            FieldValue::Int(ctx.today.year() as i64),
        );
        put(&mut row, "adj_invoice_id", FieldValue::Empty);
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
        put(
            &mut row,
            "credit_days",
            FieldValue::Int(*pick(&mut *ctx.rng, CREDIT_DAYS)),
        );
        put(&mut row, "sap_payment_term", FieldValue::Text(payment_term));
        put(
            &mut row,
            "fp_status",
            FieldValue::Text("Funded by TReDS".to_string()),
        );
        put(&mut row, "market_type", FieldValue::Text("TREDS".to_string()));
        put(&mut row, "treds_flag", FieldValue::Text("Y".to_string()));
        put(
            &mut row,
            "sap_company_code",
            FieldValue::Text("1000".to_string()),
        );
        put(&mut row, "discount_reason_code", FieldValue::Empty);
        put(
            &mut row,
            "covers_adjustment",
            FieldValue::Text("0".to_string()),
        );
        put(&mut row, "adj_invoice_amount", FieldValue::Empty);
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
