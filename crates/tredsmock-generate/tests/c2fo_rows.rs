use chrono::{NaiveDate, TimeZone, Utc};
use tredsmock_core::{CounterpartyIdentifiers, GenerationParameters};
use tredsmock_generate::{C2foDateVariant, GenerateOptions, GenerationEngine};

const TOLERANCE: f64 = 0.005;

fn run(seed: u64, product_type: &str, variant: C2foDateVariant) -> tredsmock_generate::GenerationResult {
    let params = GenerationParameters::from_raw("C2FO", product_type, 25).expect("params");
    let identifiers = CounterpartyIdentifiers::single(
        "Dabur India Ltd.",
        "AAACD0474C",
        "07AAACD0474C1Z4",
        "AAJCT1234F",
        "27AAJCT1234F1Z5",
    );
    let options = GenerateOptions {
        seed: Some(seed),
        now: Some(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()),
        c2fo_dates: variant,
    };
    GenerationEngine::new(options)
        .run(&params, Some(&identifiers))
        .expect("run")
}

#[test]
fn discount_arithmetic_holds_per_row() {
    let result = run(9, "Normal", C2foDateVariant::Directory);
    for row in &result.rows {
        let amount = row["amount"].as_f64().expect("amount");
        let discount = row["discount_percentage"].as_f64().expect("discount");
        let income = row["income"].as_f64().expect("income");
        let discounted = row["discounted_invoice_amount"].as_f64().expect("discounted");

        assert!((income - amount.abs() * discount / 100.0).abs() <= TOLERANCE);
        let expected = if amount > 0.0 {
            amount - income
        } else {
            amount + income
        };
        assert!((discounted - expected).abs() <= TOLERANCE);
        assert!((0.0..=1.0).contains(&discount));
        assert!((0.0..=99_999.0).contains(&amount));
    }
}

#[test]
fn fixed_literals_and_sequences() {
    let result = run(10, "Normal", C2foDateVariant::Directory);
    for (position, row) in result.rows.iter().enumerate() {
        let index = position as i64 + 1;
        assert_eq!(
            row["company_id"].as_str(),
            Some(format!("AJAYCOMPANY{index:02}").as_str())
        );
        assert_eq!(row["voucher_id"].as_i64(), Some(510_000_000 + index));
        assert_eq!(row["voucher_line_id"].as_i64(), Some(1));
        assert_eq!(row["fp_status"].as_str(), Some("Funded by TReDS"));
        assert_eq!(row["market_type"].as_str(), Some("TREDS"));
        assert_eq!(row["treds_flag"].as_str(), Some("Y"));
        assert_eq!(row["sap_company_code"].as_str(), Some("1000"));
        assert_eq!(row["covers_adjustment"].as_str(), Some("0"));

        let credit_days = row["credit_days"].as_i64().expect("credit days");
        assert!([30, 35, 40].contains(&credit_days));

        let term = row["sap_payment_term"].as_str().expect("payment term");
        assert!(term.starts_with("ZC") || term.starts_with("ZV"));
        let code: u32 = term[2..].parse().expect("numeric term code");
        assert!((10..=99).contains(&code));

        let document = row["sequential_document_number"].as_str().expect("doc");
        assert!(document.starts_with("C2FO-Doc-"));
        assert!(document.ends_with(&format!("-{index:02}")));

        let apr = row["offer_apr_amount"].as_f64().expect("apr");
        assert!((10.0..=15.0).contains(&apr));

        let vendor = row["sap_vendor_number"].as_i64().expect("vendor");
        assert!((100_000..=999_999).contains(&vendor));
    }
}

#[test]
fn transaction_type_flips_for_bifactoring() {
    let result = run(11, "BIFactoring", C2foDateVariant::Directory);
    for row in &result.rows {
        assert_eq!(row["transaction_type"].as_i64(), Some(2));
        assert_eq!(row["product_type"].as_str(), Some("BIFactoring"));
    }

    let result = run(11, "RFDDueDate", C2foDateVariant::Directory);
    for row in &result.rows {
        assert_eq!(row["transaction_type"].as_i64(), Some(1));
        assert_eq!(row["product_type"].as_str(), Some("RFDDueDate"));
    }
}

#[test]
fn directory_variant_couples_pay_date_to_due_date() {
    let result = run(12, "Normal", C2foDateVariant::Directory);
    for row in &result.rows {
        assert_eq!(
            row["pay_date"].as_date(),
            row["payment_due_date"].as_date()
        );
    }
}

#[test]
fn legacy_variant_keeps_pay_date_in_the_past() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("date");
    let result = run(13, "Normal", C2foDateVariant::Legacy);
    for row in &result.rows {
        let pay = row["pay_date"].as_date().expect("pay date");
        assert!(pay <= today);
        assert!(pay >= today - chrono::Duration::days(179));
    }
}
