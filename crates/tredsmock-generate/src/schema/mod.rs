//! Per-invoice-type column layouts and row-population rules.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::RngCore;

use tredsmock_core::{GenerationParameters, IdentifierCombination, InvoiceType};

use crate::dates::DateSet;
use crate::random::int_in;

mod c2fo;
mod erp;
mod self_upload;

/// How a schema renders its date columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD-MM-YYYY`
    DayFirst,
}

impl DateStyle {
    pub fn pattern(self) -> &'static str {
        match self {
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::DayFirst => "%d-%m-%Y",
        }
    }
}

/// One cell of an invoice record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Empty,
    Int(i64),
    Float { value: f64, scale: usize },
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn to_csv(&self, dates: DateStyle) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Float { value, scale } => format!("{value:.scale$}"),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Date(value) => value.format(dates.pattern()).to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Empty => Some(""),
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

/// A flat invoice row keyed by column name.
pub type InvoiceRecord = HashMap<String, FieldValue>;

/// Inputs for building one row.
pub struct RowContext<'a> {
    /// 1-based row index within the active combination.
    pub index: u32,
    pub combination: &'a IdentifierCombination,
    pub buyer_name: &'a str,
    pub params: &'a GenerationParameters,
    pub dates: &'a DateSet,
    pub today: NaiveDate,
    /// Reference clock in epoch milliseconds, feeding the id synthesizer.
    pub clock_millis: i64,
    pub rng: &'a mut dyn RngCore,
}

/// Column layout and row-population rule for one invoice type.
pub trait InvoiceSchema: Send + Sync {
    fn header(&self) -> &'static [&'static str];
    fn date_style(&self) -> DateStyle;
    fn build_row(&self, ctx: &mut RowContext<'_>) -> InvoiceRecord;
}

/// Resolve the schema owning `invoice_type`.
pub fn schema_for(invoice_type: InvoiceType) -> &'static dyn InvoiceSchema {
    match invoice_type {
        InvoiceType::C2fo => &c2fo::C2foSchema,
        InvoiceType::Erp => &erp::ErpSchema,
        InvoiceType::BuyerSelfUpload => &self_upload::BuyerSelfUploadSchema,
    }
}

pub(crate) fn put(row: &mut InvoiceRecord, column: &str, value: FieldValue) {
    row.insert(column.to_string(), value);
}

/// Document number carried by the SAP-backed feeds: the feed label, two
/// random numeric blocks, and the zero-padded row index.
pub(crate) fn document_number<R: rand::Rng + ?Sized>(
    invoice_type: InvoiceType,
    index: u32,
    rng: &mut R,
) -> String {
    format!(
        "{}-Doc-{}-{}-{:02}",
        invoice_type.label(),
        int_in(rng, 1_000, 9_999),
        int_in(rng, 1_000_000, 9_999_999),
        index
    )
}
