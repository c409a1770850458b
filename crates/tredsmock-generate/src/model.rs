use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which observed C2FO date behavior to reproduce.
///
/// Both variants exist in the upstream feeds; they differ in the GRN past
/// window and in how `pay_date` relates to `payment_due_date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum C2foDateVariant {
    /// Directory-driven feed: GRN up to 43 days back, pay date coupled to
    /// the payment due date.
    #[default]
    Directory,
    /// Direct-entry feed: GRN up to 29 days back, pay date drawn
    /// independently.
    Legacy,
}

/// Options for the synthesis engine.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for the value RNG; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Reference clock for all synthesized dates and identifiers; `None`
    /// reads the wall clock at run time.
    pub now: Option<DateTime<Utc>>,
    /// C2FO date policy variant.
    pub c2fo_dates: C2foDateVariant,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub invoice_type: String,
    pub combinations: usize,
    pub rows_generated: u64,
    pub duration_ms: u64,
}
