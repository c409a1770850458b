use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tredsmock_core::{
    CounterpartyIdentifiers, GenerationParameters, IdentifierCombination, expand,
};

use crate::dates;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::schema::{DateStyle, InvoiceRecord, RowContext, schema_for};

/// Buyer name written when no directory record is in play.
const DEFAULT_BUYER_NAME: &str = "Dabur India Ltd.";

/// Result of a generation run: the active schema's header, the synthesized
/// rows in combination-major, index-minor order, and a run summary.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub header: &'static [&'static str],
    pub date_style: DateStyle,
    pub rows: Vec<InvoiceRecord>,
    pub report: GenerationReport,
}

/// Entry point for synthesizing invoice records.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(
        &self,
        params: &GenerationParameters,
        identifiers: Option<&CounterpartyIdentifiers>,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        params.validate()?;

        let (combinations, buyer_name) = match identifiers {
            Some(identifiers) => {
                let combinations = expand(identifiers);
                if combinations.is_empty() {
                    return Err(GenerationError::NoCombinations);
                }
                let buyer_name = if identifiers.buyer_name.is_empty() {
                    DEFAULT_BUYER_NAME.to_string()
                } else {
                    identifiers.buyer_name.clone()
                };
                (combinations, buyer_name)
            }
            None => (
                vec![IdentifierCombination::default()],
                DEFAULT_BUYER_NAME.to_string(),
            ),
        };

        let run_id = uuid::Uuid::new_v4().to_string();
        let now: DateTime<Utc> = self.options.now.unwrap_or_else(Utc::now);
        let today = now.date_naive();
        let clock_millis = now.timestamp_millis();
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let schema = schema_for(params.invoice_type);

        info!(
            run_id = %run_id,
            invoice_type = %params.invoice_type,
            combinations = combinations.len(),
            records_per_combination = params.record_count,
            "generation started"
        );

        let mut rows =
            Vec::with_capacity(combinations.len() * params.record_count as usize);
        for combination in &combinations {
            for index in 1..=params.record_count {
                let date_set = dates::synthesize(
                    params.invoice_type,
                    self.options.c2fo_dates,
                    today,
                    &mut rng,
                );
                let mut ctx = RowContext {
                    index,
                    combination,
                    buyer_name: &buyer_name,
                    params,
                    dates: &date_set,
                    today,
                    clock_millis,
                    rng: &mut rng,
                };
                rows.push(schema.build_row(&mut ctx));
            }
        }

        let report = GenerationReport {
            run_id: run_id.clone(),
            invoice_type: params.invoice_type.label().to_string(),
            combinations: combinations.len(),
            rows_generated: rows.len() as u64,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            run_id = %run_id,
            rows_generated = report.rows_generated,
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationResult {
            header: schema.header(),
            date_style: schema.date_style(),
            rows,
            report,
        })
    }
}
