mod directory;
mod logging;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use tredsmock_core::{CounterpartyIdentifiers, Error as CoreError, GenerationParameters};
use tredsmock_generate::output::csv::write_invoices;
use tredsmock_generate::{C2foDateVariant, GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("directory error: {0}")]
    Directory(#[from] directory::DirectoryError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tredsmock", version, about = "TReDS invoice mock-data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an invoice CSV.
    Generate(GenerateArgs),
    /// List buyers configured in a counterparty directory.
    Buyers(BuyersArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Invoice type: C2FO, ERP, or "Buyer Self Upload".
    #[arg(long)]
    invoice_type: String,
    /// Product type: RFDDueDate, BIFactoring, or Normal.
    #[arg(long)]
    product_type: String,
    /// Records per identifier combination (1-100).
    #[arg(long, default_value_t = 1)]
    count: u32,
    /// Output CSV path.
    #[arg(long, default_value = "invoices.csv")]
    out: PathBuf,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Use the legacy direct-entry C2FO date windows.
    #[arg(long, default_value_t = false)]
    legacy_dates: bool,
    /// Optional path for a JSON run report.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Counterparty directory JSON file.
    #[arg(long, requires = "buyer")]
    directory: Option<PathBuf>,
    /// Buyer name to select from the directory.
    #[arg(long, requires = "directory")]
    buyer: Option<String>,
    /// Buyer PAN (direct entry).
    #[arg(long, conflicts_with = "directory")]
    buyer_pan: Option<String>,
    /// Buyer GSTIN (direct entry).
    #[arg(long, conflicts_with = "directory")]
    buyer_gstin: Option<String>,
    /// Seller PAN (direct entry).
    #[arg(long, conflicts_with = "directory")]
    seller_pan: Option<String>,
    /// Seller GSTIN (direct entry).
    #[arg(long, conflicts_with = "directory")]
    seller_gstin: Option<String>,
}

#[derive(Args, Debug)]
struct BuyersArgs {
    /// Counterparty directory JSON file.
    #[arg(long)]
    directory: PathBuf,
}

fn main() -> Result<(), CliError> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Buyers(args) => run_buyers(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let params =
        GenerationParameters::from_raw(&args.invoice_type, &args.product_type, args.count)?;
    let identifiers = resolve_identifiers(&args)?;

    let options = GenerateOptions {
        seed: args.seed,
        now: None,
        c2fo_dates: if args.legacy_dates {
            C2foDateVariant::Legacy
        } else {
            C2foDateVariant::Directory
        },
    };
    let result = GenerationEngine::new(options).run(&params, identifiers.as_ref())?;
    let bytes = write_invoices(&args.out, &result).map_err(GenerationError::from)?;

    if let Some(report_path) = &args.report {
        fs::write(report_path, serde_json::to_vec_pretty(&result.report)?)?;
    }

    info!(
        rows = result.report.rows_generated,
        bytes,
        out = %args.out.display(),
        "invoices written"
    );
    println!(
        "wrote {} rows ({} combinations) to {}",
        result.report.rows_generated,
        result.report.combinations,
        args.out.display()
    );
    Ok(())
}

fn run_buyers(args: BuyersArgs) -> Result<(), CliError> {
    let entries = directory::load(&args.directory)?;
    for entry in &entries {
        println!("{}", entry.buyer_name);
    }
    Ok(())
}

fn resolve_identifiers(args: &GenerateArgs) -> Result<Option<CounterpartyIdentifiers>, CliError> {
    if let (Some(directory), Some(buyer)) = (&args.directory, &args.buyer) {
        let entries = directory::load(directory)?;
        return Ok(Some(directory::identifiers_for(&entries, buyer)?));
    }

    let direct = [
        &args.buyer_pan,
        &args.buyer_gstin,
        &args.seller_pan,
        &args.seller_gstin,
    ];
    if direct.iter().all(|value| value.is_none()) {
        return Ok(None);
    }
    match (
        &args.buyer_pan,
        &args.buyer_gstin,
        &args.seller_pan,
        &args.seller_gstin,
    ) {
        (Some(buyer_pan), Some(buyer_gstin), Some(seller_pan), Some(seller_gstin)) => {
            Ok(Some(CounterpartyIdentifiers::single(
                "",
                buyer_pan.clone(),
                buyer_gstin.clone(),
                seller_pan.clone(),
                seller_gstin.clone(),
            )))
        }
        _ => Err(CliError::InvalidConfig(
            "direct entry needs all of --buyer-pan, --buyer-gstin, --seller-pan, --seller-gstin"
                .to_string(),
        )),
    }
}
