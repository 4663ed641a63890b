//! Invoice Payments CLI
//!
//! Loads invoices from one CSV file, applies the payments in a second CSV
//! file and writes one result row per payment.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- invoices.csv payments.csv > results.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use invoice_payments::{EngineError, PaymentProcessor, Result};
use log::{debug, info};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(EngineError::MissingArgument);
    }

    let invoices = BufReader::new(File::open(&args[1])?);
    let payments = BufReader::new(File::open(&args[2])?);

    let mut processor = PaymentProcessor::new();
    processor.repository_mut().load_csv(invoices)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    processor.process_csv(payments, handle)?;

    info!(
        "Finished with {} invoices in store",
        processor.repository().len()
    );
    for invoice in processor.repository().invoices() {
        debug!(
            "Invoice {}: paid {} of {} ({} payments, tax {})",
            invoice.reference,
            invoice.amount_paid,
            invoice.amount,
            invoice.payment_count(),
            invoice.tax_amount
        );
    }
    Ok(())
}
