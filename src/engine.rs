//! Payment processing pipeline.
//!
//! Each payment goes through lookup, validation, application, status
//! determination and a single save. Batches of payments can be streamed from
//! CSV, with one result row written per processed payment.

use crate::error::Result;
use crate::invoice::Payment;
use crate::money::Money;
use crate::outcome::PaymentOutcome;
use crate::record::PaymentRecord;
use crate::repository::{InMemoryInvoiceRepository, InvoiceRepository};
use crate::validation::{validate, Validation};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};

/// How a payment in a batch was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Applied,
    Rejected,
    Error,
}

/// One output row of a batch run.
#[derive(Debug, Serialize)]
pub struct PaymentResult {
    pub reference: String,
    pub amount: Money,
    pub result: ResultKind,
    pub message: String,
}

/// Applies payments to the invoices held by a repository.
///
/// The processor owns its repository and takes `&mut self` for every
/// payment, so one invoice is never processed by two calls at once within a
/// single processor. Coordination across processors is left to the storage.
pub struct PaymentProcessor<R: InvoiceRepository = InMemoryInvoiceRepository> {
    repository: R,
}

impl PaymentProcessor {
    /// Creates a processor over an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(InMemoryInvoiceRepository::new())
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: InvoiceRepository> PaymentProcessor<R> {
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Processes a single payment.
    ///
    /// Returns the outcome on success or on an informational rejection. A
    /// missing invoice, or a zero-amount invoice carrying payments, is
    /// returned as an error and nothing is saved. Repository errors are
    /// passed through unchanged.
    pub fn process_payment(&mut self, payment: Payment) -> Result<PaymentOutcome> {
        let invoice = self.repository.get_invoice(&payment.reference)?;

        let mut invoice = match validate(invoice, &payment) {
            Validation::Proceed(invoice) => invoice,
            Validation::Final(rejection) => {
                debug!(
                    "Payment of {} to {} not applied: {}",
                    payment.amount, payment.reference, rejection
                );
                return Ok(rejection.into());
            }
            Validation::Terminal(err) => return Err(err),
        };

        invoice.apply_payment(payment);
        let outcome = PaymentOutcome::after_payment(&invoice);

        self.repository.save(invoice)?;
        Ok(outcome)
    }

    /// Processes payments from a CSV reader in streaming fashion.
    ///
    /// Expects header `reference,amount`. Writes `reference,amount,result,message`
    /// rows to `writer`, where `result` is `applied`, `rejected` or `error`.
    /// Malformed rows are logged at warn level and skipped. Terminal payment
    /// errors are reported on their row and processing continues.
    pub fn process_csv<I: Read, W: Write>(&mut self, reader: I, writer: W) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        // Header is written up front so an empty batch still yields one.
        csv_writer.write_record(["reference", "amount", "result", "message"])?;

        for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };
            let Some(payment) = record.parse() else {
                warn!("Row {}: Failed to parse payment record", row_num);
                continue;
            };

            let reference = payment.reference.clone();
            let amount = payment.amount;

            let (result, message) = match self.process_payment(payment) {
                Ok(outcome) if outcome.is_applied() => (ResultKind::Applied, outcome.to_string()),
                Ok(outcome) => (ResultKind::Rejected, outcome.to_string()),
                Err(e) if e.is_terminal() => {
                    warn!("Row {}: {}", row_num, e);
                    (ResultKind::Error, e.to_string())
                }
                Err(e) => return Err(e),
            };

            csv_writer.serialize(PaymentResult {
                reference,
                amount,
                result,
                message,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
