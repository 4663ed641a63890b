//! Error types for the invoice payments engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operation.
///
/// `InvoiceNotFound` and `InvalidInvoiceState` are the terminal validation
/// outcomes. Their messages are matched on by callers and must not change.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// No invoice is stored under the payment's reference
    #[error("There is no invoice matching this payment")]
    InvoiceNotFound,

    /// A zero-amount invoice carries payment history
    #[error("The invoice is in an invalid state.")]
    InvalidInvoiceState,

    /// Invoice category could not be decoded
    #[error("Unknown invoice type '{value}' for invoice {reference}")]
    UnknownInvoiceType { reference: String, value: String },

    /// Invalid invoice record
    #[error("Invalid invoice at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Duplicate invoice reference
    #[error("Duplicate invoice reference {reference} at row {row}")]
    DuplicateInvoice { reference: String, row: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: invoice-payments <invoices.csv> <payments.csv>")]
    MissingArgument,
}

impl EngineError {
    /// Returns `true` for the terminal validation errors raised by payment processing.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngineError::InvoiceNotFound | EngineError::InvalidInvoiceState
        )
    }
}
