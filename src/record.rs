//! Raw CSV records for invoices and payments.

use crate::error::{EngineError, Result};
use crate::invoice::{Invoice, InvoiceType, Payment};
use crate::money::Money;
use serde::Deserialize;
use std::str::FromStr;

/// Raw invoice record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct InvoiceRecord {
    /// Key payments use to find the invoice
    pub reference: String,

    /// Category: standard or commercial
    #[serde(rename = "type")]
    pub invoice_type: String,

    /// Total billed amount
    pub amount: String,
}

impl InvoiceRecord {
    /// Builds an unpaid invoice from the record.
    ///
    /// An unrecognized category is an error rather than a default: the
    /// surcharge policy cannot be guessed.
    pub fn parse(&self, row: usize) -> Result<Invoice> {
        let reference = self.reference.trim();
        if reference.is_empty() {
            return Err(EngineError::InvalidRecord {
                row,
                message: "empty reference".to_string(),
            });
        }

        let invoice_type = parse_invoice_type(reference, &self.invoice_type)?;

        let amount = Money::from_str(&self.amount).map_err(|e| EngineError::InvalidRecord {
            row,
            message: format!("invalid amount '{}': {}", self.amount.trim(), e),
        })?;
        if amount.is_negative() {
            return Err(EngineError::InvalidRecord {
                row,
                message: format!("negative amount {}", amount),
            });
        }

        Ok(Invoice::new(reference, invoice_type, amount))
    }
}

fn parse_invoice_type(reference: &str, value: &str) -> Result<InvoiceType> {
    match value.trim().to_lowercase().as_str() {
        "standard" => Ok(InvoiceType::Standard),
        "commercial" => Ok(InvoiceType::Commercial),
        _ => Err(EngineError::UnknownInvoiceType {
            reference: reference.to_string(),
            value: value.trim().to_string(),
        }),
    }
}

/// Raw payment record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    /// Reference of the targeted invoice
    pub reference: String,

    /// Amount paid; rows without one are skipped
    pub amount: Option<String>,
}

impl PaymentRecord {
    /// Parses the raw record into a payment.
    ///
    /// Returns `None` if the reference is blank or the amount is missing,
    /// malformed or negative.
    pub fn parse(&self) -> Option<Payment> {
        let reference = self.reference.trim();
        if reference.is_empty() {
            return None;
        }

        let amount_str = self.amount.as_ref()?.trim();
        if amount_str.is_empty() {
            return None;
        }
        let amount = Money::from_str(amount_str).ok()?;
        if amount.is_negative() {
            return None;
        }

        Some(Payment::new(reference, amount))
    }
}
