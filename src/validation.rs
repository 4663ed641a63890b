//! Ordered validation of an incoming payment against its invoice.

use crate::error::EngineError;
use crate::invoice::{Invoice, Payment};
use crate::outcome::Rejection;
use log::debug;

/// Result of validating a payment.
#[derive(Debug)]
pub enum Validation {
    /// The payment may be applied to the returned invoice.
    Proceed(Invoice),

    /// Processing is complete; report the outcome without applying anything.
    Final(Rejection),

    /// Unrecoverable condition; processing must abort with this error.
    Terminal(EngineError),
}

/// Validates `payment` against the invoice found for its reference.
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. no invoice: terminal
/// 2. zero-amount invoice: nothing to pay, or terminal if it has history
/// 3. invoice with history: already settled, or payment exceeds remainder
/// 4. invoice without history: payment exceeds the billed amount
///
/// Once any history exists the payment is never compared against the full
/// billed amount, and a history summing to zero skips both history checks.
pub fn validate(invoice: Option<Invoice>, payment: &Payment) -> Validation {
    let Some(invoice) = invoice else {
        debug!("No invoice found for reference {}", payment.reference);
        return Validation::Terminal(EngineError::InvoiceNotFound);
    };

    if invoice.amount.is_zero() {
        if invoice.payments.is_empty() {
            return Validation::Final(Rejection::NoPaymentNeeded);
        }
        debug!(
            "Invoice {} has zero amount but {} payments",
            invoice.reference,
            invoice.payment_count()
        );
        return Validation::Terminal(EngineError::InvalidInvoiceState);
    }

    if !invoice.payments.is_empty() {
        let total = invoice.payments_total();

        if !total.is_zero() && total == invoice.amount {
            return Validation::Final(Rejection::AlreadyFullyPaid);
        }
        if !total.is_zero() && payment.amount > invoice.remaining() {
            return Validation::Final(Rejection::ExceedsRemainingAmount);
        }
        return Validation::Proceed(invoice);
    }

    if payment.amount > invoice.amount {
        return Validation::Final(Rejection::ExceedsInvoiceAmount);
    }

    Validation::Proceed(invoice)
}
