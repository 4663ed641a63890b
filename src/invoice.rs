//! Invoice and payment models, and application of a cleared payment.

use crate::money::Money;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Surcharge rate applied to every payment on a commercial invoice.
pub const COMMERCIAL_TAX_RATE: Decimal = dec!(0.14);

/// Invoice category. Decides the surcharge policy and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceType {
    Standard,
    Commercial,
}

/// A payment made against an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Reference of the invoice this payment targets.
    pub reference: String,

    /// Value being paid.
    pub amount: Money,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: Money) -> Self {
        Payment {
            reference: reference.into(),
            amount,
        }
    }
}

/// An invoice together with the payments already applied to it.
///
/// # Invariants
///
/// - `amount` is fixed at creation
/// - `amount_paid` equals the sum of `payments`
/// - for commercial invoices, `tax_amount` equals 14% of the sum of `payments`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Key the invoice is stored under; payments refer to it.
    pub reference: String,

    /// Total billed amount.
    pub amount: Money,

    /// Cumulative sum of applied payments.
    pub amount_paid: Money,

    /// Accumulated surcharge. Only ever non-zero for commercial invoices.
    pub tax_amount: Money,

    pub invoice_type: InvoiceType,

    /// Applied payments, oldest first.
    pub payments: Vec<Payment>,
}

impl Invoice {
    /// Creates an unpaid invoice with no payment history.
    pub fn new(reference: impl Into<String>, invoice_type: InvoiceType, amount: Money) -> Self {
        Invoice {
            reference: reference.into(),
            amount,
            amount_paid: Money::ZERO,
            tax_amount: Money::ZERO,
            invoice_type,
            payments: Vec::new(),
        }
    }

    /// Sum of the amounts in the payment history.
    pub fn payments_total(&self) -> Money {
        self.payments.iter().map(|p| &p.amount).sum()
    }

    /// Amount still owed according to `amount_paid`.
    pub fn remaining(&self) -> Money {
        self.amount - self.amount_paid
    }

    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    /// Returns `true` once `amount_paid` exactly equals `amount`.
    pub fn is_fully_paid(&self) -> bool {
        self.amount_paid == self.amount
    }

    /// Applies a payment that validation has cleared.
    ///
    /// Increases `amount_paid`, adds the commercial surcharge where it
    /// applies, and takes ownership of the payment into the history.
    pub fn apply_payment(&mut self, payment: Payment) {
        match self.invoice_type {
            InvoiceType::Standard => {
                self.amount_paid += payment.amount;
            }
            InvoiceType::Commercial => {
                self.amount_paid += payment.amount;
                self.tax_amount += payment.amount * COMMERCIAL_TAX_RATE;
            }
        }

        debug!(
            "Applied {} to {} invoice {} (paid {} of {})",
            payment.amount,
            self.invoice_type.as_str(),
            self.reference,
            self.amount_paid,
            self.amount
        );
        self.payments.push(payment);
    }

    /// Verifies that `amount_paid` and `tax_amount` agree with the payment history.
    pub fn check_invariant(&self) -> bool {
        let total = self.payments_total();
        let tax_ok = match self.invoice_type {
            InvoiceType::Standard => self.tax_amount.is_zero(),
            InvoiceType::Commercial => self.tax_amount == total * COMMERCIAL_TAX_RATE,
        };
        self.amount_paid == total && tax_ok
    }
}

impl InvoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::Standard => "standard",
            InvoiceType::Commercial => "commercial",
        }
    }
}
