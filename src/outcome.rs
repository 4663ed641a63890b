//! Outcomes reported back to callers of payment processing.
//!
//! The message text of each outcome is part of the public contract; callers
//! match on it.

use crate::invoice::Invoice;
use std::fmt;

/// Informational reason a payment was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoPaymentNeeded,
    AlreadyFullyPaid,
    ExceedsRemainingAmount,
    ExceedsInvoiceAmount,
}

/// Non-error result of processing a payment.
///
/// The first four variants mirror [`Rejection`] and are returned before
/// anything is applied. The rest describe the invoice after a payment was
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    NoPaymentNeeded,
    AlreadyFullyPaid,
    ExceedsRemainingAmount,
    ExceedsInvoiceAmount,

    /// First payment settled the invoice.
    FullyPaid,
    /// Later payment settled the invoice.
    FinalPartialPayment,
    /// First payment, invoice still open.
    PartiallyPaid,
    /// Later payment, invoice still open.
    AnotherPartialPayment,
}

impl PaymentOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            PaymentOutcome::NoPaymentNeeded => "no payment needed",
            PaymentOutcome::AlreadyFullyPaid => "invoice was already fully paid",
            PaymentOutcome::ExceedsRemainingAmount => {
                "the payment is greater than the partial amount remaining"
            }
            PaymentOutcome::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
            PaymentOutcome::FullyPaid => "invoice is now fully paid",
            PaymentOutcome::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            PaymentOutcome::PartiallyPaid => "invoice is now partially paid",
            PaymentOutcome::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
        }
    }

    /// Returns `true` if the payment was applied to the invoice.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            PaymentOutcome::FullyPaid
                | PaymentOutcome::FinalPartialPayment
                | PaymentOutcome::PartiallyPaid
                | PaymentOutcome::AnotherPartialPayment
        )
    }

    /// Describes an invoice that has just had a payment applied.
    ///
    /// "First" versus "later" is decided by the number of entries in the
    /// payment history, which already includes the payment just applied.
    pub fn after_payment(invoice: &Invoice) -> Self {
        let first = invoice.payment_count() == 1;
        match (invoice.is_fully_paid(), first) {
            (true, true) => PaymentOutcome::FullyPaid,
            (true, false) => PaymentOutcome::FinalPartialPayment,
            (false, true) => PaymentOutcome::PartiallyPaid,
            (false, false) => PaymentOutcome::AnotherPartialPayment,
        }
    }
}

impl From<Rejection> for PaymentOutcome {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NoPaymentNeeded => PaymentOutcome::NoPaymentNeeded,
            Rejection::AlreadyFullyPaid => PaymentOutcome::AlreadyFullyPaid,
            Rejection::ExceedsRemainingAmount => PaymentOutcome::ExceedsRemainingAmount,
            Rejection::ExceedsInvoiceAmount => PaymentOutcome::ExceedsInvoiceAmount,
        }
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PaymentOutcome::from(*self).message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InvoiceType, Payment};
    use crate::money::Money;
    use rust_decimal_macros::dec;

    fn invoice_with(amount: Money, payments: &[Money]) -> Invoice {
        let mut invoice = Invoice::new("INV-1", InvoiceType::Standard, amount);
        for p in payments {
            invoice.apply_payment(Payment::new("INV-1", *p));
        }
        invoice
    }

    #[test]
    fn test_first_payment_settles() {
        let invoice = invoice_with(Money::new(dec!(10)), &[Money::new(dec!(10))]);
        assert_eq!(PaymentOutcome::after_payment(&invoice), PaymentOutcome::FullyPaid);
    }

    #[test]
    fn test_later_payment_settles() {
        let invoice = invoice_with(
            Money::new(dec!(10)),
            &[Money::new(dec!(5)), Money::new(dec!(5))],
        );
        assert_eq!(
            PaymentOutcome::after_payment(&invoice),
            PaymentOutcome::FinalPartialPayment
        );
    }

    #[test]
    fn test_first_payment_partial() {
        let invoice = invoice_with(Money::new(dec!(10)), &[Money::new(dec!(2))]);
        assert_eq!(PaymentOutcome::after_payment(&invoice), PaymentOutcome::PartiallyPaid);
    }

    #[test]
    fn test_later_payment_partial() {
        let invoice = invoice_with(
            Money::new(dec!(10)),
            &[Money::new(dec!(2)), Money::new(dec!(3))],
        );
        assert_eq!(
            PaymentOutcome::after_payment(&invoice),
            PaymentOutcome::AnotherPartialPayment
        );
    }

    #[test]
    fn test_settlement_uses_exact_equality() {
        let invoice = invoice_with(Money::new(dec!(10)), &[Money::new(dec!(9.9999999))]);
        assert_eq!(PaymentOutcome::after_payment(&invoice), PaymentOutcome::PartiallyPaid);
    }

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(PaymentOutcome::NoPaymentNeeded.to_string(), "no payment needed");
        assert_eq!(
            PaymentOutcome::AlreadyFullyPaid.to_string(),
            "invoice was already fully paid"
        );
        assert_eq!(
            PaymentOutcome::ExceedsRemainingAmount.to_string(),
            "the payment is greater than the partial amount remaining"
        );
        assert_eq!(
            PaymentOutcome::ExceedsInvoiceAmount.to_string(),
            "the payment is greater than the invoice amount"
        );
        assert_eq!(
            PaymentOutcome::FinalPartialPayment.to_string(),
            "final partial payment received, invoice is now fully paid"
        );
        assert_eq!(
            PaymentOutcome::AnotherPartialPayment.to_string(),
            "another partial payment received, still not fully paid"
        );
    }

    #[test]
    fn test_only_settlement_outcomes_are_applied() {
        assert!(!PaymentOutcome::NoPaymentNeeded.is_applied());
        assert!(!PaymentOutcome::ExceedsInvoiceAmount.is_applied());
        assert!(PaymentOutcome::PartiallyPaid.is_applied());
        assert!(PaymentOutcome::FinalPartialPayment.is_applied());
    }

    #[test]
    fn test_rejections_are_never_applied() {
        for rejection in [
            Rejection::NoPaymentNeeded,
            Rejection::AlreadyFullyPaid,
            Rejection::ExceedsRemainingAmount,
            Rejection::ExceedsInvoiceAmount,
        ] {
            let outcome = PaymentOutcome::from(rejection);
            assert!(!outcome.is_applied(), "{:?} must not count as applied", rejection);
            assert_eq!(rejection.to_string(), outcome.message());
        }
    }
}
