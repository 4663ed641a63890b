//! # Invoice Payments
//!
//! Validates incoming payments against invoices, applies the ones that are
//! acceptable and reports the resulting invoice status.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values with no forced scale
//! - **Ordered validation**: the first matching rule decides the outcome
//! - **Two failure channels**: informational rejections are `Ok` outcomes;
//!   a missing invoice or an inconsistent one is an `Err`
//! - **Storage behind a trait**: lookup and save go through [`InvoiceRepository`]
//!
//! ## Example
//!
//! ```
//! use invoice_payments::{Invoice, InvoiceType, Money, Payment, PaymentOutcome, PaymentProcessor};
//! use std::str::FromStr;
//!
//! let mut processor = PaymentProcessor::new();
//! let amount = Money::from_str("10").unwrap();
//! processor
//!     .repository_mut()
//!     .insert(Invoice::new("INV-1", InvoiceType::Standard, amount));
//!
//! let payment = Payment::new("INV-1", Money::from_str("2").unwrap());
//! let outcome = processor.process_payment(payment).unwrap();
//! assert_eq!(outcome, PaymentOutcome::PartiallyPaid);
//! assert_eq!(outcome.to_string(), "invoice is now partially paid");
//! ```

pub mod engine;
pub mod error;
pub mod invoice;
pub mod money;
pub mod outcome;
pub mod record;
pub mod repository;
pub mod validation;

pub use engine::{PaymentProcessor, PaymentResult, ResultKind};
pub use error::{EngineError, Result};
pub use invoice::{Invoice, InvoiceType, Payment, COMMERCIAL_TAX_RATE};
pub use money::Money;
pub use outcome::{PaymentOutcome, Rejection};
pub use record::{InvoiceRecord, PaymentRecord};
pub use repository::{InMemoryInvoiceRepository, InvoiceRepository};
pub use validation::{validate, Validation};
