//! Invoice lookup and persistence.
//!
//! The processor only talks to storage through [`InvoiceRepository`]. The
//! in-memory implementation backs the CLI and the tests.

use crate::error::{EngineError, Result};
use crate::invoice::Invoice;
use crate::record::InvoiceRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use std::collections::HashMap;
use std::io::Read;

/// Storage collaborator for invoices.
pub trait InvoiceRepository {
    /// Looks up an invoice by reference. Absence is `Ok(None)`, not an error.
    fn get_invoice(&self, reference: &str) -> Result<Option<Invoice>>;

    /// Stores an invoice, replacing any previous version with the same reference.
    fn save(&mut self, invoice: Invoice) -> Result<()>;
}

/// Invoices kept in a `HashMap` keyed by reference.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: HashMap<String, Invoice>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self {
            invoices: HashMap::new(),
        }
    }

    /// Adds or replaces an invoice.
    pub fn insert(&mut self, invoice: Invoice) {
        self.invoices.insert(invoice.reference.clone(), invoice);
    }

    /// Loads invoices from CSV with header `reference,type,amount`.
    ///
    /// Unlike payment rows, a bad invoice row aborts the load: guessing a
    /// category or skipping an invoice would change every later outcome.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut loaded = 0;
        for (row_idx, result) in csv_reader.deserialize::<InvoiceRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row
            let invoice = result?.parse(row)?;

            if self.invoices.contains_key(&invoice.reference) {
                return Err(EngineError::DuplicateInvoice {
                    reference: invoice.reference,
                    row,
                });
            }

            debug!(
                "Row {}: Loaded {} invoice {} for {}",
                row,
                invoice.invoice_type.as_str(),
                invoice.reference,
                invoice.amount
            );
            self.insert(invoice);
            loaded += 1;
        }

        info!("Loaded {} invoices", loaded);
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// All stored invoices, sorted by reference.
    pub fn invoices(&self) -> Vec<&Invoice> {
        let mut invoices: Vec<_> = self.invoices.values().collect();
        invoices.sort_by(|a, b| a.reference.cmp(&b.reference));
        invoices
    }
}

impl InvoiceRepository for InMemoryInvoiceRepository {
    fn get_invoice(&self, reference: &str) -> Result<Option<Invoice>> {
        Ok(self.invoices.get(reference).cloned())
    }

    fn save(&mut self, invoice: Invoice) -> Result<()> {
        debug!("Saving invoice {}", invoice.reference);
        self.insert(invoice);
        Ok(())
    }
}
