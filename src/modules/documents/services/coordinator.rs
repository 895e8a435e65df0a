use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{AppError, Money, Result};
use crate::modules::documents::models::{
    ComputedDocument, FieldPath, FieldValue, InvoiceDocument, PayslipDocument, Period,
};
use crate::modules::payroll::models::SalaryBasis;
use crate::modules::sequences::services::SequenceIssuer;
use crate::modules::words::services::WordsConverter;

/// Owns the mutable field set of open documents and keeps every derived
/// field consistent with the inputs.
///
/// Every `update` call recomputes the whole dependent chain before
/// returning, on a scratch copy that is committed atomically. A failed
/// update leaves the document exactly as it was; there is never an
/// observable state where one derived field reflects old inputs and another
/// reflects new ones.
pub struct RecalculationCoordinator {
    documents: HashMap<Uuid, ComputedDocument>,
    words: WordsConverter,
}

impl RecalculationCoordinator {
    pub fn new() -> Self {
        Self::with_converter(WordsConverter::indian())
    }

    pub fn with_converter(words: WordsConverter) -> Self {
        Self {
            documents: HashMap::new(),
            words,
        }
    }

    /// Open a payslip document and compute all derived fields immediately
    pub fn open_payslip(
        &mut self,
        salary_basis: SalaryBasis,
        payable_days: i64,
        period: Period,
    ) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut document =
            ComputedDocument::Payslip(PayslipDocument::new(id, salary_basis, payable_days, period));
        document.recompute(&self.words)?;
        self.documents.insert(id, document);
        info!(%id, "opened payslip document");
        Ok(id)
    }

    /// Open an invoice document and compute all derived fields immediately
    pub fn open_invoice(
        &mut self,
        net_amount: Decimal,
        gst_percent: Decimal,
        service_label: &str,
    ) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut document = ComputedDocument::Invoice(InvoiceDocument::new(
            id,
            Money::new(net_amount)?,
            gst_percent,
            service_label,
        ));
        document.recompute(&self.words)?;
        self.documents.insert(id, document);
        info!(%id, "opened invoice document");
        Ok(id)
    }

    pub fn document(&self, id: Uuid) -> Result<&ComputedDocument> {
        self.documents
            .get(&id)
            .ok_or_else(|| AppError::document_not_found(id.to_string()))
    }

    /// Write one input field and recompute everything declared dependent on
    /// it, in topological order.
    ///
    /// Writes to derived fields are rejected; the caller must update the
    /// upstream input instead.
    pub fn update(
        &mut self,
        id: Uuid,
        path: FieldPath,
        value: FieldValue,
    ) -> Result<&ComputedDocument> {
        let slot = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| AppError::document_not_found(id.to_string()))?;

        if slot.is_derived(&path) {
            return Err(AppError::derived_field(path.name()));
        }

        // scratch copy: the document only ever changes as a whole
        let mut scratch = slot.clone();
        scratch.apply_input(path.clone(), value)?;
        scratch.recompute(&self.words)?;
        *slot = scratch;

        debug!(%id, field = path.name(), "recomputed document");
        Ok(&*slot)
    }

    /// Stamp a reference code from the issuer and return the snapshot to
    /// hand to persistence and rendering. Idempotent: a document is only
    /// ever stamped once, so re-finalizing cannot burn sequence values.
    pub fn finalize(
        &mut self,
        id: Uuid,
        issuer: &SequenceIssuer,
        namespace: &str,
    ) -> Result<ComputedDocument> {
        let slot = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| AppError::document_not_found(id.to_string()))?;

        if slot.reference_code().is_none() {
            let code = issuer.issue_next(namespace)?;
            info!(%id, %code, "finalized document");
            slot.set_reference_code(code);
        }

        Ok(slot.clone())
    }

    /// Discard a document
    pub fn close(&mut self, id: Uuid) -> Result<()> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::document_not_found(id.to_string()))
    }
}

impl Default for RecalculationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
