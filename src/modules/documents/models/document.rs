use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Money, Result};
use crate::modules::documents::models::graph;
use crate::modules::payroll::models::{
    default_earning_rules, DeductionsBreakdown, EarningRule, EarningsBreakdown, ProrationContext,
    SalaryBasis,
};
use crate::modules::payroll::services::ProrationEngine;
use crate::modules::taxes::models::{TaxBreakdown, TaxSpec};
use crate::modules::taxes::services::TaxCalculator;
use crate::modules::words::services::WordsConverter;

/// A payslip's stated month and year; the calendar length of this month is
/// what proration divides by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

/// Addressable document fields. Derived fields are listed so a write against
/// them can be rejected by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPath {
    // payslip inputs
    BaseSalary,
    PayableDays,
    Period,
    Deduction(String),
    // invoice inputs
    NetAmount,
    GstPercent,
    ServiceLabel,
    // derived
    Earnings,
    GrossPay,
    NetPay,
    AmountInWords,
    TaxLines,
    TotalAmount,
    DisplayServiceCharge,
}

impl FieldPath {
    /// The graph node name for this path
    pub fn name(&self) -> &'static str {
        match self {
            FieldPath::BaseSalary => "base_salary",
            FieldPath::PayableDays => "payable_days",
            FieldPath::Period => "period",
            FieldPath::Deduction(_) => "deductions",
            FieldPath::NetAmount => "net_amount",
            FieldPath::GstPercent => "gst_percent",
            FieldPath::ServiceLabel => "service_label",
            FieldPath::Earnings => "earnings",
            FieldPath::GrossPay => "gross_pay",
            FieldPath::NetPay => "net_pay",
            FieldPath::AmountInWords => "amount_in_words",
            FieldPath::TaxLines => "tax_lines",
            FieldPath::TotalAmount => "total_amount",
            FieldPath::DisplayServiceCharge => "display_service_charge",
        }
    }
}

/// Typed value for a field update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Amount(Decimal),
    Days(i64),
    Period(Period),
    Percent(Decimal),
    Text(String),
}

/// One salary slip: earnings prorated off the base salary and period,
/// deductions as independent inputs, everything below the line derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipDocument {
    pub id: Uuid,
    // inputs
    pub salary_basis: SalaryBasis,
    pub payable_days: i64,
    pub period: Period,
    pub earning_rules: Vec<EarningRule>,
    pub deductions: DeductionsBreakdown,
    // derived
    pub earnings: EarningsBreakdown,
    pub gross_pay: Money,
    pub net_pay: Money,
    pub amount_in_words: String,
    /// Stamped once at finalization
    pub reference_code: Option<String>,
}

impl PayslipDocument {
    pub(crate) fn new(id: Uuid, salary_basis: SalaryBasis, payable_days: i64, period: Period) -> Self {
        Self {
            id,
            salary_basis,
            payable_days,
            period,
            earning_rules: default_earning_rules(),
            deductions: DeductionsBreakdown::new(),
            earnings: EarningsBreakdown::default(),
            gross_pay: Money::ZERO,
            net_pay: Money::ZERO,
            amount_in_words: String::new(),
            reference_code: None,
        }
    }

    /// Recompute every derived field, in the order declared by
    /// [`graph::PAYSLIP_DERIVED`]
    pub(crate) fn recompute(&mut self, words: &WordsConverter) -> Result<()> {
        let ctx = ProrationContext::new(
            self.payable_days,
            self.period.month,
            self.period.year,
            self.salary_basis.reference_base(),
        )?;
        self.earnings =
            ProrationEngine::compute_earnings(&self.salary_basis, &ctx, &self.earning_rules)?;
        self.gross_pay = self.earnings.gross();
        self.net_pay = self.gross_pay.saturating_sub(self.deductions.total());
        self.amount_in_words = words.money_to_words(&self.net_pay)?;
        Ok(())
    }
}

/// One tax invoice: a net amount with a nominal GST percentage split into
/// CGST/SGST lines, total and words derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub id: Uuid,
    // inputs
    pub net_amount: Money,
    /// Nominal GST percentage, stated as two equal half-rate lines
    pub gst_percent: Decimal,
    pub service_label: String,
    // derived
    pub tax: TaxBreakdown,
    pub total_amount: Money,
    pub amount_in_words: String,
    pub display_service_charge: String,
    /// Stamped once at finalization
    pub reference_code: Option<String>,
}

impl InvoiceDocument {
    pub(crate) fn new(
        id: Uuid,
        net_amount: Money,
        gst_percent: Decimal,
        service_label: &str,
    ) -> Self {
        Self {
            id,
            net_amount,
            gst_percent,
            service_label: service_label.to_string(),
            tax: TaxBreakdown::default(),
            total_amount: Money::ZERO,
            amount_in_words: String::new(),
            display_service_charge: String::new(),
            reference_code: None,
        }
    }

    /// Recompute every derived field, in the order declared by
    /// [`graph::INVOICE_DERIVED`]
    pub(crate) fn recompute(&mut self, words: &WordsConverter) -> Result<()> {
        let spec = TaxSpec::symmetric_split("CGST", "SGST", self.gst_percent)?;
        self.tax = TaxCalculator::new().apply(self.net_amount.value(), &spec)?;
        self.total_amount = self.tax.total;
        self.amount_in_words = words.money_to_words(&self.total_amount)?;
        self.display_service_charge =
            format!("{}: {}", self.service_label, self.total_amount);
        Ok(())
    }
}

/// A fully computed document as handed to renderers and persistence.
/// Derived fields are always consistent with the inputs; a consumer must
/// never re-derive or adjust any numeric field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComputedDocument {
    Payslip(PayslipDocument),
    Invoice(InvoiceDocument),
}

impl ComputedDocument {
    pub fn id(&self) -> Uuid {
        match self {
            ComputedDocument::Payslip(doc) => doc.id,
            ComputedDocument::Invoice(doc) => doc.id,
        }
    }

    pub fn amount_in_words(&self) -> &str {
        match self {
            ComputedDocument::Payslip(doc) => &doc.amount_in_words,
            ComputedDocument::Invoice(doc) => &doc.amount_in_words,
        }
    }

    pub fn reference_code(&self) -> Option<&str> {
        match self {
            ComputedDocument::Payslip(doc) => doc.reference_code.as_deref(),
            ComputedDocument::Invoice(doc) => doc.reference_code.as_deref(),
        }
    }

    /// The declared derived-field chain for this document kind
    pub fn derived_fields(&self) -> &'static [&'static str] {
        match self {
            ComputedDocument::Payslip(_) => graph::PAYSLIP_DERIVED,
            ComputedDocument::Invoice(_) => graph::INVOICE_DERIVED,
        }
    }

    pub(crate) fn is_derived(&self, path: &FieldPath) -> bool {
        self.derived_fields().contains(&path.name())
    }

    pub(crate) fn set_reference_code(&mut self, code: String) {
        match self {
            ComputedDocument::Payslip(doc) => doc.reference_code = Some(code),
            ComputedDocument::Invoice(doc) => doc.reference_code = Some(code),
        }
    }

    /// Write one input field. Callers must have already rejected derived
    /// paths; anything unmatched here is a value-shape or document-kind
    /// mismatch.
    pub(crate) fn apply_input(&mut self, path: FieldPath, value: FieldValue) -> Result<()> {
        match (self, &path, value) {
            (ComputedDocument::Payslip(doc), FieldPath::BaseSalary, FieldValue::Amount(v)) => {
                doc.salary_basis = SalaryBasis::from_base_salary(Some(v));
            }
            (ComputedDocument::Payslip(doc), FieldPath::PayableDays, FieldValue::Days(n)) => {
                doc.payable_days = n;
            }
            (ComputedDocument::Payslip(doc), FieldPath::Period, FieldValue::Period(p)) => {
                doc.period = p;
            }
            (
                ComputedDocument::Payslip(doc),
                FieldPath::Deduction(name),
                FieldValue::Amount(v),
            ) => {
                doc.deductions.set(name, Money::new(v)?);
            }
            (ComputedDocument::Invoice(doc), FieldPath::NetAmount, FieldValue::Amount(v)) => {
                doc.net_amount = Money::new(v)?;
            }
            (ComputedDocument::Invoice(doc), FieldPath::GstPercent, FieldValue::Percent(v)) => {
                doc.gst_percent = v;
            }
            (ComputedDocument::Invoice(doc), FieldPath::ServiceLabel, FieldValue::Text(s)) => {
                doc.service_label = s;
            }
            _ => {
                return Err(AppError::invalid_field_value(format!(
                    "field '{}' does not accept this value on this document",
                    path.name()
                )))
            }
        }
        Ok(())
    }

    pub(crate) fn recompute(&mut self, words: &WordsConverter) -> Result<()> {
        match self {
            ComputedDocument::Payslip(doc) => doc.recompute(words),
            ComputedDocument::Invoice(doc) => doc.recompute(words),
        }
    }
}
