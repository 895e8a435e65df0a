//! Statically declared field dependency graph.
//!
//! The recompute order is fixed at compile time rather than inferred from
//! runtime state, so recomputation order and completeness can be checked
//! without any UI attached. Each edge list is in topological order; the
//! `*_DERIVED` slices are the full recompute chains.

/// Payslip derived fields in recompute (topological) order
pub const PAYSLIP_DERIVED: &[&str] = &["earnings", "gross_pay", "net_pay", "amount_in_words"];

/// Payslip input field -> derived fields that must recompute after it changes
pub const PAYSLIP_EDGES: &[(&str, &[&str])] = &[
    (
        "base_salary",
        &["earnings", "gross_pay", "net_pay", "amount_in_words"],
    ),
    (
        "payable_days",
        &["earnings", "gross_pay", "net_pay", "amount_in_words"],
    ),
    (
        "period",
        &["earnings", "gross_pay", "net_pay", "amount_in_words"],
    ),
    ("deductions", &["net_pay", "amount_in_words"]),
];

/// Invoice derived fields in recompute (topological) order
pub const INVOICE_DERIVED: &[&str] = &[
    "tax_lines",
    "total_amount",
    "amount_in_words",
    "display_service_charge",
];

/// Invoice input field -> derived fields that must recompute after it changes
pub const INVOICE_EDGES: &[(&str, &[&str])] = &[
    (
        "net_amount",
        &[
            "tax_lines",
            "total_amount",
            "amount_in_words",
            "display_service_charge",
        ],
    ),
    (
        "gst_percent",
        &[
            "tax_lines",
            "total_amount",
            "amount_in_words",
            "display_service_charge",
        ],
    ),
    ("service_label", &["display_service_charge"]),
];

/// The derived fields downstream of one input field, empty for unknown names
pub fn dependents_of(
    edges: &'static [(&'static str, &'static [&'static str])],
    field_name: &str,
) -> &'static [&'static str] {
    edges
        .iter()
        .find(|(input, _)| *input == field_name)
        .map(|(_, dependents)| *dependents)
        .unwrap_or(&[])
}
