//! Plain-text rendering of the form and the unit table.

use etacalc_core::form::{progress_bar, status_lines, EtaForm};
use etacalc_core::{Base, Field, Measurement};
use std::fmt::Write;

fn amount_text(amount: Option<f64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Field values, progress bar, status fields and any validation messages.
pub fn render_form(form: &EtaForm, bar_width: usize) -> String {
    let report = form.report();
    let mut out = String::new();

    for field in Field::ALL {
        let q = form.quantity(field);
        let _ = writeln!(
            out,
            "{:<20} {} {}",
            format!("{}:", field.label()),
            amount_text(q.amount),
            q.unit.display_name
        );
    }
    let _ = writeln!(out, "{}", progress_bar(report.percent, bar_width));
    for line in status_lines(&report) {
        let _ = writeln!(out, "{line}");
    }
    for issue in &report.issues {
        let _ = writeln!(out, "  ! {}: {}", issue.field().label(), issue);
    }
    out
}

pub fn render_units(base: Base, measurements: &[Measurement]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Base {} ({} per step)", base, base.multiplier());
    let _ = writeln!(out, "  {:<10}  {:<4}  {:>20}", "NAME", "ABBR", "BITS");
    for m in measurements {
        let _ = writeln!(out, "  {:<10}  {:<4}  {:>20}", m.name, m.abbreviation, m.bits);
    }
    out
}
