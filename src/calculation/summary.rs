//! Plain-text rendering of a [`DurationResult`].

use std::fmt::Write;

use crate::models::DurationResult;

use super::display_decimal;

const RULE: &str = "======================================================================";

/// Renders a result as a fixed-layout text report.
///
/// The report lists the inputs, each pipeline step, the final duration in
/// months and years, and the extension caused by part time.
pub fn format_summary(result: &DurationResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, result);
    out
}

fn write_summary(out: &mut String, result: &DurationResult) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "PART-TIME TRAINING DURATION")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "INPUT:")?;
    writeln!(
        out,
        "  Full-time training duration:     {} months",
        result.original_months
    )?;
    writeln!(
        out,
        "  Part-time share:                 {:.1}%",
        result.part_time_percentage
    )?;
    writeln!(
        out,
        "  Part-time hours:                 {:.1} hours per week",
        result.part_time_hours
    )?;
    writeln!(out)?;
    writeln!(out, "STEPS:")?;
    writeln!(
        out,
        "  1. After shortening:             {} months",
        result.shortened_months
    )?;
    writeln!(
        out,
        "     (total shortening: {} months)",
        result.total_shortening_months
    )?;
    writeln!(
        out,
        "  2. After part-time extension:    {:.1} months",
        result.after_extension_months
    )?;
    writeln!(
        out,
        "  3. After upper bound:            {:.1} months",
        result.after_upper_bound_months
    )?;
    writeln!(
        out,
        "  4. After rounding down:          {} months",
        result.final_months
    )?;
    if result.no_disadvantage_applied {
        writeln!(
            out,
            "     (overrun within tolerance, reset to {} months under § 8 Abs. 3 BBiG)",
            result.original_months
        )?;
    }
    writeln!(out)?;
    writeln!(out, "RESULT:")?;
    writeln!(
        out,
        "  Final training duration:         {} months ({} years)",
        result.final_months,
        display_decimal(result.final_years)
    )?;
    writeln!(
        out,
        "  Extension due to part time:      {} months",
        result.extension_months
    )?;
    for warning in &result.audit_trace.warnings {
        writeln!(out, "  Note: {}", warning.message)?;
    }
    write!(out, "{}", RULE)
}
