//! Report formatting for the CLI
//!
//! Price levels render as thousands-grouped integers, matching how IDX
//! prices are quoted.

use crate::engine::AdvisorReport;

/// Format a price level as a thousands-grouped integer ("4,513")
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// CLI renderer for reports and errors
pub struct CliFormatter;

impl CliFormatter {
    pub fn format_report(&self, report: &AdvisorReport) -> String {
        let plan = &report.plan;
        let mut out = String::new();

        out.push_str(&format!("Hasil untuk {}\n", report.ticker));
        out.push_str(&format!(
            "Harga Terakhir: {}\n",
            format_thousands(plan.close)
        ));
        out.push_str(&format!("{}\n", plan.recommendation));
        out.push_str(&format!("{}\n", plan.rationale));

        out.push_str("\nTrade Plan\n");
        out.push_str(&format!("  Entry:    {}\n", format_thousands(plan.entry)));
        out.push_str(&format!("  Target 1: {}\n", format_thousands(plan.target1)));
        out.push_str(&format!("  Target 2: {}\n", format_thousands(plan.target2)));
        out.push_str(&format!("  Cutloss:  {}\n", format_thousands(plan.cutloss)));
        out.push_str(&format!(
            "  Support/Resistance (60D): {} / {}\n",
            format_thousands(plan.support),
            format_thousands(plan.resistance)
        ));

        out.push_str("\nNews Terkini\n");
        if report.news.is_empty() {
            out.push_str("  (tidak ada berita)\n");
        } else {
            for item in &report.news {
                out.push_str(&format!("  - {} ({})\n", item.title, item.link));
            }
        }

        out
    }

    pub fn format_error(&self, error: &str) -> String {
        format!("❌ Error: {error}")
    }
}
