//! Report formatting for terminal output
//!
//! Lays a [`Statement`] out as a grid: one row per line, one column per
//! period.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::reports::{LineKind, Statement};

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 still prints as 0.00
    if value < 0.0 && formatted != "0.00" {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// Format a header line with padding
fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Render a statement as a table
pub fn format_statement(report: &dyn Statement, currency_symbol: &str) -> String {
    let info = report.info();
    let mut builder = Builder::default();

    let mut header = vec![format!("({})", currency_symbol)];
    header.extend(info.periods.iter().cloned());
    builder.push_record(header);

    for line in report.lines() {
        let indent = "  ".repeat(line.depth());
        let label = match line.kind {
            LineKind::Heading => line.label.to_uppercase(),
            LineKind::Item => format!("{}{}", indent, line.label),
            LineKind::Total => line.label.clone(),
        };

        let mut row = vec![label];
        match &line.amounts {
            Some(amounts) => row.extend(amounts.values().map(format_amount)),
            None => row.extend(info.periods.iter().map(|_| String::new())),
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    let rendered = table.to_string();

    let width = rendered.lines().next().map_or(0, |l| l.chars().count());
    format!(
        "{}\n{}\n{}\n",
        format_header(&report.title(), width),
        rendered,
        format_header(&format!("generated {}", info.generated_at.format("%Y-%m-%d %H:%M UTC")), width)
    )
}
