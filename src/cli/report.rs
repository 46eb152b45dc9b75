//! CLI commands for reports
//!
//! Generates the P&L and cashflow statements and writes them to stdout in
//! the requested form.

use std::io::{self, Write};

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::Settings;
use crate::display::format_statement;
use crate::error::FinreportResult;
use crate::export::{export_report_json, export_report_yaml, export_statement_csv};
use crate::reports::{CashflowReport, ProfitAndLossReport, Statement};
use crate::services::parse_report_date;
use crate::storage::LedgerSource;

/// Output form of a generated report
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Emit {
    /// Terminal grid
    #[default]
    Table,
    /// Nested JSON document
    Json,
    /// Nested YAML document
    Yaml,
    /// One row per statement line
    Csv,
}

/// Options shared by every report
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date (DD/MM/YYYY)
    #[arg(short, long)]
    pub start: String,

    /// End date (DD/MM/YYYY)
    #[arg(short, long)]
    pub end: String,

    /// Report format: 'yearly' (single Total column) or 'monthly' (column per month)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Location filter; 'All' for every location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Output form
    #[arg(long, value_enum, default_value_t = Emit::Table)]
    pub emit: Emit,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate a Profit & Loss statement
    #[command(alias = "profit-and-loss")]
    Pnl {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Generate a cashflow statement
    Cashflow {
        #[command(flatten)]
        args: ReportArgs,

        /// Cash on hand at the start of the range
        #[arg(long, allow_hyphen_values = true)]
        opening_balance: Option<f64>,
    },
}

/// Handle report commands
pub fn handle_report_command<S: LedgerSource + ?Sized>(
    source: &S,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinreportResult<()> {
    match cmd {
        ReportCommands::Pnl { args } => {
            let request = ResolvedRequest::from_args(&args, settings)?;
            let report = ProfitAndLossReport::generate(
                source,
                request.start,
                request.end,
                &request.format,
                &request.location,
            )?;
            emit_report(&report, args.emit, settings)
        }
        ReportCommands::Cashflow {
            args,
            opening_balance,
        } => {
            let request = ResolvedRequest::from_args(&args, settings)?;
            let report = CashflowReport::generate(
                source,
                request.start,
                request.end,
                &request.format,
                &request.location,
                opening_balance.unwrap_or(settings.default_opening_balance),
            )?;
            emit_report(&report, args.emit, settings)
        }
    }
}

/// Report arguments with settings defaults applied
#[derive(Debug)]
struct ResolvedRequest {
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    format: String,
    location: String,
}

impl ResolvedRequest {
    fn from_args(args: &ReportArgs, settings: &Settings) -> FinreportResult<Self> {
        Ok(Self {
            start: parse_report_date("start_date", &args.start, &settings.input_date_format)?,
            end: parse_report_date("end_date", &args.end, &settings.input_date_format)?,
            format: args
                .format
                .clone()
                .unwrap_or_else(|| settings.default_format.to_string()),
            location: args
                .location
                .clone()
                .unwrap_or_else(|| settings.default_location.clone()),
        })
    }
}

fn emit_report<T: Serialize + Statement>(
    report: &T,
    emit: Emit,
    settings: &Settings,
) -> FinreportResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match emit {
        Emit::Table => write!(out, "{}", format_statement(report, &settings.currency_symbol))?,
        Emit::Json => export_report_json(report, &mut out)?,
        Emit::Yaml => export_report_yaml(report, &mut out)?,
        Emit::Csv => export_statement_csv(report, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinreportError;
    use crate::models::Granularity;

    fn args(start: &str, end: &str) -> ReportArgs {
        ReportArgs {
            start: start.into(),
            end: end.into(),
            format: None,
            location: None,
            emit: Emit::Json,
        }
    }

    #[test]
    fn test_request_uses_settings_defaults() {
        let settings = Settings {
            default_format: Granularity::Monthly,
            default_location: "Bkk".into(),
            ..Settings::default()
        };

        let request = ResolvedRequest::from_args(&args("01/01/2025", "31/03/2025"), &settings).unwrap();
        assert_eq!(request.format, "monthly");
        assert_eq!(request.location, "Bkk");
        assert_eq!(request.end, chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_request_rejects_iso_dates() {
        let err = ResolvedRequest::from_args(&args("2025-01-01", "31/03/2025"), &Settings::default())
            .unwrap_err();
        assert!(matches!(err, FinreportError::InvalidDate { field: "start_date", .. }));
    }
}
