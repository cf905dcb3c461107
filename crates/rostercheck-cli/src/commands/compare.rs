use crate::commands::{print_json, Context};
use crate::error::{invalid_input, CliError};
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use rostercheck_config::OutputFormat;
use rostercheck_core::{validate_threshold, ComparisonReport, DiscrepancyReason, MatchOptions};
use rostercheck_io::{load_contacts, render_report, ReportFormat};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Trusted roster (.csv or .json)
    pub official: PathBuf,
    /// Roster under scrutiny (.csv or .json)
    pub suspect: PathBuf,
    #[arg(long, overrides_with = "no_fuzzy", help = "Fall back to name similarity")]
    pub fuzzy: bool,
    #[arg(long, overrides_with = "fuzzy")]
    pub no_fuzzy: bool,
    #[arg(long, help = "Minimum similarity score (0-100) for a fuzzy match")]
    pub threshold: Option<i64>,
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    #[arg(long, help = "Write the report to a file instead of stdout")]
    pub out: Option<PathBuf>,
    #[arg(long, help = "Exit with status 4 when any discrepancy is found")]
    pub fail_on_discrepancy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
    Html,
    Xlsx,
}

impl From<OutputFormat> for FormatArg {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => FormatArg::Table,
            OutputFormat::Csv => FormatArg::Csv,
            OutputFormat::Json => FormatArg::Json,
            OutputFormat::Html => FormatArg::Html,
            OutputFormat::Xlsx => FormatArg::Xlsx,
        }
    }
}

impl FormatArg {
    fn report_format(self) -> Option<ReportFormat> {
        match self {
            FormatArg::Table => None,
            FormatArg::Csv => Some(ReportFormat::Csv),
            FormatArg::Json => Some(ReportFormat::Json),
            FormatArg::Html => Some(ReportFormat::Html),
            FormatArg::Xlsx => Some(ReportFormat::Xlsx),
        }
    }
}

pub fn compare(ctx: &Context<'_>, args: CompareArgs) -> Result<()> {
    let options = resolve_options(ctx, &args)?;
    let format = args
        .format
        .unwrap_or_else(|| FormatArg::from(ctx.config.report.format));
    if format == FormatArg::Table && args.out.is_some() {
        return Err(invalid_input("--out requires --format csv, json, html or xlsx"));
    }
    if let Some(report_format) = format.report_format() {
        if report_format.is_binary() && args.out.is_none() {
            return Err(invalid_input(format!(
                "--format {} requires --out",
                report_format.as_str()
            )));
        }
    }

    let official = load_contacts(&args.official)
        .with_context(|| format!("load official contacts {}", args.official.display()))?;
    let suspect = load_contacts(&args.suspect)
        .with_context(|| format!("load suspect contacts {}", args.suspect.display()))?;
    debug!(
        official = official.len(),
        suspect = suspect.len(),
        fuzzy = options.fuzzy_enabled,
        threshold = options.fuzzy_threshold,
        "contacts loaded"
    );

    let report = rostercheck_core::compare(&official, &suspect, options);
    log_report(&report);

    match (ctx.json, format.report_format()) {
        (true, Some(report_format)) if args.out.is_some() => {
            let data = render_report(&report.verdicts, report_format)?;
            write_output(args.out.as_deref(), &data)?;
            print_json(&report)?;
        }
        (true, _) => print_json(&report)?,
        (false, Some(report_format)) => {
            let data = render_report(&report.verdicts, report_format)?;
            write_output(args.out.as_deref(), &data)?;
            if let Some(path) = args.out.as_deref() {
                println!(
                    "Wrote {} discrepancies to {}",
                    report.verdicts.len(),
                    path.display()
                );
            }
        }
        (false, None) => print!("{}", render_table(&report)),
    }

    if args.fail_on_discrepancy && report.has_discrepancies() {
        return Err(CliError::DiscrepanciesFound(report.verdicts.len()).into());
    }
    Ok(())
}

fn resolve_options(ctx: &Context<'_>, args: &CompareArgs) -> Result<MatchOptions> {
    let mut options = ctx.config.matching;
    if args.fuzzy {
        options.fuzzy_enabled = true;
    }
    if args.no_fuzzy {
        options.fuzzy_enabled = false;
    }
    if let Some(threshold) = args.threshold {
        options.fuzzy_threshold = validate_threshold(threshold)?;
    }
    Ok(options)
}

fn log_report(report: &ComparisonReport) {
    if report.empty_roster {
        warn!("official roster has no usable contacts; every suspect will be reported");
    }
    for name in &report.duplicate_official_names {
        warn!(name = %name, "duplicate official name, last record wins");
    }
    if report.skipped_official_empty_name > 0 || report.skipped_suspect_empty_name > 0 {
        debug!(
            official = report.skipped_official_empty_name,
            suspect = report.skipped_suspect_empty_name,
            "skipped contacts with empty names"
        );
    }
    for note in &report.fuzzy_matches {
        debug!(
            suspect = %note.suspect_name,
            official = %note.official_name,
            score = note.score,
            "fuzzy match"
        );
    }
}

fn write_output(out: Option<&Path>, data: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("create report directory {}", parent.display()))?;
                }
            }
            fs::write(path, data)
                .with_context(|| format!("write report file {}", path.display()))?;
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn render_table(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Compared {} suspect contact(s) against {} official contact(s).\n",
        report.suspect_count, report.official_count
    ));
    if report.empty_roster {
        out.push_str("Official roster is empty; every suspect is reported as not found.\n");
    }
    if !report.duplicate_official_names.is_empty() {
        out.push_str(&format!(
            "Duplicate official names (last record kept): {}\n",
            report.duplicate_official_names.join(", ")
        ));
    }

    if report.verdicts.is_empty() {
        out.push_str("No discrepancies found.\n");
        return out;
    }

    out.push_str(&format!(
        "{} discrepancies ({}):\n",
        report.verdicts.len(),
        reason_summary(report)
    ));
    for verdict in &report.verdicts {
        out.push_str(&format!("\n{}: {}\n", verdict.name, verdict.reason));
        out.push_str(&format!(
            "  suspect:  {} {}\n",
            display_or_dash(&verdict.suspect_email),
            display_or_dash(&verdict.suspect_phone)
        ));
        if !verdict.official_email.is_empty() || !verdict.official_phone.is_empty() {
            out.push_str(&format!(
                "  official: {} {}\n",
                display_or_dash(&verdict.official_email),
                display_or_dash(&verdict.official_phone)
            ));
        }
    }
    out
}

fn reason_summary(report: &ComparisonReport) -> String {
    DiscrepancyReason::all()
        .iter()
        .filter_map(|reason| {
            let count = report
                .verdicts
                .iter()
                .filter(|verdict| verdict.reasons().contains(reason))
                .count();
            (count > 0).then(|| format!("{} {}", reason.as_str(), count))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
