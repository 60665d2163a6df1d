use std::io::Read;

use clap::{Args, Parser, Subcommand};
use cron_schedule_core::{Schedule, describe, to_cron_string};
use cron_schedule_parser::report::ParseOutcome;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "schedule-inspect")]
#[command(about = "Parse cron expressions into normalized schedules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a single cron expression.
    Parse(ParseArgs),
    /// Parse expressions from stdin, one per line.
    ParseStdin(ParseStdinArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// The cron expression or alias (quote it: "0,30 9-17 * * 1").
    expression: String,
    /// Output the parse report alongside the schedule.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Output the parse report alongside each schedule.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let output = render_expression(&args.expression, args.with_report, args.format)?;
    print!("{output}");
    Ok(())
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;

    for expression in non_empty_lines(&input) {
        let output = render_expression(expression, args.with_report, args.format)?;
        print!("{output}");
        if args.format == OutputFormat::Text {
            println!();
        }
    }
    Ok(())
}

fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn render_expression(
    expression: &str,
    with_report: bool,
    format: OutputFormat,
) -> Result<String, String> {
    if with_report {
        let outcome = cron_schedule_parser::parse_with_report(expression);
        format_outcome(&outcome, format)
    } else {
        let schedule = cron_schedule_parser::parse(expression);
        format_schedule(&schedule, format)
    }
}

fn format_schedule(schedule: &Schedule, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(schedule)
                .map_err(|err| format!("Failed to serialize schedule: {err}"))?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Yaml => serde_yaml::to_string(schedule)
            .map_err(|err| format!("Failed to serialize schedule: {err}")),
        OutputFormat::Text => Ok(describe(schedule)),
    }
}

fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome)
                .map_err(|err| format!("Failed to serialize outcome: {err}"))?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Yaml => serde_yaml::to_string(outcome)
            .map_err(|err| format!("Failed to serialize outcome: {err}")),
        OutputFormat::Text => {
            let mut out = describe(&outcome.schedule);
            out.push_str(&format!("normalized:   {}\n", to_cron_string(&outcome.schedule)));
            out.push_str(&format!(
                "terms:        {}/{} recognized\n",
                outcome.report.terms_recognized, outcome.report.terms_total
            ));
            for term in &outcome.report.unresolved_terms {
                out.push_str(&format!("unresolved:   {term}\n"));
            }
            for warning in &outcome.report.warnings {
                out.push_str(&format!("warning:      {warning}\n"));
            }
            if let Some(detail) = &outcome.report.failure_detail {
                out.push_str(&format!("failure:      {detail}\n"));
            }
            Ok(out)
        }
    }
}
