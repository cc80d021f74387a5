mod cli;

use std::path::{Path, PathBuf};

use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use colored::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transcript_check::{
    config::Config,
    eligibility::{BatchChecker, CheckEngine, CheckOutcome, EligibilityEvaluator},
    error::{self, TranscriptError},
    report::{formatters, AuditLog},
    utils,
};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("transcript_check=info,audit=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Check {
            files,
            requester,
            plain_text,
            format,
        } => check_transcripts(&config, &files, requester, plain_text, format),

        Commands::Inspect {
            file,
            plain_text,
            format,
        } => inspect_transcript(&config, &file, plain_text, format),

        Commands::Thresholds => {
            show_thresholds(&config);
            Ok(())
        }

        Commands::Init { force } => initialize(&cli.config, force),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn build_engine(config: &Config, plain_text: bool) -> CheckEngine {
    let evaluator = EligibilityEvaluator::new(config.eligibility.clone());
    if plain_text {
        CheckEngine::plain_text(evaluator)
    } else {
        CheckEngine::pdf(evaluator)
    }
}

fn check_transcripts(
    config: &Config,
    files: &[PathBuf],
    requester: Option<String>,
    plain_text: bool,
    format: OutputFormat,
) -> error::Result<()> {
    let engine = build_engine(config, plain_text);
    let audit = AuditLog::new(&config.audit);
    let requester = requester.unwrap_or_else(|| config.audit.default_requester.clone());

    let summary = BatchChecker::new(&engine).check_all(files);

    let mut reports = Vec::new();
    for (path, outcome) in &summary.results {
        let audit_line = audit.record(&requester, outcome);

        match format {
            OutputFormat::Json => reports.push(serde_json::json!({
                "file": path.display().to_string(),
                "outcome": outcome,
                "response": formatters::user_response(outcome),
                "audit": audit_line,
            })),
            OutputFormat::Table => print_outcome(path, outcome, audit_line.as_deref()),
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Table if summary.total > 1 => summary.print_summary(),
        OutputFormat::Table => {}
    }

    if summary.failed > 0 {
        return Err(TranscriptError::Other(anyhow::anyhow!(
            "{} transcript(s) could not be processed",
            summary.failed
        )));
    }

    Ok(())
}

fn print_outcome(path: &Path, outcome: &CheckOutcome, audit_line: Option<&str>) {
    println!("\n{}", format!("=== {} ===", path.display()).cyan().bold());

    let response = formatters::user_response(outcome);
    match outcome {
        CheckOutcome::Eligible(_) => println!("{}", response.green()),
        CheckOutcome::NotEligible(_) => println!("{}", response.red()),
        CheckOutcome::Failed { reason } => {
            println!("{}", response.yellow());
            println!("Reason: {}", reason);
        }
    }

    if let Some(assessment) = outcome.assessment() {
        let record = &assessment.record;
        println!("  Student Type:  {}", record.classification);
        println!(
            "  GPA:           {}  {}",
            utils::format_gpa(record),
            utils::format_gate(assessment.acceptable_gpa)
        );
        println!(
            "  Credit Hours:  {}  {}",
            formatters::format_hours(record.current_credit_hours),
            utils::format_gate(assessment.full_time)
        );
        println!("  {}", assessment.reason);
    }

    if let Some(line) = audit_line {
        println!("{} {}", "Audit:".dimmed(), line);
    }
}

fn inspect_transcript(
    config: &Config,
    file: &Path,
    plain_text: bool,
    format: OutputFormat,
) -> error::Result<()> {
    let engine = build_engine(config, plain_text);
    let record = engine.parse_file(file)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", "=== Parsed Transcript ===".cyan().bold());
    utils::print_table_border(48);
    utils::print_table_row(&["Field", "Value"], &[20, 26]);
    utils::print_table_border(48);
    utils::print_table_row(
        &["Student Type", &record.classification.to_string()],
        &[20, 26],
    );
    utils::print_table_row(&["GPA", &utils::format_gpa(&record)], &[20, 26]);
    utils::print_table_row(
        &[
            "Credit Hours",
            &formatters::format_hours(record.current_credit_hours),
        ],
        &[20, 26],
    );
    utils::print_table_border(48);

    Ok(())
}

fn show_thresholds(config: &Config) {
    let thresholds = &config.eligibility;

    println!("{}", "=== Eligibility Thresholds ===".cyan().bold());
    println!("\nMinimum GPA:");
    println!("  Continuing Graduate:       {:.2}", thresholds.continuing_graduate_min_gpa);
    println!("  Continuing Undergraduate:  {:.2}", thresholds.continuing_undergraduate_min_gpa);
    println!("  New students:              {}", "exempt".dimmed());

    println!("\nFull-time credit hours:");
    println!("  Graduate:       {}", thresholds.graduate_full_time_hours);
    println!("  Undergraduate:  {}", thresholds.undergraduate_full_time_hours);

    println!("\nAudit:");
    println!("  Enabled:  {}", config.audit.enabled);
    println!(
        "  Channel:  {}",
        config.audit.channel.as_deref().unwrap_or("(none)")
    );
}

fn initialize(config_path: &str, force: bool) -> error::Result<()> {
    let mut path = PathBuf::from(config_path);
    if path.extension().is_none() {
        path.set_extension("toml");
    }

    if path.exists() && !force {
        println!(
            "{} already exists (use {} to overwrite)",
            path.display(),
            "--force".yellow()
        );
        return Ok(());
    }

    Config::write_default(&path)?;
    info!("Wrote default configuration to {}", path.display());

    println!("{}", format!("✓ Configuration written to {}", path.display()).green());
    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to check a transcript", "transcript-check check transcript.pdf".yellow());
    println!("  {} to see what was parsed", "transcript-check inspect transcript.pdf".yellow());
    Ok(())
}
