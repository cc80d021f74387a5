use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "transcript-check")]
#[command(about = "Checks unofficial transcripts for GPA and full-time eligibility")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (extension optional)
    #[arg(short, long, global = true, default_value = "config/default")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one or more transcripts for eligibility
    Check {
        /// Transcript PDF file(s)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Name recorded in the audit log
        #[arg(short, long)]
        requester: Option<String>,

        /// Input is already-extracted text (.txt) instead of a PDF
        #[arg(long)]
        plain_text: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the fields parsed from a transcript without judging them
    Inspect {
        /// Transcript PDF file
        file: PathBuf,

        /// Input is already-extracted text (.txt) instead of a PDF
        #[arg(long)]
        plain_text: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the active eligibility thresholds
    Thresholds,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}
