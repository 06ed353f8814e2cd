use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Consolidate erecruitment submission PDFs into one table of applicants.
#[derive(Debug, Parser)]
#[command(name = "erecruit", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug detail to stderr
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process every PDF in a folder and write one row per applicant
    Batch {
        /// Folder containing the submission PDFs. Prompted for when omitted
        #[arg(value_name = "FOLDER")]
        folder: Option<PathBuf>,

        /// Output file path
        #[arg(long, short, default_value = erecruit::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = RecordFormat::Csv)]
        format: RecordFormat,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },

    /// Show the merged tables, parsed fields and record of one PDF
    Inspect {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = InspectFormat::Text)]
        format: InspectFormat,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },
}

/// Table detection and merging options shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct ExtractionArgs {
    /// Which earlier table a page-split fragment is merged into
    #[arg(long, value_enum, default_value_t = MergeStrategyArg::Latest)]
    pub merge_strategy: MergeStrategyArg,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategyArg::Lattice)]
    pub strategy: TableStrategyArg,
}

/// Output format for the batch subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of applicant objects
    Json,
}

/// Output format for the inspect subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Human-readable report
    Text,
    /// JSON output
    Json,
}

/// Merge strategy for page-split tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeStrategyArg {
    /// Merge into the most recent table with the same columns
    Latest,
    /// Merge only into the first table of the document
    First,
    /// Never merge
    None,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStrategyArg {
    /// Detect tables using visible lines and rect edges
    Lattice,
    /// Detect tables from text alignment patterns
    Stream,
}

impl From<RecordFormat> for erecruit::OutputFormat {
    fn from(format: RecordFormat) -> Self {
        match format {
            RecordFormat::Csv => erecruit::OutputFormat::Csv,
            RecordFormat::Json => erecruit::OutputFormat::Json,
        }
    }
}

impl From<MergeStrategyArg> for erecruit::MergeStrategy {
    fn from(strategy: MergeStrategyArg) -> Self {
        match strategy {
            MergeStrategyArg::Latest => erecruit::MergeStrategy::LatestMatching,
            MergeStrategyArg::First => erecruit::MergeStrategy::FirstTable,
            MergeStrategyArg::None => erecruit::MergeStrategy::Disabled,
        }
    }
}

impl From<TableStrategyArg> for erecruit::TableStrategy {
    fn from(strategy: TableStrategyArg) -> Self {
        match strategy {
            TableStrategyArg::Lattice => erecruit::TableStrategy::Lattice,
            TableStrategyArg::Stream => erecruit::TableStrategy::Stream,
        }
    }
}

impl ExtractionArgs {
    pub fn extractor(&self) -> erecruit::PdfExtractor {
        erecruit::PdfExtractor::new(erecruit::ExtractSettings {
            strategy: self.strategy.into(),
        })
    }

    pub fn batch_options(&self) -> erecruit::BatchOptions {
        erecruit::BatchOptions {
            merge_strategy: self.merge_strategy.into(),
            ..erecruit::BatchOptions::default()
        }
    }
}
