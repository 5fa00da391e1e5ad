use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract per-page QR codes from scanned PDFs and merge them into tables.
#[derive(Debug, Parser)]
#[command(name = "pagetag", about, version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the per-page code sequence from a PDF
    Codes {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Raster scale factor (pixels per document unit)
        #[arg(long, default_value_t = pagetag::DEFAULT_SCALE_FACTOR)]
        scale: f64,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract codes from a PDF and merge them into a table as a new column
    Merge {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the table file (.xlsx, .xls, .ods or .csv)
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Where to write the merged table (CSV)
        #[arg(short, long, value_name = "OUT")]
        output: PathBuf,

        /// Name of the appended column
        #[arg(long, default_value = "code")]
        column: String,

        /// Raster scale factor (pixels per document unit)
        #[arg(long, default_value_t = pagetag::DEFAULT_SCALE_FACTOR)]
        scale: f64,

        /// Zero-based row index carrying the column headers
        #[arg(long, default_value_t = 0)]
        header_row: usize,

        /// Column to remove from the output table (repeatable)
        #[arg(long = "drop", value_name = "COLUMN")]
        drop_columns: Vec<String>,

        /// Fail on a code/row count mismatch instead of truncating
        #[arg(long)]
        strict: bool,
    },

    /// Display document page count and native page sizes
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output format for extracted codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
