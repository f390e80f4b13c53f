use crate::core::summarize::SummaryMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog
/// CLI application to organize attendance punch reports into work shifts
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Organize attendance punch reports into work shifts and calculate worked hours and breaks",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the raw punch table from time-clock report text
    Extract {
        /// Report text file (as extracted from the PDF report)
        input: String,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Output file (stdout if omitted)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Reconstruct shifts and write the organized punch table
    Organize {
        /// Punch table (CSV) or report text (.txt)
        input: String,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Output file (stdout if omitted)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Calculate elapsed, break and net worked time per shift or per day
    Summarize {
        /// Punch table (CSV) or report text (.txt)
        input: String,

        #[arg(
            long,
            value_enum,
            default_value = "night",
            help = "Windowing: one summary per shift (night) or per day (morning)"
        )]
        mode: SummaryMode,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Output file (stdout if omitted)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long, help = "Print the configuration file path")]
        path: bool,

        #[arg(long, help = "Write the default configuration file")]
        init: bool,
    },
}
