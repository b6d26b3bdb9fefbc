//! sheetdef CLI.
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_collect)]
#![allow(clippy::unnecessary_wraps)] // API design requires Result for consistency across commands
//!
//! Command-line interface for turning spreadsheet workbooks into generated
//! C# definition files.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Load a workbook and emit its C# definition file
//! - `inspect` - Report sheets, fields, and skip reasons without emitting
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Print generated source to stdout
//! sheetdef generate data/items.xlsx
//!
//! # Write a namespaced definition file, skipping scratch sheets
//! sheetdef generate data/items.xlsx -o gen/Items.cs \
//!     --namespace Game.Data --exclude-prefix tmp_
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sheetdef_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
pub mod formatters;
mod output;

/// sheetdef - generate C# definition classes from spreadsheet workbooks.
///
/// Reads the first two rows of every sheet (per-column generated type and
/// comment) and emits one C# source file: a class per sheet plus an
/// aggregating container class named after the workbook.
#[derive(Parser, Debug)]
#[command(name = "sheetdef")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the C# definition file from a workbook.
    ///
    /// Loads the workbook, extracts each sheet's schema from its first two
    /// rows, and renders one C# source file. Without `--output` the
    /// generated source is printed to stdout; with it, the file is written
    /// in the requested encoding and a summary is printed instead.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Print to stdout
    /// sheetdef generate data/items.xlsx
    ///
    /// # Write a UTF-8 file wrapped in a namespace
    /// sheetdef generate data/items.xlsx -o gen/Items.cs --namespace Game.Data
    ///
    /// # GBK output, scratch sheets and columns skipped
    /// sheetdef generate data/items.xlsx -o gen/Items.cs \
    ///     --encoding gbk --exclude-prefix tmp_
    /// ```
    Generate {
        /// Path to the source workbook (xlsx, xlsm, xls, or ods)
        workbook: PathBuf,

        /// Output file path; prints the generated source to stdout when
        /// omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Namespace qualifier wrapping the generated types
        #[arg(long)]
        namespace: Option<String>,

        /// Skip sheets and columns whose name starts with this prefix
        #[arg(long)]
        exclude_prefix: Option<String>,

        /// Encoding label for the output file (utf-8, gbk, shift_jis, ...)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Origin name override (default: the workbook file stem)
        #[arg(long)]
        origin: Option<String>,
    },

    /// Inspect a workbook without generating anything.
    ///
    /// Reports every sheet with its generated class name, field count, and
    /// the reason a sheet would be skipped. Useful for checking a workbook
    /// and an exclusion prefix before wiring them into a build.
    ///
    /// # Examples
    ///
    /// ```bash
    /// sheetdef inspect data/items.xlsx
    /// sheetdef inspect data/items.xlsx --exclude-prefix tmp_ --detailed
    /// ```
    Inspect {
        /// Path to the source workbook (xlsx, xlsm, xls, or ods)
        workbook: PathBuf,

        /// Apply this exclusion prefix during inspection
        #[arg(long)]
        exclude_prefix: Option<String>,

        /// Show the extracted field list for each sheet
        #[arg(short, long)]
        detailed: bool,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: failed to initialize logging: {e}");
        std::process::exit(ExitCode::ERROR.as_i32());
    }

    // Execute and exit with the appropriate code
    std::process::exit(run_cli(cli).as_i32());
}

/// Parses the output format, executes the command, and maps any failure
/// onto an exit code.
fn run_cli(cli: Cli) -> ExitCode {
    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::INVALID_INPUT;
        }
    };

    match execute_command(cli.command, output_format) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            commands::exit_code_for(&e)
        }
    }
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            workbook,
            output,
            namespace,
            exclude_prefix,
            encoding,
            origin,
        } => commands::generate::run(
            &workbook,
            output,
            namespace,
            exclude_prefix,
            &encoding,
            origin,
            output_format,
        ),
        Commands::Inspect {
            workbook,
            exclude_prefix,
            detailed,
        } => commands::inspect::run(&workbook, exclude_prefix, detailed, output_format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
