use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moneygrid::cli::{
    handle_charts_command, handle_edit_command, handle_report_command, handle_view_command,
};
use moneygrid::config::{paths::AppPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "moneygrid",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance CSV grid with undo, charts, and styled reports",
    long_about = "moneygrid loads a personal-finance CSV into an editable grid, \
                  tracks every cell edit in an undo/redo history, derives a \
                  running balance and per-description totals, renders both as \
                  SVG charts, and exports a styled HTML report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a CSV file as a grid
    View {
        /// Path to the CSV file
        file: PathBuf,

        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Apply cell edits through the undo history and save
    Edit {
        /// Path to the CSV file
        file: PathBuf,

        /// Cell edit as ROW:COL=VALUE (repeatable; COL is an index or header name)
        #[arg(long = "set", value_name = "ROW:COL=VALUE")]
        set: Vec<String>,

        /// Undo this many edits after applying
        #[arg(long, default_value_t = 0)]
        undo: usize,

        /// Redo this many undone edits
        #[arg(long, default_value_t = 0)]
        redo: usize,

        /// Save to this path instead of back to the input file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the balance and grouping charts as SVG images
    Charts {
        /// Path to the CSV file
        file: PathBuf,

        /// Directory the chart images are written into
        #[arg(short, long, default_value = "charts")]
        out_dir: PathBuf,
    },

    /// Export the styled HTML report
    Report {
        /// Path to the CSV file
        file: PathBuf,

        /// Path the HTML report is written to
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so piped output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::View { file, limit }) => {
            handle_view_command(&settings, &file, limit)?;
        }
        Some(Commands::Edit {
            file,
            set,
            undo,
            redo,
            output,
        }) => {
            handle_edit_command(&settings, &file, set, undo, redo, output)?;
        }
        Some(Commands::Charts { file, out_dir }) => {
            handle_charts_command(&settings, &file, &out_dir)?;
        }
        Some(Commands::Report { file, output }) => {
            handle_report_command(&settings, &file, &output)?;
        }
        Some(Commands::Config) => {
            println!("moneygrid Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Group limit:     {}", settings.group_limit);
        }
        None => {
            println!("moneygrid - personal finance CSV grid");
            println!();
            println!("Run 'moneygrid --help' for usage information.");
            println!("Run 'moneygrid view <file.csv>' to look at a ledger.");
        }
    }

    Ok(())
}
