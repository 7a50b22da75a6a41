//! CLI argument definitions for `labelmaker`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use label_catalog::CATALOG_ENV_VAR;
use label_history::HISTORY_ENV_VAR;
use label_model::{FamilyParams, ProductionStage};

#[derive(Parser)]
#[command(
    name = "labelmaker",
    version,
    about = "Compose serial labels for detector components and guard against duplicate prints",
    long_about = "Compose batches of sequential serial codes for detector components.\n\n\
                  Every batch is checked against the print history before it is\n\
                  exported for the label printer, and committed to the history after."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog TOML file (default: built-in catalog).
    #[arg(long, value_name = "PATH", env = CATALOG_ENV_VAR, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print history ledger (default: printed_labels.jsonl).
    #[arg(long, value_name = "PATH", env = HISTORY_ENV_VAR, global = true)]
    pub history: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the catalog option tables.
    Catalog(CatalogArgs),

    /// Compose a batch and show it without checking or recording anything.
    Compose(ComposeArgs),

    /// Compose a batch and report serials already in the print history.
    ///
    /// Exits with status 2 when any serial was printed before.
    Check(BatchArgs),

    /// Compose, check, confirm duplicates, export and record a batch.
    Print(PrintArgs),

    /// Show the most recent print history entries.
    History(HistoryArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Table to list (default: all tables).
    #[arg(long, value_enum)]
    pub table: Option<CatalogTableArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogTableArg {
    Majors,
    Subtypes,
    Macs,
    Vendors,
    Assemblers,
    Shapes,
    Magazines,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Major type name as listed in the catalog (e.g. "LD Module").
    #[arg(long, value_name = "NAME")]
    pub major: String,

    /// Subtype name for families with catalog subtypes.
    #[arg(long, value_name = "NAME")]
    pub subtype: Option<String>,

    /// First serial number of the batch.
    #[arg(long, value_name = "N")]
    pub start: u32,

    /// Number of labels; must be a multiple of the family's batch unit.
    #[arg(long, value_name = "N")]
    pub count: u32,

    /// TOML file with family parameters; flags below override it.
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub family: FamilyFlags,
}

/// One flag per family parameter.
#[derive(Args)]
#[command(next_help_heading = "Family parameters")]
pub struct FamilyFlags {
    /// MAC name (module).
    #[arg(long, value_name = "NAME")]
    pub mac: Option<String>,

    /// ROC version (module: X,1-4; hexaboard: 2,4,C).
    #[arg(long = "roc", value_name = "VERSION")]
    pub roc_version: Option<String>,

    /// Hexaboard generation (0-4).
    #[arg(long)]
    pub generation: Option<u8>,

    /// Shape name (hexaboard) or shape letter (tile PCB/module).
    #[arg(long)]
    pub shape: Option<String>,

    /// PCB vendor name (hexaboard).
    #[arg(long)]
    pub vendor: Option<String>,

    /// Assembler name (hexaboard).
    #[arg(long)]
    pub assembler: Option<String>,

    #[arg(long = "tile-size")]
    pub tile_size: Option<u32>,

    #[arg(long = "tile-batch")]
    pub tile_batch: Option<u32>,

    /// Magazine the batch starts in (bare/wrapped tiles).
    #[arg(long = "initial-magazine", value_name = "NAME")]
    pub initial_magazine: Option<String>,

    /// Tiles per magazine (bare/wrapped tiles).
    #[arg(long = "units-per-magazine", value_name = "N")]
    pub units_per_magazine: Option<u32>,

    /// Tile row count (11 or 12).
    #[arg(long)]
    pub rows: Option<u8>,

    /// Tile geometry (L, R or F).
    #[arg(long)]
    pub geometry: Option<String>,

    /// SiPM type (PCB: 4,9; module: C,M,9).
    #[arg(long)]
    pub sipm: Option<String>,

    #[arg(long, value_enum)]
    pub stage: Option<StageArg>,
}

impl FamilyFlags {
    pub fn to_params(&self) -> FamilyParams {
        FamilyParams {
            mac: self.mac.clone(),
            roc_version: self.roc_version.clone(),
            generation: self.generation,
            shape: self.shape.clone(),
            vendor: self.vendor.clone(),
            assembler: self.assembler.clone(),
            tile_size: self.tile_size,
            tile_batch: self.tile_batch,
            initial_magazine: self.initial_magazine.clone(),
            units_per_magazine: self.units_per_magazine,
            rows: self.rows,
            geometry: self.geometry.clone(),
            sipm: self.sipm.clone(),
            stage: self.stage.map(|stage| match stage {
                StageArg::Production => ProductionStage::Production,
                StageArg::Prototype => ProductionStage::Prototype,
            }),
        }
    }
}

#[derive(Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: PreviewFormatArg,

    /// Write csv/json output to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PrintArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Export format for the label renderer.
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Export file (default: stdout).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Answer yes to both duplicate confirmations.
    ///
    /// WARNING: this prints labels whose serials were printed before.
    #[arg(long = "assume-yes")]
    pub assume_yes: bool,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Number of most recent entries to show.
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub tail: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PreviewFormatArg {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StageArg {
    Production,
    Prototype,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
