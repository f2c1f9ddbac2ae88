//! CLI definition using clap

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use yard_app::store::CleanTarget;
use yard_domain::model::{SlotType, Status};
use yard_types::OutputFormat;

#[derive(Parser)]
#[command(name = "yard-inventory")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Shift inventory of loading docks and yard slots")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Shift to work on (1-3). Uses config value if not specified.
    #[arg(long, short = 's', global = true, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub shift: Option<u8>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SlotKind {
    /// Loading docks (andenes)
    #[value(alias = "dock", alias = "anden")]
    Docks,
    /// Yard spaces (patio)
    #[value(alias = "patio")]
    Yard,
}

impl From<SlotKind> for SlotType {
    fn from(kind: SlotKind) -> Self {
        match kind {
            SlotKind::Docks => SlotType::Dock,
            SlotKind::Yard => SlotType::Yard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    #[value(name = "vacia", alias = "empty")]
    Empty,
    #[value(name = "enrampada", alias = "ramped")]
    Ramped,
    #[value(name = "frenteada", alias = "fronted")]
    Fronted,
    #[value(name = "cargada", alias = "loaded")]
    Loaded,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Empty => Status::Empty,
            StatusArg::Ramped => Status::Ramped,
            StatusArg::Fronted => Status::Fronted,
            StatusArg::Loaded => Status::Loaded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CleanTargetArg {
    Docks,
    Yard,
    All,
}

impl From<CleanTargetArg> for CleanTarget {
    fn from(arg: CleanTargetArg) -> Self {
        match arg {
            CleanTargetArg::Docks => CleanTarget::Docks,
            CleanTargetArg::Yard => CleanTarget::Yard,
            CleanTargetArg::All => CleanTarget::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board of the current shift
    Show {
        /// Only docks or only yard
        #[arg(long = "type", short = 't')]
        slot_type: Option<SlotKind>,
    },

    /// Show one slot
    Slot {
        slot_type: SlotKind,

        /// Slot number (docks 1-18, yard 1-20)
        number: usize,
    },

    /// Edit a slot. Fields not given keep their current value.
    Save {
        slot_type: SlotKind,

        /// Slot number (docks 1-18, yard 1-20)
        number: usize,

        #[arg(long)]
        status: Option<StatusArg>,

        /// Trailer size (53, 48, 40, 3.5; empty to unset)
        #[arg(long)]
        size: Option<String>,

        /// Economic number
        #[arg(long)]
        eco: Option<String>,

        /// Carrier line
        #[arg(long)]
        line: Option<String>,

        /// Seal #1
        #[arg(long)]
        seal_left: Option<String>,

        /// Seal #2 (required for frenteada/cargada)
        #[arg(long)]
        seal_right: Option<String>,

        /// Observations
        #[arg(long)]
        obs: Option<String>,
    },

    /// Free a slot (reset to empty)
    Clear {
        slot_type: SlotKind,

        /// Slot number (docks 1-18, yard 1-20)
        number: usize,
    },

    /// Reset slots to empty: everything, or part of the current shift
    #[command(group(ArgGroup::new("scope").required(true).args(["all", "target"])))]
    Clean {
        /// Every shift, docks and yard
        #[arg(long)]
        all: bool,

        /// What to clean in the current shift
        #[arg(long = "type", short = 't')]
        target: Option<CleanTargetArg>,
    },

    /// Import a spreadsheet (.xlsx, .xls, .ods, .csv) into the current shift
    Import {
        /// Path to spreadsheet file
        file: PathBuf,

        /// Sheet to import (required when the file has several)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Export the current shift to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show or change the theme preference
    Theme {
        mode: Option<ThemeArg>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set local storage directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set report title
        #[arg(long)]
        set_title: Option<String>,

        /// Set default shift
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        set_shift: Option<u8>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
