//! Command handlers

use std::path::PathBuf;

use yard_app::app::{export_shift, import_file};
use yard_app::config::Config;
use yard_app::repository::{open_inventory_store, open_local_storage};
use yard_app::store::{CleanScope, CleanTarget};
use yard_app::theme::{current_theme, set_theme, toggle_theme};
use yard_domain::model::{Shift, SlotDraft, SlotType, Theme};
use yard_types::{Error, OutputFormat, Result};

use crate::cli::{CleanTargetArg, Cli, Commands, SlotKind, StatusArg, ThemeArg};
use crate::output::{
    output_board, output_cleaned, output_export, output_import, output_slot, output_theme,
    system_prefers_dark,
};

/// Field overrides for `save`; `None` keeps the slot's current value
struct SlotEdit {
    status: Option<StatusArg>,
    size: Option<String>,
    eco: Option<String>,
    line: Option<String>,
    seal_left: Option<String>,
    seal_right: Option<String>,
    obs: Option<String>,
}

impl SlotEdit {
    fn apply(self, draft: &mut SlotDraft) {
        if let Some(status) = self.status {
            draft.status = status.into();
        }
        let fields = [
            (self.size, &mut draft.size),
            (self.eco, &mut draft.economic_number),
            (self.line, &mut draft.carrier_line),
            (self.seal_left, &mut draft.seal_left),
            (self.seal_right, &mut draft.seal_right),
            (self.obs, &mut draft.observations),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value.trim().to_string();
            }
        }
    }
}

/// Execute the CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let shift = match cli.shift {
        Some(number) => Shift::try_from(number)?,
        None => config.default_shift()?,
    };
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Show { slot_type } => cmd_show(&config, format, shift, slot_type.map(Into::into)),

        Commands::Slot { slot_type, number } => cmd_slot(&config, format, shift, slot_type, number),

        Commands::Save {
            slot_type,
            number,
            status,
            size,
            eco,
            line,
            seal_left,
            seal_right,
            obs,
        } => {
            let edit = SlotEdit {
                status,
                size,
                eco,
                line,
                seal_left,
                seal_right,
                obs,
            };
            cmd_save(&config, format, shift, slot_type, number, edit)
        }

        Commands::Clear { slot_type, number } => cmd_clear(&config, format, shift, slot_type, number),

        Commands::Clean { all, target } => cmd_clean(&config, format, shift, all, target),

        Commands::Import { file, sheet } => cmd_import(&config, format, shift, file, sheet),

        Commands::Export { output } => cmd_export(&config, format, shift, output),

        Commands::Theme { mode } => cmd_theme(&config, format, mode),

        Commands::Config {
            show,
            set_data_dir,
            set_export_dir,
            set_title,
            set_shift,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_data_dir,
            set_export_dir,
            set_title,
            set_shift,
            set_output,
            reset,
        ),
    }
}

/// Slot numbers are 1-based on the command line
fn slot_index(slot_type: SlotType, number: usize) -> Result<usize> {
    number.checked_sub(1).ok_or_else(|| Error::SlotOutOfRange {
        slot_type: slot_type.label().to_string(),
        number,
        max: slot_type.capacity(),
    })
}

fn cmd_show(config: &Config, format: OutputFormat, shift: Shift, only: Option<SlotType>) -> Result<()> {
    let store = open_inventory_store(config);
    let theme = current_theme(store.repository(), system_prefers_dark());
    output_board(format, shift, store.shift(shift), only, theme)
}

fn cmd_slot(
    config: &Config,
    format: OutputFormat,
    shift: Shift,
    kind: SlotKind,
    number: usize,
) -> Result<()> {
    let slot_type = SlotType::from(kind);
    let store = open_inventory_store(config);
    let slot = store.slot(shift, slot_type, slot_index(slot_type, number)?)?;
    output_slot(format, slot)
}

fn cmd_save(
    config: &Config,
    format: OutputFormat,
    shift: Shift,
    kind: SlotKind,
    number: usize,
    edit: SlotEdit,
) -> Result<()> {
    let slot_type = SlotType::from(kind);
    let index = slot_index(slot_type, number)?;
    let mut store = open_inventory_store(config);

    let mut draft = SlotDraft::from(store.slot(shift, slot_type, index)?);
    edit.apply(&mut draft);

    let slot = store.save_slot(shift, slot_type, index, draft)?;
    if format == OutputFormat::Table {
        println!("Guardado");
    }
    output_slot(format, slot)
}

fn cmd_clear(
    config: &Config,
    format: OutputFormat,
    shift: Shift,
    kind: SlotKind,
    number: usize,
) -> Result<()> {
    let slot_type = SlotType::from(kind);
    let mut store = open_inventory_store(config);
    let slot = store.clear_slot(shift, slot_type, slot_index(slot_type, number)?)?;
    if format == OutputFormat::Table {
        println!("Espacio Liberado");
    }
    output_slot(format, slot)
}

fn cmd_clean(
    config: &Config,
    format: OutputFormat,
    shift: Shift,
    all: bool,
    target: Option<CleanTargetArg>,
) -> Result<()> {
    let mut store = open_inventory_store(config);

    let (scope, what) = match target {
        Some(target) if !all => {
            let target = CleanTarget::from(target);
            let what = match target {
                CleanTarget::Docks => format!("Andenes, Turno {}", shift),
                CleanTarget::Yard => format!("Patio, Turno {}", shift),
                CleanTarget::All => format!("Turno {}", shift),
            };
            (CleanScope::Shift { shift, target }, what)
        }
        _ => (CleanScope::All, "todos los turnos".to_string()),
    };

    store.clean(scope);
    output_cleaned(format, &what)
}

fn cmd_import(
    config: &Config,
    format: OutputFormat,
    shift: Shift,
    file: PathBuf,
    sheet: Option<String>,
) -> Result<()> {
    let mut store = open_inventory_store(config);
    let report = import_file(&mut store, shift, &file, sheet.as_deref())?;
    output_import(format, &report)
}

fn cmd_export(config: &Config, format: OutputFormat, shift: Shift, output: Option<PathBuf>) -> Result<()> {
    let store = open_inventory_store(config);
    let path = export_shift(&store, config, shift, output.as_deref())?;
    output_export(format, &path)
}

fn cmd_theme(config: &Config, format: OutputFormat, mode: Option<ThemeArg>) -> Result<()> {
    let storage = open_local_storage(config);
    let system_dark = system_prefers_dark();

    let theme = match mode {
        None => current_theme(&storage, system_dark),
        Some(ThemeArg::Light) => set_theme(&storage, Theme::Light),
        Some(ThemeArg::Dark) => set_theme(&storage, Theme::Dark),
        Some(ThemeArg::Toggle) => toggle_theme(&storage, system_dark),
    };
    output_theme(format, theme)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_export_dir: Option<PathBuf>,
    set_title: Option<String>,
    set_shift: Option<u8>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if let Some(title) = set_title {
        config.report_title = title;
        modified = true;
    }

    if let Some(shift) = set_shift {
        config.default_shift = shift;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
