//! Import -> store -> export, read back from the written workbook

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tempfile::{tempdir, TempDir};

use yard_app::app::{export_shift, import_file};
use yard_app::config::Config;
use yard_app::repository::open_local_storage_at;
use yard_app::store::{CleanScope, CleanTarget, InventoryStore};
use yard_domain::model::{Shift, SlotDraft, SlotType, Status};
use yard_infra::persistence::{LocalStorage, StorageKeys};

const SHEET: &str = "Ubicación,FT,Eco.,Línea,Sello #1,Sello #2,Status,Observaciones\n\
Andén 1,53,E-101,Castores,A1,A2,Cargada.,\n\
Andén 2,48,E-102,TUM,B1,B2,Frenteada.,rampa 2\n\
Andén 5,53,,,,,,\n\
Andén 25,53,E-999,,S1,S2,Cargada.,\n\
Patio 2,,,,,,Cargada,\n\
Patio 7,40,E-207,Tresguerras,,,,\n\
Frenteada 9,,E-309,,,,,\n";

fn setup() -> (TempDir, Config, InventoryStore<LocalStorage>) {
    let dir = tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().join("data")),
        export_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let storage = open_local_storage_at(config.data_dir().unwrap(), StorageKeys::default());
    (dir, config, InventoryStore::open(storage))
}

fn write_sheet(dir: &Path) -> PathBuf {
    let path = dir.join("turno.csv");
    std::fs::write(&path, SHEET).unwrap();
    path
}

fn read_export(path: &Path) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).unwrap();
    workbook.worksheet_range("Inventario").unwrap()
}

fn cell(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(|c| c.to_string())
        .unwrap_or_default()
}

fn row(range: &Range<Data>, row: u32) -> Vec<String> {
    (0..8).map(|col| cell(range, row, col)).collect()
}

#[test]
fn test_import_counts_and_skips() {
    let (dir, _config, mut store) = setup();
    let report = import_file(&mut store, Shift::Second, &write_sheet(dir.path()), None).unwrap();

    assert_eq!(report.sheet, "turno");
    assert_eq!(report.rows, 8);
    assert_eq!(report.summary.docks, 3);
    assert_eq!(report.summary.yard, 2);

    let shift = store.shift(Shift::Second);
    assert_eq!(shift.docks[0].status, Status::Loaded);
    assert_eq!(shift.docks[1].status, Status::Fronted);
    assert_eq!(shift.docks[4].size, "53");
    assert_eq!(shift.docks[4].status, Status::Empty);
    assert!(!shift.yard[1].is_occupied());
    assert_eq!(shift.yard[6].economic_number, "E-207");
    assert_eq!(shift.yard[8].economic_number, "E-309");
    assert_eq!(shift.yard[8].status, Status::Loaded);

    // other shifts untouched
    assert!(store
        .shift(Shift::First)
        .docks
        .iter()
        .all(|slot| !slot.is_occupied()));
}

#[test]
fn test_import_survives_reopen() {
    let (dir, config, mut store) = setup();
    import_file(&mut store, Shift::Third, &write_sheet(dir.path()), None).unwrap();
    drop(store);

    let storage = open_local_storage_at(config.data_dir().unwrap(), StorageKeys::default());
    let reopened = InventoryStore::open(storage);
    assert_eq!(reopened.shift(Shift::Third).docks[0].economic_number, "E-101");
}

#[test]
fn test_export_sections() {
    let (dir, config, mut store) = setup();
    import_file(&mut store, Shift::First, &write_sheet(dir.path()), None).unwrap();

    let draft = SlotDraft {
        size: "40".to_string(),
        economic_number: "E-110".to_string(),
        status: Status::Fronted,
        seal_right: "R-110".to_string(),
        ..Default::default()
    };
    store.save_slot(Shift::First, SlotType::Dock, 9, draft).unwrap();

    let out = dir.path().join("turno1.xlsx");
    let path = export_shift(&store, &config, Shift::First, Some(&out)).unwrap();
    assert_eq!(path, out);
    let range = read_export(&path);

    assert_eq!(cell(&range, 0, 0), "Inventario Nexxus");
    assert_eq!(
        row(&range, 1),
        ["Ubicación", "FT", "Eco.", "Línea", "Sello #1", "Sello #2", "Status", "Observaciones"]
    );

    // Andén section: loaded dock in place, fronted docks blanked
    assert_eq!(
        row(&range, 2),
        ["Andén 1", "53", "E-101", "Castores", "A1", "A2", "Cargada.", ""]
    );
    assert_eq!(row(&range, 3)[0], "Andén 2");
    assert!(row(&range, 3)[1..].iter().all(String::is_empty));
    assert_eq!(row(&range, 6), ["Andén 5", "53", "", "", "", "", "", ""]);
    assert_eq!(row(&range, 11)[0], "Andén 10");
    assert!(row(&range, 11)[1..].iter().all(String::is_empty));

    // Frenteada section
    assert_eq!(cell(&range, 20, 1), "Frenteada");
    assert_eq!(row(&range, 21)[0], "Frenteada 1");
    assert!(row(&range, 21)[1..].iter().all(String::is_empty));
    assert_eq!(
        row(&range, 22),
        ["Frenteada 2", "48", "E-102", "TUM", "B1", "B2", "Frenteada.", "rampa 2"]
    );
    assert_eq!(
        row(&range, 30),
        ["Frenteada 10", "40", "E-110", "", "", "R-110", "Frenteada.", ""]
    );

    // Patio section
    assert_eq!(cell(&range, 39, 1), "Patio");
    assert_eq!(row(&range, 41), ["Patio 2", "", "", "", "", "", "", ""]);
    assert_eq!(
        row(&range, 46),
        ["Patio 7", "40", "E-207", "Tresguerras", "", "", "Cargada.", ""]
    );
    assert_eq!(cell(&range, 59, 0), "Patio 20");
}

#[test]
fn test_export_default_file_name_in_export_dir() {
    let (dir, config, store) = setup();
    let path = export_shift(&store, &config, Shift::First, None).unwrap();
    assert_eq!(path.parent(), Some(dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Inventario Nexxus - "));
    assert!(name.ends_with(".xlsx"));
    assert!(path.exists());
}

#[test]
fn test_clean_after_import() {
    let (dir, _config, mut store) = setup();
    import_file(&mut store, Shift::First, &write_sheet(dir.path()), None).unwrap();

    store.clean(CleanScope::Shift {
        shift: Shift::First,
        target: CleanTarget::Docks,
    });
    let shift = store.shift(Shift::First);
    assert!(shift.docks.iter().all(|slot| !slot.is_occupied()));
    assert_eq!(shift.yard[6].economic_number, "E-207");

    store.clean(CleanScope::All);
    assert!(store.shift(Shift::First).yard[6].economic_number.is_empty());
}
