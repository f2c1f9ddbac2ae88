//! Domain model types

pub mod inventory;
pub mod sheet;
pub mod shift;
pub mod slot;
pub mod theme;

pub use inventory::{Inventory, ShiftInventory};
pub use sheet::{Sheet, SheetRow, Workbook};
pub use shift::Shift;
pub use slot::{Slot, SlotDraft, SlotType, Status, DOCK_COUNT, TRAILER_SIZES, YARD_COUNT};
pub use theme::Theme;
