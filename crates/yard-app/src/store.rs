//! Inventory store: the in-memory inventory plus best-effort persistence
//!
//! Every mutation writes the whole inventory back through the repository.
//! A failed write is logged and otherwise ignored; the in-memory state stays
//! authoritative for the session.

use chrono::Utc;
use tracing::{debug, info, warn};

use yard_domain::model::{Inventory, SheetRow, Shift, ShiftInventory, Slot, SlotDraft, SlotType};
use yard_domain::repository::InventoryRepository;
use yard_domain::service::{generate_initial, generate_shift, reconcile, validate_draft, ImportSummary};
use yard_types::{Error, Result};

/// Which slot types of a shift to clean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanTarget {
    Docks,
    Yard,
    All,
}

impl CleanTarget {
    pub fn slot_types(self) -> &'static [SlotType] {
        match self {
            CleanTarget::Docks => &[SlotType::Dock],
            CleanTarget::Yard => &[SlotType::Yard],
            CleanTarget::All => &SlotType::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanScope {
    /// Every shift, every slot
    All,
    Shift { shift: Shift, target: CleanTarget },
}

pub struct InventoryStore<R: InventoryRepository> {
    repo: R,
    inventory: Inventory,
}

impl<R: InventoryRepository> InventoryStore<R> {
    /// Open the store with whatever the repository holds
    pub fn open(repo: R) -> Self {
        let inventory = Self::load(&repo);
        Self { repo, inventory }
    }

    /// Persisted inventory, or a fresh one if missing or unreadable
    pub fn load(repo: &R) -> Inventory {
        match repo.load_inventory() {
            Ok(Some(inventory)) => inventory,
            Ok(None) => {
                debug!("no stored inventory, starting fresh");
                generate_initial()
            }
            Err(e) => {
                warn!(error = %e, "stored inventory unreadable, starting fresh");
                generate_initial()
            }
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn shift(&self, shift: Shift) -> &ShiftInventory {
        self.inventory.shift(shift)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn slot(&self, shift: Shift, slot_type: SlotType, index: usize) -> Result<&Slot> {
        check_index(slot_type, index)?;
        self.inventory
            .shift(shift)
            .slot(slot_type, index)
            .ok_or_else(|| out_of_range(slot_type, index))
    }

    /// Validate and store a manual edit; the slot keeps its identity and
    /// gets a fresh `updated_at`.
    pub fn save_slot(
        &mut self,
        shift: Shift,
        slot_type: SlotType,
        index: usize,
        draft: SlotDraft,
    ) -> Result<&Slot> {
        check_index(slot_type, index)?;
        validate_draft(slot_type, &draft)?;

        let slot = self
            .inventory
            .shift_mut(shift)
            .slot_mut(slot_type, index)
            .ok_or_else(|| out_of_range(slot_type, index))?;
        *slot = draft.apply_to(slot, Utc::now());
        info!(id = %slot.id, status = %slot.status, "slot saved");

        self.persist();
        self.slot(shift, slot_type, index)
    }

    /// Reset one slot to empty, keeping id, number and type
    pub fn clear_slot(&mut self, shift: Shift, slot_type: SlotType, index: usize) -> Result<&Slot> {
        check_index(slot_type, index)?;

        let slot = self
            .inventory
            .shift_mut(shift)
            .slot_mut(slot_type, index)
            .ok_or_else(|| out_of_range(slot_type, index))?;
        *slot = slot.cleared();
        info!(id = %slot.id, "slot cleared");

        self.persist();
        self.slot(shift, slot_type, index)
    }

    pub fn clean(&mut self, scope: CleanScope) {
        match scope {
            CleanScope::All => {
                self.inventory = generate_initial();
                info!("inventory cleaned");
            }
            CleanScope::Shift { shift, target } => {
                let mut fresh = generate_shift(shift);
                let current = self.inventory.shift_mut(shift);
                for &slot_type in target.slot_types() {
                    *current.slots_mut(slot_type) = std::mem::take(fresh.slots_mut(slot_type));
                }
                info!(shift = %shift, target = ?target, "shift cleaned");
            }
        }
        self.persist();
    }

    /// Merge sheet rows into one shift. Rows that cannot be placed are
    /// skipped and only reflected in the counts.
    pub fn import_sheet(&mut self, shift: Shift, rows: &[SheetRow]) -> ImportSummary {
        let outcome = reconcile(rows, self.inventory.shift(shift));
        self.inventory.replace_shift(shift, outcome.shift_inventory);
        info!(
            shift = %shift,
            docks = outcome.summary.docks,
            yard = outcome.summary.yard,
            skipped = rows.len() - outcome.summary.total(),
            "sheet imported"
        );
        self.persist();
        outcome.summary
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save_inventory(&self.inventory) {
            warn!(error = %e, "failed to persist inventory");
        }
    }
}

fn check_index(slot_type: SlotType, index: usize) -> Result<()> {
    if index < slot_type.capacity() {
        Ok(())
    } else {
        Err(out_of_range(slot_type, index))
    }
}

fn out_of_range(slot_type: SlotType, index: usize) -> Error {
    Error::SlotOutOfRange {
        slot_type: slot_type.label().to_string(),
        number: index + 1,
        max: slot_type.capacity(),
    }
}
