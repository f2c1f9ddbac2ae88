//! Manual-save validation. Imports do not go through here.

use yard_types::ValidationError;

use crate::model::{SlotDraft, SlotType, TRAILER_SIZES};

pub fn validate_draft(slot_type: SlotType, draft: &SlotDraft) -> Result<(), ValidationError> {
    if !slot_type.allows(draft.status) {
        return Err(ValidationError::StatusNotAllowed {
            status: draft.status.label().to_string(),
            slot_type: slot_type.label().to_string(),
        });
    }

    if !draft.size.is_empty() && !TRAILER_SIZES.contains(&draft.size.as_str()) {
        return Err(ValidationError::UnknownSize(draft.size.clone()));
    }

    if draft.status.requires_seal() && draft.seal_right.trim().is_empty() {
        return Err(ValidationError::MissingRightSeal {
            status: draft.status.label().to_string(),
        });
    }

    Ok(())
}
