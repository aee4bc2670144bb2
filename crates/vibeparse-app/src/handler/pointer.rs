//! Pointer press routing
//!
//! Presses go to the overlay listeners in the pointer registry, never to
//! the page directly. An outside press closes the overlay with no other
//! effect; a press on an entry becomes the same message the keyboard sends.

use crate::input_key::PointerPress;
use crate::message::Message;
use crate::overlay::{dispatch_press, OverlayKind, PointerHit};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_press(state: &mut AppState, press: PointerPress) -> UpdateResult {
    let mut follow_up = None;

    for hit in dispatch_press(&state.pointers, press) {
        match hit {
            PointerHit::Outside(kind) => dismiss(state, kind),
            PointerHit::Entry(OverlayKind::Toc, idx) => {
                follow_up = Some(Message::JumpToScene(idx));
            }
            PointerHit::Entry(OverlayKind::ProficiencyDropdown, idx)
            | PointerHit::Entry(OverlayKind::DepthDropdown, idx) => {
                follow_up = Some(Message::DropdownSelect(idx));
            }
            PointerHit::Entry(OverlayKind::Notice, _) => {}
        }
    }

    match follow_up {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

/// Close an overlay, releasing its pointer listener
pub fn dismiss(state: &mut AppState, kind: OverlayKind) {
    tracing::debug!("{:?} overlay dismissed", kind);
    match kind {
        OverlayKind::Toc => {
            if let Some(player) = state.player_mut().and_then(|page| page.loaded_mut()) {
                player.close_toc();
            }
        }
        OverlayKind::ProficiencyDropdown | OverlayKind::DepthDropdown => {
            if let Some(form) = state.form_mut() {
                if form
                    .dropdown
                    .as_ref()
                    .is_some_and(|d| d.kind.overlay() == kind)
                {
                    form.close_dropdown();
                }
            }
        }
        OverlayKind::Notice => {
            if let Some(form) = state.form_mut() {
                form.dismiss_notice();
            }
        }
    }
}
