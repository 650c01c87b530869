//! Payment modal phases, including the fade-in and fade-out steps.

use super::plan::PlanSelection;

/// Fade-out time before the modal is hidden
pub const MODAL_CLOSE_DELAY_MS: u32 = 300;

/// Time between showing the modal and raising its opacity, so the fade-in runs
pub const MODAL_FADE_IN_DELAY_MS: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Shown but still transparent, becomes `Open` after the fade-in delay
    Opening,
    Open,
    /// Fading out, hidden once the close delay elapses
    Closing,
}

impl ModalPhase {
    /// Inline style for the modal root
    pub fn style(&self) -> &'static str {
        match self {
            ModalPhase::Closed => "display: none; opacity: 0;",
            ModalPhase::Opening => "display: flex; opacity: 0;",
            ModalPhase::Open => "display: flex; opacity: 1;",
            ModalPhase::Closing => "display: flex; opacity: 0;",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentModalState {
    phase: ModalPhase,
    selection: PlanSelection,
}

impl PaymentModalState {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn selection(&self) -> PlanSelection {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Show the modal for `selection`, also interrupting a fade-out
    pub fn open(&mut self, selection: PlanSelection) {
        self.selection = selection;
        self.phase = ModalPhase::Opening;
    }

    /// Raise the opacity. Does nothing unless the modal is still opening.
    pub fn finish_open(&mut self) -> bool {
        if self.phase == ModalPhase::Opening {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    /// Start fading out. Returns `false` if the modal was not open.
    pub fn begin_close(&mut self) -> bool {
        if self.is_open() {
            self.phase = ModalPhase::Closing;
            true
        } else {
            false
        }
    }

    /// Hide after the fade. Does nothing if the modal was reopened meanwhile.
    pub fn finish_close(&mut self) -> bool {
        if self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Closed;
            true
        } else {
            false
        }
    }
}
