//! Hold buffer - one stored kind, one swap per committed piece.

use crate::types::PieceKind;

/// What the caller should make active after a successful hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldSwap {
    /// The slot was empty; spawn the next kind from the sequence.
    Stored,
    /// The slot held this kind; spawn it fresh.
    Swapped(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldSlot {
    held: Option<PieceKind>,
    locked: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    /// Set after a swap, cleared when a piece commits
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Store `active` and report what replaces it. None while locked.
    pub fn swap(&mut self, active: PieceKind) -> Option<HoldSwap> {
        if self.locked {
            return None;
        }
        let outcome = match self.held.replace(active) {
            Some(previous) => HoldSwap::Swapped(previous),
            None => HoldSwap::Stored,
        };
        self.locked = true;
        Some(outcome)
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
