// SPDX-License-Identifier: MPL-2.0
//! Snapshot stack backing undo.

use image_rs::DynamicImage;

/// Ordered snapshots of prior image states.
///
/// Index 0 holds the pristine, as-loaded copy. Entries are only ever appended
/// or popped from the tail, and the pristine entry is never popped.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<DynamicImage>,
}

impl History {
    /// Discards every snapshot and starts over from `pristine`.
    pub fn reset(&mut self, pristine: DynamicImage) {
        self.snapshots.clear();
        self.snapshots.push(pristine);
    }

    /// Appends the state an edit is about to replace.
    pub fn push(&mut self, snapshot: DynamicImage) {
        self.snapshots.push(snapshot);
    }

    /// Drops the newest snapshot when more than one remains and returns the
    /// snapshot that is then on top.
    ///
    /// Returns `None` without touching the stack when only the pristine
    /// entry (or nothing) is left.
    pub fn undo(&mut self) -> Option<&DynamicImage> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns whether [`History::undo`] would pop an entry.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }
}
