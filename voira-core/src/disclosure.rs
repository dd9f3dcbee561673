//! Open/closed state for the FAQ accordion

use tracing::{debug, warn};

/// Visibility of a single question/answer pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub is_open: bool,
}

impl Disclosure {
    /// Flip the panel and return the new visibility
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }
}

/// Independent disclosure flags, one per entry, keyed by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureSet {
    panels: Vec<Disclosure>,
}

impl DisclosureSet {
    /// `len` panels, all closed
    pub fn closed(len: usize) -> Self {
        Self {
            panels: vec![Disclosure::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Out-of-range indices read as closed
    pub fn is_open(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|panel| panel.is_open)
    }

    /// Toggle the panel at `index`. Returns its new visibility, or `None`
    /// when there is no such panel.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let Some(panel) = self.panels.get_mut(index) else {
            warn!(index, len = self.panels.len(), "ignoring toggle for unknown FAQ entry");
            return None;
        };
        let is_open = panel.toggle();
        debug!(index, is_open, "FAQ entry toggled");
        Some(is_open)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Disclosure> {
        self.panels.iter()
    }
}
