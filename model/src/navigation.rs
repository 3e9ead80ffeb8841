//! The navigation state shared by the scroll tracker and the section
//! navigator.
//!
//! One instance is owned by the page view and lent by `&mut` to each writer.
//! Every field has exactly one writer: the scroll tracker owns the two flags,
//! the navigator owns the active section.

use portfolio_shared::{SectionId, SectionSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_section: SectionId,
    is_scrolled: bool,
    is_back_to_top_visible: bool,
}

impl NavigationState {
    /// Fresh state for a page load: first section active, page at the top.
    pub fn new(sections: &SectionSet) -> NavigationState {
        NavigationState {
            active_section: sections.first().clone(),
            is_scrolled: false,
            is_back_to_top_visible: false,
        }
    }

    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.is_back_to_top_visible
    }

    // Writers. Only ScrollTracker calls the flag setters and only
    // SectionNavigator calls set_active_section.

    pub(crate) fn set_scrolled(&mut self, value: bool) {
        self.is_scrolled = value;
    }

    pub(crate) fn set_back_to_top_visible(&mut self, value: bool) {
        self.is_back_to_top_visible = value;
    }

    pub(crate) fn set_active_section(&mut self, id: SectionId) {
        self.active_section = id;
    }
}
