// ============================================================================
// SECTION NAVIGATOR — click-driven navigation between page sections
// ============================================================================
//
// THE PATTERN:
//    - The nav bar renders nav_items() (id + label + active flag).
//    - A click calls activate_section(id):
//        1. id must be in the configured SectionSet, and
//        2. the host must report a rendered element with that id.
//      If either check fails the call is a silent no-op returning false.
//      Otherwise the host is asked for a smooth scroll and the active id is
//      set right away, before the animation finishes. The highlight can lead
//      the viewport for a few frames; that is expected.
//    - scroll_to_top() backs the floating back-to-top button: it scrolls the
//      viewport to the top and activates the first section.
//    - The compact-screen menu is a plain open/closed flag. Any successful
//      navigation closes it.
//
// The navigator is the only writer of NavigationState::active_section.
//
// ============================================================================

use portfolio_shared::SectionSet;
use serde::Serialize;
use tracing::debug;

use crate::host::Host;
use crate::navigation::NavigationState;

/// One entry of the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: SectionSet,
    menu_open: bool,
}

impl SectionNavigator {
    pub fn new(sections: SectionSet) -> SectionNavigator {
        SectionNavigator {
            sections,
            menu_open: false,
        }
    }

    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    // ── Navigation ─────────────────────────────────────────────────────

    /// Scroll to `id` and make it the active section. Returns false, leaving
    /// the state untouched, when the id is unknown or nothing is rendered
    /// under it.
    pub fn activate_section<H: Host + ?Sized>(
        &mut self,
        state: &mut NavigationState,
        host: &H,
        id: &str,
    ) -> bool {
        let section = match self.sections.get(id) {
            Some(section) => section.clone(),
            None => {
                debug!(section = id, "ignoring unknown section");
                return false;
            }
        };
        if !host.has_element(id) {
            debug!(section = id, "ignoring section with no rendered target");
            return false;
        }

        host.scroll_into_view(id);
        self.menu_open = false;
        if state.active_section() != &section {
            debug!(section = id, "active section changed");
            state.set_active_section(section);
        }
        true
    }

    /// Scroll the viewport to the top and activate the first section.
    pub fn scroll_to_top<H: Host + ?Sized>(&mut self, state: &mut NavigationState, host: &H) {
        host.scroll_to_top();
        self.menu_open = false;
        let first = self.sections.first();
        if state.active_section() != first {
            state.set_active_section(first.clone());
        }
    }

    pub fn is_active(&self, state: &NavigationState, id: &str) -> bool {
        state.active_section() == &id
    }

    /// Position of the active section in the configured order.
    pub fn active_index(&self, state: &NavigationState) -> usize {
        self.sections
            .index_of(state.active_section().as_str())
            .unwrap_or(0)
    }

    // ── Nav bar ────────────────────────────────────────────────────────

    pub fn nav_items(&self, state: &NavigationState) -> Vec<NavItem> {
        self.sections
            .iter()
            .map(|id| NavItem {
                id: id.as_str().to_string(),
                label: id.label(),
                active: state.active_section() == id,
            })
            .collect()
    }

    /// nav_items() as a JSON array for the JS renderer.
    pub fn nav_items_json(&self, state: &NavigationState) -> String {
        serde_json::to_string(&self.nav_items(state)).unwrap_or_else(|_| "[]".to_string())
    }

    // ── Compact-screen menu ────────────────────────────────────────────

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Returns true if the menu was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}
