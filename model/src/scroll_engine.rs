// ============================================================================
// SCROLL ENGINE — derives nav chrome flags from the viewport scroll offset
// ============================================================================
//
// THE PATTERN:
//    - The mounted view forwards every scroll event's offset to on_scroll().
//    - Two independent thresholds produce two flags:
//        is_scrolled             = offset > scrolled_threshold      (50px)
//        is_back_to_top_visible  = offset > back_to_top_threshold   (300px)
//    - A flag is written only when it differs from the stored value, so a
//      burst of scroll events inside the same band causes no re-render.
//    - on_scroll() returns whether anything changed; the page view bumps its
//      data_version on true only.
//
// The tracker never infers the active section from the offset. Active
// section changes come from explicit navigation only.
//
// ============================================================================

use portfolio_shared::{sanitize_offset, BACK_TO_TOP_THRESHOLD_PX, SCROLLED_THRESHOLD_PX};
use tracing::debug;

use crate::navigation::NavigationState;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    scrolled_threshold: f64,
    back_to_top_threshold: f64,
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new(scrolled_threshold: f64, back_to_top_threshold: f64) -> ScrollTracker {
        ScrollTracker {
            scrolled_threshold,
            back_to_top_threshold,
            last_offset: 0.0,
        }
    }

    pub fn scrolled_threshold(&self) -> f64 {
        self.scrolled_threshold
    }

    pub fn back_to_top_threshold(&self) -> f64 {
        self.back_to_top_threshold
    }

    /// Offset seen by the most recent on_scroll(), after sanitizing.
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Recompute both flags for `offset` and write the ones that changed.
    /// Returns true if the state was modified.
    pub fn on_scroll(&mut self, state: &mut NavigationState, offset: f64) -> bool {
        let offset = sanitize_offset(offset);
        self.last_offset = offset;

        let scrolled = offset > self.scrolled_threshold;
        let back_to_top = offset > self.back_to_top_threshold;
        let mut changed = false;

        if scrolled != state.is_scrolled() {
            state.set_scrolled(scrolled);
            changed = true;
        }
        if back_to_top != state.is_back_to_top_visible() {
            state.set_back_to_top_visible(back_to_top);
            changed = true;
        }

        if changed {
            debug!(offset, scrolled, back_to_top, "scroll flags changed");
        }
        changed
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker::new(SCROLLED_THRESHOLD_PX, BACK_TO_TOP_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::SectionSet;
    use proptest::prelude::*;

    fn fresh() -> (ScrollTracker, NavigationState) {
        (ScrollTracker::default(), NavigationState::new(&SectionSet::full()))
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let (mut tracker, mut state) = fresh();

        tracker.on_scroll(&mut state, 50.0);
        assert!(!state.is_scrolled());

        tracker.on_scroll(&mut state, 50.5);
        assert!(state.is_scrolled());
        assert!(!state.is_back_to_top_visible());

        tracker.on_scroll(&mut state, 300.0);
        assert!(!state.is_back_to_top_visible());

        tracker.on_scroll(&mut state, 301.0);
        assert!(state.is_back_to_top_visible());
    }

    #[test]
    fn test_reports_change_only_on_band_crossing() {
        let (mut tracker, mut state) = fresh();

        assert!(!tracker.on_scroll(&mut state, 10.0));
        assert!(tracker.on_scroll(&mut state, 60.0));
        assert!(!tracker.on_scroll(&mut state, 70.0));
        assert!(!tracker.on_scroll(&mut state, 299.0));
        assert!(tracker.on_scroll(&mut state, 900.0));
        assert!(!tracker.on_scroll(&mut state, 1200.0));
        assert!(tracker.on_scroll(&mut state, 0.0));
        assert!(!state.is_scrolled());
        assert!(!state.is_back_to_top_visible());
    }

    #[test]
    fn test_never_touches_active_section() {
        let (mut tracker, mut state) = fresh();
        tracker.on_scroll(&mut state, 5000.0);
        assert_eq!(state.active_section(), &"home");
    }

    #[test]
    fn test_bad_offsets_read_as_top() {
        let (mut tracker, mut state) = fresh();
        tracker.on_scroll(&mut state, 400.0);
        assert!(tracker.on_scroll(&mut state, f64::NAN));
        assert!(!state.is_scrolled());
        tracker.on_scroll(&mut state, -30.0);
        assert_eq!(tracker.last_offset(), 0.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut tracker = ScrollTracker::new(0.0, 10.0);
        let mut state = NavigationState::new(&SectionSet::compact());
        tracker.on_scroll(&mut state, 5.0);
        assert!(state.is_scrolled());
        assert!(!state.is_back_to_top_visible());
    }

    proptest! {
        #[test]
        fn prop_flags_follow_offset(history in proptest::collection::vec(0.0f64..2000.0, 0..8), y in 0.0f64..2000.0) {
            let (mut tracker, mut state) = fresh();
            for h in history {
                tracker.on_scroll(&mut state, h);
            }
            tracker.on_scroll(&mut state, y);
            prop_assert_eq!(state.is_scrolled(), y > 50.0);
            prop_assert_eq!(state.is_back_to_top_visible(), y > 300.0);
        }
    }
}
