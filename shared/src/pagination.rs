//! ==============================================================================
//! pagination.rs - pagination controls for the mappings table
//! ==============================================================================
//!
//! purpose:
//!     turns (current page, total pages) into the controls the dashboard
//!     renders: a previous control, a bounded window of page numbers and a
//!     next control. pure function, no state beyond its arguments.
//!
//! window:
//!     two pages either side of the current page, cut off at 1 and at the
//!     last page, so never more than WINDOW_SIZE numbers:
//!
//! ```text
//!     current=5, total=10   ->  3 4 [5] 6 7
//!     current=1, total=10   -> [1] 2 3
//!     current=10, total=10  ->  8 9 [10]
//!     current=1, total=3    -> [1] 2 3
//! ```
//!
//! ==============================================================================

use std::ops::RangeInclusive;

/// pages shown on each side of the current page
pub const WINDOW_RADIUS: u32 = 2;

/// maximum number of page-number controls shown at once
pub const WINDOW_SIZE: u32 = 2 * WINDOW_RADIUS + 1;

/// attribute carrying the target page on every clickable control
pub const PAGE_ATTRIBUTE: &str = "data-page";

// ==============================================================================
// types
// ==============================================================================

/// previous / next control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    /// clickable, navigates to the contained page
    Active(u32),
    /// rendered but not interactive
    Disabled,
}

/// one entry of the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// the page being shown; not interactive
    Current(u32),
    /// any other page in the window
    Link(u32),
}

/// everything needed to render the pagination container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub previous: NavControl,
    pub pages: Vec<PageControl>,
    pub next: NavControl,
}

impl NavControl {
    pub fn target(self) -> Option<u32> {
        match self {
            NavControl::Active(page) => Some(page),
            NavControl::Disabled => None,
        }
    }

    pub fn is_disabled(self) -> bool {
        self == NavControl::Disabled
    }
}

impl PageControl {
    pub fn number(self) -> u32 {
        match self {
            PageControl::Current(page) | PageControl::Link(page) => page,
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, PageControl::Current(_))
    }
}

// ==============================================================================
// rendering
// ==============================================================================

/// build the controls for `current` out of `total` pages
///
/// `current` is clamped into [1, total]. with no pages both navigation
/// controls are disabled and the window is empty.
pub fn pagination_view(current: u32, total: u32) -> PaginationView {
    if total == 0 {
        return PaginationView {
            previous: NavControl::Disabled,
            pages: Vec::new(),
            next: NavControl::Disabled,
        };
    }

    let current = current.clamp(1, total);

    let previous = if current > 1 {
        NavControl::Active(current - 1)
    } else {
        NavControl::Disabled
    };

    let next = if current < total {
        NavControl::Active(current + 1)
    } else {
        NavControl::Disabled
    };

    let pages = page_window(current, total)
        .map(|page| {
            if page == current {
                PageControl::Current(page)
            } else {
                PageControl::Link(page)
            }
        })
        .collect();

    PaginationView { previous, pages, next }
}

/// page numbers visible around `current`
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    if total == 0 {
        return RangeInclusive::new(1, 0);
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total);

    start..=end
}

/// parse the value of a `data-page` attribute back into a page number
pub fn parse_page_attribute(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|page| *page >= 1)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_is_bounded_and_contiguous() {
        for total in 1..=40 {
            for current in 1..=total {
                let view = pagination_view(current, total);
                let numbers: Vec<u32> = view.pages.iter().map(|p| p.number()).collect();

                assert!(!numbers.is_empty(), "{current}/{total}");
                assert!(numbers.len() as u32 <= WINDOW_SIZE, "{current}/{total}");
                assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
                assert!(numbers.contains(&current));
                assert!(numbers.iter().all(|n| (1..=total).contains(n)));
            }
        }
    }

    #[test]
    fn test_exactly_one_current_marker() {
        let view = pagination_view(4, 9);
        let current: Vec<_> = view.pages.iter().filter(|p| p.is_current()).collect();
        assert_eq!(current, vec![&PageControl::Current(4)]);
    }

    #[test]
    fn test_nav_controls_disabled_at_edges() {
        for total in 1..=12 {
            for current in 1..=total {
                let view = pagination_view(current, total);
                assert_eq!(view.previous.is_disabled(), current == 1);
                assert_eq!(view.next.is_disabled(), current == total);
            }
        }
    }

    #[test]
    fn test_nav_targets_step_by_one() {
        let view = pagination_view(5, 10);
        assert_eq!(view.previous.target(), Some(4));
        assert_eq!(view.next.target(), Some(6));
    }

    #[test]
    fn test_window_matches_centered_range_away_from_edges() {
        assert_eq!(page_window(5, 10), 3..=7);
        assert_eq!(page_window(50_000, 1_000_000), 49_998..=50_002);
    }

    #[test]
    fn test_window_is_cut_off_at_edges() {
        assert_eq!(page_window(1, 10), 1..=3);
        assert_eq!(page_window(2, 10), 1..=4);
        assert_eq!(page_window(9, 10), 7..=10);
        assert_eq!(page_window(10, 10), 8..=10);
    }

    #[test]
    fn test_full_window_only_with_two_pages_each_side() {
        for total in 1..=20 {
            for current in 1..=total {
                let full = current > WINDOW_RADIUS && current + WINDOW_RADIUS <= total;
                let len = page_window(current, total).count() as u32;
                assert_eq!(len == WINDOW_SIZE, full, "{current}/{total}");
            }
        }
    }

    #[test]
    fn test_three_pages_first_selected() {
        let view = pagination_view(1, 3);
        assert_eq!(view.previous, NavControl::Disabled);
        assert_eq!(
            view.pages,
            vec![PageControl::Current(1), PageControl::Link(2), PageControl::Link(3)]
        );
        assert_eq!(view.next, NavControl::Active(2));
    }

    #[test]
    fn test_no_pages() {
        let view = pagination_view(1, 0);
        assert!(view.pages.is_empty());
        assert!(view.previous.is_disabled());
        assert!(view.next.is_disabled());
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        let view = pagination_view(12, 4);
        assert_eq!(view.pages.last(), Some(&PageControl::Current(4)));
        assert!(view.next.is_disabled());
    }

    #[test]
    fn test_parse_page_attribute() {
        assert_eq!(parse_page_attribute("3"), Some(3));
        assert_eq!(parse_page_attribute(" 12 "), Some(12));
        assert_eq!(parse_page_attribute("0"), None);
        assert_eq!(parse_page_attribute("next"), None);
    }
}
