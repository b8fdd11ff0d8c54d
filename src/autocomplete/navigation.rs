//! Open/closed state of the suggestion popup and keyboard navigation
//!
//! ```text
//!            matches >= 1                 ArrowUp / ArrowDown (wrapping)
//!   Closed ───────────────► Open(list, 0) ◄──────┐
//!     ▲                          │  └────────────┘
//!     │  Enter/Tab/row click     │
//!     └──────────────────────────┘  (accepted)
//!        Escape/click outside/no matches (dismissed)
//! ```
//!
//! While open, the selected index always points into a non-empty list.

use super::geometry::Point;
use super::matcher::Candidate;

/// Keys the popup cares about; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Enter,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Result of feeding an input event to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Not handled; the event belongs to the text surface
    Ignored,
    /// Selection moved within the open popup
    Moved { selected: usize },
    /// Popup closed without a selection
    Dismissed,
    /// Popup closed and this candidate was chosen
    Accepted(Candidate),
}

impl Transition {
    /// Whether the event was consumed by the popup
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// Popup state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NavigationState {
    #[default]
    Closed,
    Open {
        candidates: Vec<Candidate>,
        selected: usize,
        anchor: Point,
    },
}

impl NavigationState {
    /// Open on `candidates` with the first one selected
    ///
    /// An empty list gives `Closed`.
    pub fn open(candidates: Vec<Candidate>, anchor: Point) -> Self {
        if candidates.is_empty() {
            Self::Closed
        } else {
            Self::Open {
                candidates,
                selected: 0,
                anchor,
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Self::Open { candidates, .. } => candidates,
            Self::Closed => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Open { selected, .. } => Some(*selected),
            Self::Closed => None,
        }
    }

    /// Get the currently selected candidate
    pub fn selected(&self) -> Option<&Candidate> {
        match self {
            Self::Open {
                candidates,
                selected,
                ..
            } => candidates.get(*selected),
            Self::Closed => None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Open { anchor, .. } => Some(*anchor),
            Self::Closed => None,
        }
    }

    /// Move the popup; no effect when closed
    pub fn set_anchor(&mut self, point: Point) {
        if let Self::Open { anchor, .. } = self {
            *anchor = point;
        }
    }

    /// Select next suggestion, wrapping to the first
    pub fn select_next(&mut self) -> Transition {
        match self {
            Self::Open {
                candidates,
                selected,
                ..
            } => {
                *selected = (*selected + 1) % candidates.len();
                Transition::Moved {
                    selected: *selected,
                }
            }
            Self::Closed => Transition::Ignored,
        }
    }

    /// Select previous suggestion, wrapping to the last
    pub fn select_prev(&mut self) -> Transition {
        match self {
            Self::Open {
                candidates,
                selected,
                ..
            } => {
                *selected = (*selected + candidates.len() - 1) % candidates.len();
                Transition::Moved {
                    selected: *selected,
                }
            }
            Self::Closed => Transition::Ignored,
        }
    }

    /// Close and hand back the selected candidate
    pub fn accept(&mut self) -> Transition {
        match std::mem::take(self) {
            Self::Open {
                mut candidates,
                selected,
                ..
            } => Transition::Accepted(candidates.swap_remove(selected)),
            Self::Closed => Transition::Ignored,
        }
    }

    /// Close without a selection
    pub fn dismiss(&mut self) -> Transition {
        match std::mem::take(self) {
            Self::Open { .. } => Transition::Dismissed,
            Self::Closed => Transition::Ignored,
        }
    }

    /// Apply a key press
    ///
    /// Only navigation keys are consumed, and only while open.
    pub fn handle_key(&mut self, key: NavigationKey) -> Transition {
        if !self.is_open() {
            return Transition::Ignored;
        }

        let transition = match key {
            NavigationKey::ArrowDown => self.select_next(),
            NavigationKey::ArrowUp => self.select_prev(),
            NavigationKey::Enter | NavigationKey::Tab => self.accept(),
            NavigationKey::Escape => self.dismiss(),
            NavigationKey::Other => Transition::Ignored,
        };
        tracing::trace!(?key, ?transition, "Popup key");
        transition
    }

    /// Accept the row at `index` regardless of the current selection
    ///
    /// Rows that do not exist are ignored.
    pub fn select_row(&mut self, index: usize) -> Transition {
        match self {
            Self::Open {
                candidates,
                selected,
                ..
            } if index < candidates.len() => *selected = index,
            _ => return Transition::Ignored,
        }
        self.accept()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> NavigationState {
        NavigationState::open(
            vec![
                Candidate::user_variable("A"),
                Candidate::user_variable("B"),
                Candidate::user_variable("C"),
            ],
            Point::default(),
        )
    }

    #[test]
    fn test_open_with_empty_list_is_closed() {
        assert_eq!(
            NavigationState::open(Vec::new(), Point::default()),
            NavigationState::Closed
        );
    }

    #[test]
    fn test_open_selects_first() {
        let state = abc();
        assert!(state.is_open());
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.selected().unwrap().text, "A");
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        let mut state = abc();
        assert_eq!(
            state.handle_key(NavigationKey::ArrowUp),
            Transition::Moved { selected: 2 }
        );
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn test_arrow_down_wraps_to_first() {
        let mut state = abc();
        state.handle_key(NavigationKey::ArrowDown);
        state.handle_key(NavigationKey::ArrowDown);
        assert_eq!(state.selected_index(), Some(2));
        state.handle_key(NavigationKey::ArrowDown);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_enter_accepts_selected() {
        let mut state = abc();
        state.handle_key(NavigationKey::ArrowDown);
        let transition = state.handle_key(NavigationKey::Enter);
        match transition {
            Transition::Accepted(candidate) => assert_eq!(candidate.text, "B"),
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert_eq!(state, NavigationState::Closed);
    }

    #[test]
    fn test_tab_accepts_selected() {
        let mut state = abc();
        assert!(matches!(
            state.handle_key(NavigationKey::Tab),
            Transition::Accepted(ref c) if c.text == "A"
        ));
        assert!(!state.is_open());
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = abc();
        assert_eq!(
            state.handle_key(NavigationKey::Escape),
            Transition::Dismissed
        );
        assert!(!state.is_open());
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut state = abc();
        let transition = state.handle_key(NavigationKey::Other);
        assert!(!transition.is_consumed());
        assert!(state.is_open());
    }

    #[test]
    fn test_closed_ignores_everything() {
        let mut state = NavigationState::Closed;
        for key in [
            NavigationKey::Enter,
            NavigationKey::Tab,
            NavigationKey::Escape,
            NavigationKey::ArrowUp,
            NavigationKey::ArrowDown,
        ] {
            assert_eq!(state.handle_key(key), Transition::Ignored);
        }
        assert_eq!(state.select_row(0), Transition::Ignored);
        assert_eq!(state.dismiss(), Transition::Ignored);
    }

    #[test]
    fn test_row_click_overrides_selection() {
        let mut state = abc();
        state.handle_key(NavigationKey::ArrowDown);
        match state.select_row(2) {
            Transition::Accepted(candidate) => assert_eq!(candidate.text, "C"),
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert!(!state.is_open());
    }

    #[test]
    fn test_row_click_out_of_range_is_ignored() {
        let mut state = abc();
        assert_eq!(state.select_row(3), Transition::Ignored);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_set_anchor_only_when_open() {
        let mut state = abc();
        state.set_anchor(Point::new(3.0, 4.0));
        assert_eq!(state.anchor(), Some(Point::new(3.0, 4.0)));

        let mut closed = NavigationState::Closed;
        closed.set_anchor(Point::new(3.0, 4.0));
        assert_eq!(closed.anchor(), None);
    }

    proptest! {
        #[test]
        fn test_navigation_stays_in_bounds(
            count in 1usize..10,
            moves in prop::collection::vec(any::<bool>(), 0..40)
        ) {
            let candidates = (0..count)
                .map(|i| Candidate::user_variable(format!("v{}", i)))
                .collect();
            let mut state = NavigationState::open(candidates, Point::default());
            let mut expected = 0usize;
            for down in moves {
                if down {
                    state.handle_key(NavigationKey::ArrowDown);
                    expected = (expected + 1) % count;
                } else {
                    state.handle_key(NavigationKey::ArrowUp);
                    expected = (expected + count - 1) % count;
                }
                prop_assert_eq!(state.selected_index(), Some(expected));
            }
        }
    }
}
