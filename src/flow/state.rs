// ABOUTME: Pagination state machine for the tour
// Tracks the current screen index, completion, and the feedback trigger counter

use crate::error::FlowError;

/// Outcome of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next screen.
    Stepped,
    /// Was on the last screen; the tour is now complete. Reported exactly
    /// once per tour.
    Completed,
    /// The tour had already completed; nothing changed.
    Settled,
}

/// Index-based pagination state.
///
/// Invariant: `current_index < screen_count` at all times. Completion does
/// not reset or overrun the index; the flow stays parked on the last screen
/// until it is torn down by the caller.
#[derive(Debug, Clone)]
pub struct FlowState {
    current_index: usize,
    screen_count: usize,
    feedback_trigger: u64,
    completed: bool,
}

impl FlowState {
    /// Create state for a tour of `screen_count` screens, starting at the
    /// first screen. Rejects an empty tour up front so rendering never has
    /// to guard against out-of-bounds indexing.
    pub fn new(screen_count: usize) -> Result<Self, FlowError> {
        if screen_count == 0 {
            return Err(FlowError::EmptyScreens);
        }
        Ok(Self {
            current_index: 0,
            screen_count,
            feedback_trigger: 0,
            completed: false,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn screen_count(&self) -> usize {
        self.screen_count
    }

    pub fn is_last_screen(&self) -> bool {
        self.current_index == self.screen_count - 1
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Fraction of the tour behind the current screen: `index / count`.
    ///
    /// Deliberately reaches at most `(count - 1) / count`: the indicator
    /// never shows 100% before the tour completes.
    pub fn progress(&self) -> f64 {
        self.current_index as f64 / self.screen_count as f64
    }

    /// Apply one advance action.
    ///
    /// Before the last screen this moves the index forward. On the last
    /// screen it marks the tour complete, once. Further advances settle
    /// without effect, so completion can never be observed twice.
    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Settled;
        }
        if self.current_index < self.screen_count - 1 {
            self.current_index += 1;
            Advance::Stepped
        } else {
            self.completed = true;
            Advance::Completed
        }
    }

    /// Increment and return the feedback trigger. Called after the index
    /// mutation for an advance has been applied, so the cue always fires
    /// against the post-transition state.
    pub fn bump_feedback(&mut self) -> u64 {
        self.feedback_trigger += 1;
        self.feedback_trigger
    }

    pub fn feedback_trigger(&self) -> u64 {
        self.feedback_trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tour_rejected() {
        assert_eq!(FlowState::new(0).unwrap_err(), FlowError::EmptyScreens);
    }

    #[test]
    fn test_initial_state() {
        let state = FlowState::new(3).unwrap();
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_completed());
        assert_eq!(state.feedback_trigger(), 0);
    }

    #[test]
    fn test_n_minus_one_advances_reach_last_screen_without_completing() {
        for n in 1..6 {
            let mut state = FlowState::new(n).unwrap();
            for _ in 0..n - 1 {
                assert_eq!(state.advance(), Advance::Stepped);
            }
            assert_eq!(state.current_index(), n - 1);
            assert!(state.is_last_screen());
            assert!(!state.is_completed());
        }
    }

    #[test]
    fn test_nth_advance_completes() {
        let mut state = FlowState::new(3).unwrap();
        state.advance();
        state.advance();
        assert_eq!(state.advance(), Advance::Completed);
        assert!(state.is_completed());
        // Index is neither reset nor pushed past the end
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_advance_after_completion_settles() {
        let mut state = FlowState::new(2).unwrap();
        state.advance();
        assert_eq!(state.advance(), Advance::Completed);
        assert_eq!(state.advance(), Advance::Settled);
        assert_eq!(state.advance(), Advance::Settled);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_single_screen_completes_on_first_advance() {
        let mut state = FlowState::new(1).unwrap();
        assert!(state.is_last_screen());
        assert_eq!(state.advance(), Advance::Completed);
    }

    #[test]
    fn test_progress_is_index_over_count() {
        let mut state = FlowState::new(4).unwrap();
        assert_eq!(state.progress(), 0.0);
        state.advance();
        assert_eq!(state.progress(), 0.25);
        state.advance();
        state.advance();
        // On the last screen progress stays short of 1.0
        assert_eq!(state.progress(), 0.75);
        state.advance();
        assert_eq!(state.progress(), 0.75);
    }

    #[test]
    fn test_feedback_trigger_counts_up() {
        let mut state = FlowState::new(2).unwrap();
        assert_eq!(state.bump_feedback(), 1);
        assert_eq!(state.bump_feedback(), 2);
        assert_eq!(state.feedback_trigger(), 2);
    }
}
