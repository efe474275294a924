//! Crossover edge detection shared by crossover-style strategies.
//!
//! Two states: `NoPriorValues` until the first valid pair of readings is
//! observed, then `HasPriorValues` holding the last pair. Each observation in
//! `HasPriorValues` compares previous and current `fast - slow` and reports a
//! cross when the sign changes:
//! - `Above` (golden cross): prev fast <= prev slow, now fast > slow.
//! - `Below` (death cross): prev fast >= prev slow, now fast < slow.
//!
//! Callers only observe non-sentinel readings; a tick with missing data
//! leaves the state untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cross {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CrossoverState {
    #[default]
    NoPriorValues,
    HasPriorValues { fast: f64, slow: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct CrossoverTracker {
    state: CrossoverState,
}

impl CrossoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CrossoverState {
        self.state
    }

    pub fn has_prior(&self) -> bool {
        matches!(self.state, CrossoverState::HasPriorValues { .. })
    }

    /// Record the current pair and report a crossover against the previous one.
    pub fn observe(&mut self, fast: f64, slow: f64) -> Option<Cross> {
        let cross = match self.state {
            CrossoverState::NoPriorValues => None,
            CrossoverState::HasPriorValues {
                fast: prev_fast,
                slow: prev_slow,
            } => {
                if prev_fast <= prev_slow && fast > slow {
                    Some(Cross::Above)
                } else if prev_fast >= prev_slow && fast < slow {
                    Some(Cross::Below)
                } else {
                    None
                }
            }
        };

        self.state = CrossoverState::HasPriorValues { fast, slow };
        cross
    }

    pub fn reset(&mut self) {
        self.state = CrossoverState::NoPriorValues;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_never_crosses() {
        let mut tracker = CrossoverTracker::new();
        assert!(!tracker.has_prior());
        assert_eq!(tracker.observe(105.0, 100.0), None);
        assert!(tracker.has_prior());
    }

    #[test]
    fn golden_and_death_cross() {
        let mut tracker = CrossoverTracker::new();
        tracker.observe(95.0, 100.0);
        assert_eq!(tracker.observe(101.0, 100.0), Some(Cross::Above));
        assert_eq!(tracker.observe(102.0, 100.0), None);
        assert_eq!(tracker.observe(99.0, 100.0), Some(Cross::Below));
    }

    #[test]
    fn touching_then_separating_counts() {
        let mut tracker = CrossoverTracker::new();
        tracker.observe(100.0, 100.0);
        assert_eq!(tracker.observe(100.5, 100.0), Some(Cross::Above));

        let mut tracker = CrossoverTracker::new();
        tracker.observe(100.0, 100.0);
        assert_eq!(tracker.observe(99.5, 100.0), Some(Cross::Below));
    }

    #[test]
    fn landing_on_equality_is_not_a_cross() {
        let mut tracker = CrossoverTracker::new();
        tracker.observe(95.0, 100.0);
        assert_eq!(tracker.observe(100.0, 100.0), None);
    }

    #[test]
    fn reset_forgets_prior_values() {
        let mut tracker = CrossoverTracker::new();
        tracker.observe(95.0, 100.0);
        tracker.reset();
        assert_eq!(tracker.state(), CrossoverState::NoPriorValues);
        assert_eq!(tracker.observe(105.0, 100.0), None);
    }
}
