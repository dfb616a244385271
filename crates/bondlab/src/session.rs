//! Per-session play state: level progression, score, messages.

use crate::levels::Level;
use crate::validator::CheckReport;

/// Points awarded for each level solved.
pub const CHECK_REWARD: u32 = 100;

/// Mutable play state. Score outlives levels and resets; the rest is
/// per-level.
#[derive(Debug, Clone)]
pub struct Session {
    pub current_level: usize,
    pub score: u32,
    pub level_complete: bool,
    pub message: String,
    pub hint: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_level: 0,
            score: 0,
            level_complete: false,
            message: String::new(),
            hint: String::new(),
        }
    }

    /// Clear per-level state. Score persists.
    pub fn reset_level(&mut self) {
        self.level_complete = false;
        self.message.clear();
        self.hint.clear();
    }

    /// Fold a check report into the session. Every successful check pays
    /// the reward, repeats after completion included.
    pub fn apply_report(&mut self, report: &CheckReport) {
        self.message = report.message.clone();
        if report.passed {
            self.level_complete = true;
            self.score += CHECK_REWARD;
        }
    }

    pub fn show_hint(&mut self, level: &Level) {
        self.hint = format!(
            "Hint: {} ({}) - {}",
            level.name, level.display_formula, level.description
        );
    }

    /// Move on to the next level. Returns false when the set is
    /// exhausted, leaving the congratulations message in place.
    pub fn advance_level(&mut self, level_count: usize) -> bool {
        self.current_level += 1;
        if self.current_level >= level_count {
            self.message = "Congratulations! You've completed all levels!".to_string();
            return false;
        }
        self.reset_level();
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Levels;

    fn passing_report() -> CheckReport {
        CheckReport {
            passed: true,
            built: "HHO".into(),
            message: "Correct! You built Water (H2O)!".into(),
        }
    }

    fn failing_report() -> CheckReport {
        CheckReport {
            passed: false,
            built: "HH".into(),
            message: "Incorrect. You built HH, but the target is H2O.".into(),
        }
    }

    #[test]
    fn every_successful_check_pays() {
        let mut session = Session::new();
        session.apply_report(&passing_report());
        assert!(session.level_complete);
        assert_eq!(session.score, CHECK_REWARD);

        // Checking again after completion pays again.
        session.apply_report(&passing_report());
        assert!(session.level_complete);
        assert_eq!(session.score, 2 * CHECK_REWARD);
    }

    #[test]
    fn failure_sets_message_only() {
        let mut session = Session::new();
        session.apply_report(&failing_report());
        assert!(!session.level_complete);
        assert_eq!(session.score, 0);
        assert!(session.message.contains("Incorrect"));
    }

    #[test]
    fn reset_preserves_score() {
        let mut session = Session::new();
        session.apply_report(&passing_report());
        let level = Levels::builtin().get(0).unwrap().clone();
        session.show_hint(&level);

        session.reset_level();
        assert!(!session.level_complete);
        assert!(session.message.is_empty());
        assert!(session.hint.is_empty());
        assert_eq!(session.score, CHECK_REWARD);
    }

    #[test]
    fn advancing_past_the_end_congratulates() {
        let mut session = Session::new();
        assert!(session.advance_level(3));
        assert_eq!(session.current_level, 1);
        assert!(session.advance_level(3));
        assert!(!session.advance_level(3));
        assert!(session.message.contains("Congratulations"));
    }

    #[test]
    fn hint_names_the_molecule() {
        let mut session = Session::new();
        let level = Levels::builtin().get(0).unwrap().clone();
        session.show_hint(&level);
        assert!(session.hint.contains("Water"));
        assert!(session.hint.contains("H2O"));
    }
}
