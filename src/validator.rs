use thiserror::Error;

use crate::path::Path;
use crate::step::Step;

/// The ways a claimed move can be rejected.
///
/// Neither kind is fatal to the validator: the caller may retry with a
/// corrected step or call [`PathValidator::reset`] and start over.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The claimed step does not match the next expected step.
    #[error("moved {found} when the next step should have been {expected}")]
    InvalidMove { found: Step, expected: Step },
    /// Every step of the path has already been consumed.
    #[error("attempted to move past the end of the path")]
    EndOfPath,
}

/// Validates a stream of claimed moves against a fixed path.
///
/// The validator keeps a cursor to the next expected step. The cursor moves
/// forward only when a claim matches; both failure kinds leave it untouched.
/// Invariant: `cursor <= path.len()` at all times.
#[derive(Debug, Clone)]
pub struct PathValidator {
    name: String,
    path: Path,
    cursor: usize,
}

impl PathValidator {
    pub fn new(name: impl Into<String>, path: impl Into<Path>) -> Self {
        PathValidator {
            name: name.into(),
            path: path.into(),
            cursor: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the next expected step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every step of the path has been matched. An empty path is
    /// complete from the start.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.path.len()
    }

    /// Number of steps still to be matched.
    pub fn remaining(&self) -> usize {
        self.path.len() - self.cursor
    }

    /// Check `claimed` against the next expected step, advancing on a match.
    pub fn validate(&mut self, claimed: Step) -> Result<(), ValidationError> {
        let expected = match self.path.get(self.cursor) {
            Some(step) => step,
            None => return Err(ValidationError::EndOfPath),
        };
        if claimed != expected {
            return Err(ValidationError::InvalidMove {
                found: claimed,
                expected,
            });
        }
        self.cursor += 1;
        Ok(())
    }

    /// Equivalent to `validate(Step::Left)`.
    pub fn turn_left(&mut self) -> Result<(), ValidationError> {
        self.validate(Step::Left)
    }

    /// Equivalent to `validate(Step::Right)`.
    pub fn turn_right(&mut self) -> Result<(), ValidationError> {
        self.validate(Step::Right)
    }

    /// Equivalent to `validate(Step::Forward)`.
    pub fn move_forward(&mut self) -> Result<(), ValidationError> {
        self.validate(Step::Forward)
    }

    /// Rewind to the start of the path. Idempotent.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod traversal_tests {
    use super::*;

    fn home_path() -> Vec<Step> {
        vec![Step::Forward, Step::Left, Step::Forward, Step::Right]
    }

    #[test]
    fn correct_walk_succeeds_step_by_step() {
        let mut bot = PathValidator::new("Scout", home_path());
        assert_eq!(bot.validate(Step::Forward), Ok(()));
        assert_eq!(bot.validate(Step::Left), Ok(()));
        assert_eq!(bot.validate(Step::Forward), Ok(()));
        assert_eq!(bot.validate(Step::Right), Ok(()));
        assert_eq!(bot.cursor(), 4);
        assert!(bot.is_complete());
    }

    #[test]
    fn named_wrappers_match_validate() {
        let mut bot = PathValidator::new("Scout", home_path());
        assert_eq!(bot.move_forward(), Ok(()));
        assert_eq!(bot.turn_left(), Ok(()));
        assert_eq!(bot.move_forward(), Ok(()));
        assert_eq!(bot.turn_right(), Ok(()));
        assert!(bot.is_complete());
    }

    #[test]
    fn remaining_counts_down_as_the_walk_progresses() {
        let mut bot = PathValidator::new("Scout", home_path());
        assert_eq!(bot.remaining(), 4);
        bot.move_forward().unwrap();
        bot.turn_left().unwrap();
        assert_eq!(bot.remaining(), 2);
    }

    #[test]
    fn empty_path_is_complete_immediately() {
        let mut bot = PathValidator::new("Idle", Vec::new());
        assert!(bot.is_complete());
        assert_eq!(bot.validate(Step::Forward), Err(ValidationError::EndOfPath));
        assert_eq!(bot.validate(Step::Left), Err(ValidationError::EndOfPath));
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn wrong_first_move_reports_both_steps() {
        let mut bot = PathValidator::new(
            "Scout",
            vec![Step::Forward, Step::Left, Step::Forward, Step::Right],
        );
        let err = bot.validate(Step::Left).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidMove {
                found: Step::Left,
                expected: Step::Forward,
            }
        );
        assert_eq!(bot.cursor(), 0);
    }

    #[test]
    fn failures_leave_the_cursor_untouched() {
        let mut bot = PathValidator::new("Scout", vec![Step::Forward, Step::Right]);
        bot.move_forward().unwrap();
        let before = bot.cursor();
        assert!(bot.turn_left().is_err());
        assert_eq!(bot.cursor(), before);
        assert!(bot.turn_left().is_err());
        assert_eq!(bot.cursor(), before);
    }

    #[test]
    fn corrected_retry_succeeds_after_a_mismatch() {
        let mut bot = PathValidator::new("Scout", vec![Step::Right]);
        assert!(bot.turn_left().is_err());
        assert_eq!(bot.turn_right(), Ok(()));
        assert!(bot.is_complete());
    }

    #[test]
    fn completed_path_absorbs_every_further_claim() {
        let mut bot = PathValidator::new("Scout", vec![Step::Forward]);
        bot.move_forward().unwrap();
        for claimed in [Step::Left, Step::Right, Step::Forward] {
            assert_eq!(bot.validate(claimed), Err(ValidationError::EndOfPath));
            assert_eq!(bot.cursor(), 1);
        }
    }

    #[test]
    fn error_messages_name_the_steps() {
        let err = ValidationError::InvalidMove {
            found: Step::Left,
            expected: Step::Forward,
        };
        assert_eq!(
            err.to_string(),
            "moved left when the next step should have been forward"
        );
        assert_eq!(
            ValidationError::EndOfPath.to_string(),
            "attempted to move past the end of the path"
        );
    }
}

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let mut bot = PathValidator::new("Scout", vec![Step::Forward, Step::Left]);
        bot.move_forward().unwrap();
        bot.reset();
        assert_eq!(bot.cursor(), 0);
        bot.reset();
        assert_eq!(bot.cursor(), 0);
    }

    #[test]
    fn validator_is_reusable_across_full_traversals() {
        let mut bot = PathValidator::new("Scout", vec![Step::Left, Step::Forward]);
        for _ in 0..3 {
            assert_eq!(bot.turn_left(), Ok(()));
            assert_eq!(bot.move_forward(), Ok(()));
            assert!(bot.is_complete());
            bot.reset();
        }
        assert_eq!(bot.cursor(), 0);
    }
}
