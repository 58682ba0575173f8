//! Pattern 1: Typed Failure Enums
//! Example: Matching on Validator Failures
//!
//! Run with: cargo run --example p1_typed_failures

use path_validation_patterns::{PathValidator, Step, ValidationError};

fn main() {
    println!("=== Typed Validation Failures ===\n");

    let mut bot = PathValidator::new(
        "Scout",
        vec![Step::Forward, Step::Left, Step::Forward, Step::Right],
    );

    // A wrong claim produces a value, not a crash. The payload carries both
    // sides of the mismatch for diagnostics.
    let err = bot.validate(Step::Left).unwrap_err();
    match err {
        ValidationError::InvalidMove { found, expected } => {
            println!("Mismatch: claimed {} but the path expects {}", found, expected);
        }
        ValidationError::EndOfPath => println!("Walked off the end of the path"),
    }

    // Display gives a ready-made diagnostic line.
    println!("As a message: {}", err);

    // Failures are plain values, so they compare structurally.
    assert_eq!(
        err,
        ValidationError::InvalidMove {
            found: Step::Left,
            expected: Step::Forward,
        }
    );

    // The second kind appears once the path is used up.
    println!("\n=== Exhausting the Path ===");
    let mut short = PathValidator::new("Hopper", vec![Step::Forward]);
    short.move_forward().unwrap();
    match short.turn_left() {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Error (expected): {}", e),
    }

    println!("\n=== Key Points ===");
    println!("1. An error enum makes every failure mode visible at the call site");
    println!("2. Struct-style variants carry the data needed for a useful message");
    println!("3. Copy + Eq errors can be matched, stored, and compared in tests");
}
