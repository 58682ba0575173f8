//! Pattern 2: The Validator as a State Machine
//! Example: A Cursor That Only Moves on Success
//!
//! Run with: cargo run --example p2_guided_traversal

use path_validation_patterns::{PathValidator, Step};

fn main() {
    println!("=== Guided Traversal Demo ===\n");

    let mut bot = PathValidator::new(
        "Courier",
        vec![Step::Forward, Step::Left, Step::Forward, Step::Right],
    );
    println!(
        "{} starts at step {} of {}",
        bot.name(),
        bot.cursor(),
        bot.path().len()
    );

    // Walk the route in the expected order.
    bot.move_forward().unwrap();
    bot.turn_left().unwrap();
    println!("After two good moves: cursor = {}, remaining = {}", bot.cursor(), bot.remaining());

    // A wrong turn is rejected and the cursor stays put.
    println!("\n=== Wrong Turn ===");
    if let Err(e) = bot.turn_right() {
        println!("Rejected: {}", e);
    }
    println!("Cursor is still {}", bot.cursor());

    // Finish the route with the corrected moves.
    bot.move_forward().unwrap();
    bot.turn_right().unwrap();
    println!("\nRoute complete: {}", bot.is_complete());

    // The terminal state absorbs every further claim.
    println!("\n=== Past the End ===");
    for claimed in [Step::Left, Step::Forward] {
        match bot.validate(claimed) {
            Ok(()) => println!("Unexpected success"),
            Err(e) => println!("{} -> {}", claimed, e),
        }
    }

    // reset() rewinds to the start, making the validator reusable.
    bot.reset();
    println!("\nAfter reset: cursor = {}, complete = {}", bot.cursor(), bot.is_complete());
}
