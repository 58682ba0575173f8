//! Pattern 3: Propagation and Safe Execution
//! Example: Composing Moves with ? and Reporting Outcomes
//!
//! Run with: cargo run --example p3_safe_execution

use path_validation_patterns::{move_safely, perform, PathValidator, Step, ValidationError};

/// Walk the whole home route. Each ? early-returns the first rejection.
fn go_home(bot: &mut PathValidator) -> Result<(), ValidationError> {
    bot.move_forward()?;
    bot.turn_left()?;
    bot.move_forward()?;
    bot.turn_right()?;
    Ok(())
}

fn main() {
    println!("=== Safe Execution Demo ===\n");

    let mut bot = PathValidator::new(
        "Courier",
        vec![Step::Forward, Step::Left, Step::Forward, Step::Right],
    );

    // Propagate with ? and decide at the top level.
    match go_home(&mut bot) {
        Ok(()) => println!("{} made it home.", bot.name()),
        Err(e) => println!("{} failed to get home: {}", bot.name(), e),
    }

    // move_safely folds any outcome into one message string.
    println!("\n=== Outcome Reporting ===");
    bot.reset();
    println!("{}", move_safely(|| go_home(&mut bot)));

    // The same closure form works for ad-hoc sequences. This one claims a
    // fifth move after the route is spent.
    bot.reset();
    let outcome = move_safely(|| {
        bot.move_forward()?;
        bot.turn_left()?;
        bot.move_forward()?;
        bot.turn_right()?;
        bot.move_forward()
    });
    println!("{}", outcome);

    // And a wrong turn mid-route reports both sides of the mismatch.
    bot.reset();
    let outcome = move_safely(|| {
        bot.move_forward()?;
        bot.turn_right()
    });
    println!("{}", outcome);

    // perform() repeats one movement against a repetitive path.
    println!("\n=== Repeating a Movement ===");
    let mut pacer = PathValidator::new("Pacer", vec![Step::Forward; 3]);
    match perform(3, || pacer.move_forward()) {
        Ok(()) => println!("Paced {} steps forward.", pacer.cursor()),
        Err(e) => println!("Pacing stopped: {}", e),
    }

    println!("\n=== Key Points ===");
    println!("1. ? keeps multi-step sequences linear and stops at the first rejection");
    println!("2. Failures never advance the cursor, so recovery is the caller's choice");
    println!("3. A closure adapter turns Result values into user-facing text in one place");
}
